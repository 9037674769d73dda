pub mod calculator;
pub mod types;

pub use calculator::AspectEngine;
pub use types::{
    Aspect, AspectClass, AspectDefinition, AspectTable, ChartId, Importance, TaggedAspect,
    TaggedPosition,
};
