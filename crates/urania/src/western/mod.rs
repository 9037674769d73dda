pub mod dignities;

pub use dignities::{Dignity, DignityEvaluator, ExactExaltation};
