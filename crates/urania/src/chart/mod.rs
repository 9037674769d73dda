pub mod analysis;
pub mod points;
pub mod types;

pub use analysis::{analyze_chart, ChartAnalysis, ChartAnalyzer, ChartInput, Placement};
pub use points::{arabic_parts, ArabicPart, ArabicPartKind, PartInputs};
pub use types::{positions_map, BodyPosition, ChartAngles, Positions};
