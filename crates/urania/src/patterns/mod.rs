pub mod detector;
pub mod graph;
pub mod types;

pub use detector::{grand_trines, kites, t_squares, yods, PatternDetector};
pub use graph::AspectGraph;
pub use types::{Pattern, PatternReport, PatternSettings};
