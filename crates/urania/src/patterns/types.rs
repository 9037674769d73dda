use crate::zodiac::{Modality, Sign};
use serde::{Deserialize, Serialize};

/// A multi-body configuration found over the aspect graph.
///
/// Body tuples are always sorted, so the same set of bodies compares equal
/// however it was discovered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Pattern {
    GrandTrine {
        bodies: [String; 3],
    },
    TSquare {
        bodies: [String; 3],
        /// Set when all three bodies share a modality
        modality: Option<Modality>,
    },
    Kite {
        bodies: [String; 4],
    },
    Yod {
        bodies: [String; 3],
    },
    Stellium {
        sign: Sign,
        bodies: Vec<String>,
    },
}

impl Pattern {
    pub fn bodies(&self) -> &[String] {
        match self {
            Pattern::GrandTrine { bodies } => bodies,
            Pattern::TSquare { bodies, .. } => bodies,
            Pattern::Kite { bodies } => bodies,
            Pattern::Yod { bodies } => bodies,
            Pattern::Stellium { bodies, .. } => bodies,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::GrandTrine { .. } => "Grand Trine",
            Pattern::TSquare { .. } => "T-Square",
            Pattern::Kite { .. } => "Kite",
            Pattern::Yod { .. } => "Yod",
            Pattern::Stellium { .. } => "Stellium",
        }
    }
}

/// Tunables for pattern detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    /// Widest spread, in degrees within one sign, a stellium may cover
    pub stellium_span: f64,
    /// Fewest bodies that count as a stellium
    pub stellium_min_bodies: usize,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            stellium_span: 8.0,
            stellium_min_bodies: 3,
        }
    }
}

/// Every pattern found in one chart, grouped by kind.
///
/// Each group is sorted lexicographically on its canonical tuples and holds
/// no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    pub grand_trines: Vec<Pattern>,
    pub t_squares: Vec<Pattern>,
    pub kites: Vec<Pattern>,
    pub yods: Vec<Pattern>,
    pub stelliums: Vec<Pattern>,
}

impl PatternReport {
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.grand_trines
            .iter()
            .chain(&self.t_squares)
            .chain(&self.kites)
            .chain(&self.yods)
            .chain(&self.stelliums)
    }
}
