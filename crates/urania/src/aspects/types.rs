use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectClass {
    Major,
    Minor,
}

/// How close an aspect is to exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Orb within 0.5°
    Exact,
    /// Orb within 1°
    Close,
    None,
}

impl Importance {
    pub fn from_orb(orb: f64) -> Self {
        if orb <= 0.5 {
            Importance::Exact
        } else if orb <= 1.0 {
            Importance::Close
        } else {
            Importance::None
        }
    }
}

/// One named angular relationship and its tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub name: String,
    /// Exact angle in degrees (0..=180)
    pub exact_angle: f64,
    /// Largest accepted deviation from `exact_angle`
    pub max_orb: f64,
    pub classification: AspectClass,
    #[serde(default)]
    pub keywords: String,
}

impl AspectDefinition {
    pub fn new(
        name: &str,
        exact_angle: f64,
        max_orb: f64,
        classification: AspectClass,
        keywords: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            exact_angle,
            max_orb,
            classification,
            keywords: keywords.to_string(),
        }
    }
}

/// Ordered, immutable set of aspect definitions.
///
/// Table order is the tie-break order for aspects of equal strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectTable {
    definitions: Vec<AspectDefinition>,
}

impl AspectTable {
    pub fn new(definitions: Vec<AspectDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn get(&self, name: &str) -> Option<&AspectDefinition> {
        self.definitions
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Keep only the major aspects.
    pub fn major_only(&self) -> Self {
        let definitions = self
            .definitions
            .iter()
            .filter(|d| d.classification == AspectClass::Major)
            .cloned()
            .collect();
        Self { definitions }
    }
}

impl Default for AspectTable {
    fn default() -> Self {
        use AspectClass::{Major, Minor};
        Self::new(vec![
            AspectDefinition::new(CONJUNCTION, 0.0, 8.0, Major, "fusion, intensity, new beginnings"),
            AspectDefinition::new(OPPOSITION, 180.0, 8.0, Major, "polarity, awareness, tension"),
            AspectDefinition::new(SQUARE, 90.0, 6.0, Major, "friction, challenge, action"),
            AspectDefinition::new(TRINE, 120.0, 6.0, Major, "harmony, ease, flow"),
            AspectDefinition::new(SEXTILE, 60.0, 4.0, Major, "opportunity, cooperation"),
            AspectDefinition::new(QUINCUNX, 150.0, 3.0, Minor, "adjustment, discomfort"),
            AspectDefinition::new(SEMI_SEXTILE, 30.0, 2.0, Minor, "growth, subtle connection"),
            AspectDefinition::new(SEMI_SQUARE, 45.0, 2.0, Minor, "irritation, minor friction"),
            AspectDefinition::new(SESQUIQUADRATE, 135.0, 2.0, Minor, "agitation, restlessness"),
        ])
    }
}

pub const CONJUNCTION: &str = "Conjunction";
pub const OPPOSITION: &str = "Opposition";
pub const SQUARE: &str = "Square";
pub const TRINE: &str = "Trine";
pub const SEXTILE: &str = "Sextile";
pub const QUINCUNX: &str = "Quincunx";
pub const SEMI_SEXTILE: &str = "Semi-sextile";
pub const SEMI_SQUARE: &str = "Semi-square";
pub const SESQUIQUADRATE: &str = "Sesquiquadrate";

/// A detected aspect between two bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: String,
    pub body_b: String,
    /// Aspect name: "Trine", "Square", etc.
    pub aspect: String,
    pub exact_angle: f64,
    /// Deviation from the exact angle, never above the definition's max orb
    pub orb: f64,
    /// 1 at exact, 0 at the edge of the orb
    pub strength: f64,
    pub classification: AspectClass,
    pub importance: Importance,
}

/// Which chart a body belongs to when several charts are compared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartId(pub String);

impl ChartId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A body longitude tagged with the chart it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedPosition {
    pub origin: ChartId,
    pub body: String,
    pub longitude: f64,
}

/// An aspect whose participants carry their chart of origin.
///
/// `aspect.body_a` belongs to `origin_a`, `aspect.body_b` to `origin_b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedAspect {
    pub origin_a: ChartId,
    pub origin_b: ChartId,
    pub aspect: Aspect,
}

impl TaggedAspect {
    pub fn is_cross_chart(&self) -> bool {
        self.origin_a != self.origin_b
    }
}
