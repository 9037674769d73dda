use crate::geometry::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body name -> longitude in degrees.
///
/// Ordered by name so every pass over a chart enumerates bodies in the same
/// order.
pub type Positions = BTreeMap<String, f64>;

/// A body's position at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub name: String,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    /// Speed in longitude (degrees per day)
    #[serde(default)]
    pub speed: f64,
}

impl BodyPosition {
    pub fn new(name: &str, longitude: f64, speed: f64) -> Self {
        Self {
            name: name.to_string(),
            longitude: normalize_degrees(longitude),
            speed,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Chart angles derived from the house frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    #[serde(default)]
    pub vertex: f64,
}

impl ChartAngles {
    pub fn new(ascendant: f64, midheaven: f64, vertex: f64) -> Self {
        Self {
            ascendant: normalize_degrees(ascendant),
            midheaven: normalize_degrees(midheaven),
            vertex: normalize_degrees(vertex),
        }
    }
}

/// Collapse a position list into a name-ordered longitude map.
///
/// A repeated name keeps its last longitude.
pub fn positions_map(bodies: &[BodyPosition]) -> Positions {
    bodies
        .iter()
        .map(|b| (b.name.clone(), normalize_degrees(b.longitude)))
        .collect()
}
