use crate::chart::ChartAngles;
use crate::error::AnalysisError;
use crate::houses::HouseCusps;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Bodies an ephemeris provider can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    SouthNode,
    /// Black Moon Lilith, the mean lunar apogee
    Lilith,
}

/// The bodies a natal chart is built from by default.
pub const CHART_BODIES: &[Body] = &[
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
];

const BODY_NAMES: &[(Body, &str)] = &[
    (Body::Sun, "Sun"),
    (Body::Moon, "Moon"),
    (Body::Mercury, "Mercury"),
    (Body::Venus, "Venus"),
    (Body::Mars, "Mars"),
    (Body::Jupiter, "Jupiter"),
    (Body::Saturn, "Saturn"),
    (Body::Uranus, "Uranus"),
    (Body::Neptune, "Neptune"),
    (Body::Pluto, "Pluto"),
    (Body::Chiron, "Chiron"),
    (Body::NorthNode, "North Node"),
    (Body::SouthNode, "South Node"),
    (Body::Lilith, "Lilith"),
];

impl Body {
    /// Display name used as the key in position maps.
    pub fn name(self) -> &'static str {
        BODY_NAMES
            .iter()
            .find(|(b, _)| *b == self)
            .map(|(_, n)| *n)
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = AnalysisError;

    /// Accepts display names and snake_case ids, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', '-'], " ");
        let wanted = match wanted.as_str() {
            "mean node" | "true node" | "node" => "north node".to_string(),
            "black moon lilith" | "mean apogee" => "lilith".to_string(),
            _ => wanted,
        };
        BODY_NAMES
            .iter()
            .find(|(_, name)| name.to_lowercase() == wanted)
            .map(|(b, _)| *b)
            .ok_or_else(|| AnalysisError::CalculationFailed {
                body: s.to_string(),
                message: "Unknown body".to_string(),
            })
    }
}

/// Which lunar node calculation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeVariant {
    #[default]
    Mean,
    True,
}

/// Longitude and daily motion of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

/// Outcome of one provider query.
///
/// `Unavailable` is an ordinary answer, not an error: the caller decides
/// whether to try another source or fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionLookup {
    Found(BodyState),
    Unavailable(String),
}

impl PositionLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, PositionLookup::Found(_))
    }
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, char, HouseSystem)] = &[
    ("placidus", 'P', HouseSystem::Placidus),
    ("whole_sign", 'W', HouseSystem::WholeSign),
    ("koch", 'K', HouseSystem::Koch),
    ("equal", 'E', HouseSystem::Equal),
    ("regiomontanus", 'R', HouseSystem::Regiomontanus),
    ("campanus", 'C', HouseSystem::Campanus),
    ("alcabitius", 'A', HouseSystem::Alcabitius),
    ("morinus", 'M', HouseSystem::Morinus),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

impl HouseSystem {
    /// Single-letter code understood by the Swiss Ephemeris.
    pub fn code(self) -> char {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, system)| *system == self)
            .map(|(_, code, _)| *code)
            .unwrap_or('P')
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, system)| *system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("placidus")
    }
}

impl FromStr for HouseSystem {
    type Err = AnalysisError;

    /// Accepts full names (`"whole_sign"`) or single-letter codes (`"W"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase().replace(['-', ' '], "_");
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, code, _)| {
                *name == lower || (trimmed.len() == 1 && trimmed.eq_ignore_ascii_case(&code.to_string()))
            })
            .map(|(_, _, system)| *system)
            .ok_or_else(|| AnalysisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _, _)| name.to_string()).collect(),
            })
    }
}

impl TryFrom<String> for HouseSystem {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Cusps and angles returned by a house provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    pub system: HouseSystem,
    pub cusps: HouseCusps,
    pub angles: ChartAngles,
}
