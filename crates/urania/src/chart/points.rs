//! Arabic parts derived from the ascendant and two body longitudes.

use crate::chart::types::Positions;
use crate::error::{AnalysisError, Result};
use crate::geometry::normalize_degrees;
use crate::houses::HouseCusps;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArabicPartKind {
    Fortune,
    Spirit,
    Love,
    Marriage,
    Death,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArabicPart {
    pub kind: ArabicPartKind,
    pub longitude: f64,
}

/// Longitudes the part formulas draw on.
///
/// Venus and Saturn are optional; the parts needing them are skipped when
/// they are absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartInputs {
    pub ascendant: f64,
    pub sun: f64,
    pub moon: f64,
    pub venus: Option<f64>,
    pub saturn: Option<f64>,
}

impl PartInputs {
    /// Pull Sun, Moon, Venus and Saturn out of a position map (names are
    /// matched case-insensitively).
    pub fn from_positions(ascendant: f64, positions: &Positions) -> Result<Self> {
        let find = |name: &str| {
            positions
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| *v)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| AnalysisError::MissingBody {
                body: name.to_string(),
            })
        };
        Ok(Self {
            ascendant,
            sun: require("sun")?,
            moon: require("moon")?,
            venus: find("venus"),
            saturn: find("saturn"),
        })
    }
}

/// Fortune and Spirit swap formulas with the Sun's house; the rest are fixed.
pub fn arabic_parts(inputs: &PartInputs, cusps: &HouseCusps) -> Vec<ArabicPart> {
    let PartInputs {
        ascendant: asc,
        sun,
        moon,
        venus,
        saturn,
    } = *inputs;

    let sun_house = cusps.house_for(sun);
    let (fortune, spirit) = if sun_house >= 7 {
        (asc + moon - sun, asc + sun - moon)
    } else {
        (asc + sun - moon, asc + moon - sun)
    };

    let mut parts = vec![
        part(ArabicPartKind::Fortune, fortune),
        part(ArabicPartKind::Spirit, spirit),
    ];
    if let Some(venus) = venus {
        let descendant = cusps.cusp(7);
        parts.push(part(ArabicPartKind::Love, asc + venus - sun));
        parts.push(part(ArabicPartKind::Marriage, asc + descendant - venus));
    }
    if let Some(saturn) = saturn {
        parts.push(part(ArabicPartKind::Death, asc + saturn - moon));
    }
    parts
}

fn part(kind: ArabicPartKind, raw: f64) -> ArabicPart {
    ArabicPart {
        kind,
        longitude: normalize_degrees(raw),
    }
}
