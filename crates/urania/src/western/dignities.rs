//! Essential dignities for Western astrology.
//!
//! A body's dignity follows from the sign it occupies: domicile and
//! exaltation come from fixed tables, detriment and fall are the signs
//! opposite those.

use crate::geometry::angular_distance;
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dignity {
    Domicile,
    Detriment,
    Exaltation,
    Fall,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExactExaltation {
    #[serde(rename = "planetId")]
    pub planet_id: String,
    pub position: f64, // Longitude in degrees
    pub orbit: f64,    // Orb in degrees (default 2)
}

const DOMICILES: &[(&str, &[Sign])] = &[
    ("sun", &[Sign::Leo]),
    ("moon", &[Sign::Cancer]),
    ("mercury", &[Sign::Gemini, Sign::Virgo]),
    ("venus", &[Sign::Taurus, Sign::Libra]),
    ("mars", &[Sign::Aries, Sign::Scorpio]),
    ("jupiter", &[Sign::Sagittarius, Sign::Pisces]),
    ("saturn", &[Sign::Capricorn, Sign::Aquarius]),
    ("uranus", &[Sign::Aquarius]),
    ("neptune", &[Sign::Pisces]),
    ("pluto", &[Sign::Scorpio]),
];

const EXALTATIONS: &[(&str, Sign)] = &[
    ("sun", Sign::Aries),
    ("moon", Sign::Taurus),
    ("mercury", Sign::Virgo),
    ("venus", Sign::Pisces),
    ("mars", Sign::Capricorn),
    ("jupiter", Sign::Cancer),
    ("saturn", Sign::Libra),
    ("pluto", Sign::Aries),
];

/// Looks up essential dignities by body name (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct DignityEvaluator {
    exact_exaltations: Vec<ExactExaltation>,
}

impl DignityEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator that also knows the exact exaltation degrees.
    pub fn with_exact_exaltations(exact_exaltations: Vec<ExactExaltation>) -> Self {
        Self { exact_exaltations }
    }

    /// Dignity of `body` at `longitude`.
    ///
    /// Domicile and detriment win over exaltation and fall. Bodies missing
    /// from the tables get `Dignity::None`.
    pub fn dignity(&self, body: &str, longitude: f64) -> Dignity {
        let body = body.to_lowercase();
        let sign = Sign::from_longitude(longitude);

        if let Some((_, domiciles)) = DOMICILES.iter().find(|(id, _)| *id == body) {
            if domiciles.contains(&sign) {
                return Dignity::Domicile;
            }
            if domiciles.iter().any(|d| d.opposite() == sign) {
                return Dignity::Detriment;
            }
        }

        if let Some((_, exaltation)) = EXALTATIONS.iter().find(|(id, _)| *id == body) {
            if *exaltation == sign {
                return Dignity::Exaltation;
            }
            if exaltation.opposite() == sign {
                return Dignity::Fall;
            }
        }

        Dignity::None
    }

    /// Whether `body` sits within orb of its exact exaltation degree.
    pub fn exact_exaltation(&self, body: &str, longitude: f64) -> bool {
        let body = body.to_lowercase();
        self.exact_exaltations
            .iter()
            .filter(|e| e.planet_id.to_lowercase() == body)
            .any(|e| angular_distance(longitude, e.position) <= e.orbit)
    }

    /// Default exact exaltation positions (based on Aleister Crowley)
    pub fn default_exact_exaltations() -> Vec<ExactExaltation> {
        [
            ("sun", 19.0),
            ("moon", 33.0),
            ("mercury", 165.0),
            ("venus", 357.0),
            ("mars", 298.0),
            ("jupiter", 95.0),
            ("saturn", 201.0),
        ]
        .into_iter()
        .map(|(id, position)| ExactExaltation {
            planet_id: id.to_string(),
            position,
            orbit: 2.0,
        })
        .collect()
    }
}
