use super::TemporalEngine;
use crate::ephemeris::{require_position, Body, EphemerisProvider};
use crate::error::{AnalysisError, Result};
use crate::geometry::signed_difference;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Scan parameters for an electional search.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectionalQuery {
    /// Fixed longitude the moving body is measured against, e.g. the natal Sun
    pub reference_longitude: f64,
    pub moving_body: Body,
    pub start: DateTime<Utc>,
    /// Inclusive
    pub end: DateTime<Utc>,
    pub step: Duration,
    /// Signed: 90 is the waxing square, -90 the waning one. Compared
    /// circularly, so 180 and -180 both catch the whole opposition.
    pub target_angle: f64,
    pub orb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionalHit {
    pub instant: DateTime<Utc>,
    pub longitude: f64,
    /// Signed difference moving - reference, in (-180, 180]
    pub difference: f64,
}

impl<P: EphemerisProvider> TemporalEngine<P> {
    /// Every sampled instant where the moving body sits within `orb` of
    /// `target_angle` from the reference.
    ///
    /// Samples are not refined; a narrow orb with a coarse step can miss a
    /// window entirely.
    pub fn electional_search(&self, query: &ElectionalQuery) -> Result<Vec<ElectionalHit>> {
        if query.step <= Duration::zero() {
            return Err(AnalysisError::InvalidSettings(format!(
                "electional step must be positive, got {}",
                query.step
            )));
        }

        let mut hits = Vec::new();
        let mut samples = 0usize;
        let mut instant = query.start;
        while instant <= query.end {
            let longitude =
                require_position(&self.provider, instant, query.moving_body, self.node)?.longitude;
            let difference = signed_difference(longitude, query.reference_longitude);
            if signed_difference(difference, query.target_angle).abs() <= query.orb {
                hits.push(ElectionalHit {
                    instant,
                    longitude,
                    difference,
                });
            }
            samples += 1;
            instant += query.step;
        }

        log::debug!(
            "Electional scan of {} over {} samples: {} hits",
            query.moving_body,
            samples,
            hits.len()
        );
        Ok(hits)
    }
}
