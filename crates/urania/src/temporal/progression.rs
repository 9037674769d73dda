use super::{days_between, shift, TemporalEngine};
use crate::chart::{BodyPosition, Positions};
use crate::ephemeris::{query_bodies, require_position, Body, EphemerisProvider};
use crate::error::Result;
use crate::geometry::normalize_degrees;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Days of progressed time per year of real time.
const DAY_FOR_A_YEAR: f64 = 365.25;

/// Secondary-progressed chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    /// Instant the ephemeris was queried at
    pub progressed_instant: DateTime<Utc>,
    pub positions: Vec<BodyPosition>,
}

/// Natal chart advanced by the solar arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarArc {
    /// Degrees added to every natal body, in [0, 360)
    pub arc: f64,
    pub positions: Positions,
}

impl<P: EphemerisProvider> TemporalEngine<P> {
    /// Day-for-a-year progression: one day after birth stands for one year
    /// of life.
    pub fn secondary_progression(
        &self,
        natal: DateTime<Utc>,
        target: DateTime<Utc>,
        bodies: &[Body],
    ) -> Result<Progression> {
        let elapsed = days_between(natal, target);
        let progressed_instant = shift(natal, elapsed / DAY_FOR_A_YEAR);
        log::debug!(
            "Secondary progression for {}: querying {} bodies at {}",
            target,
            bodies.len(),
            progressed_instant
        );

        let positions = query_bodies(&self.provider, progressed_instant, bodies, self.node)?;
        Ok(Progression {
            progressed_instant,
            positions,
        })
    }

    /// Advance every natal body by the Sun's motion between `natal` and
    /// `target`.
    ///
    /// Only the Sun is queried; the other bodies are shifted uniformly.
    pub fn solar_arc(
        &self,
        natal: DateTime<Utc>,
        target: DateTime<Utc>,
        natal_positions: &Positions,
    ) -> Result<SolarArc> {
        let natal_sun = require_position(&self.provider, natal, Body::Sun, None)?;
        let target_sun = require_position(&self.provider, target, Body::Sun, None)?;
        let arc = normalize_degrees(target_sun.longitude - natal_sun.longitude);

        let positions = natal_positions
            .iter()
            .map(|(body, lon)| (body.clone(), normalize_degrees(lon + arc)))
            .collect();

        Ok(SolarArc { arc, positions })
    }
}
