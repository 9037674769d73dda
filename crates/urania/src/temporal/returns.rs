use super::{shift, TemporalEngine};
use crate::ephemeris::{require_position, Body, EphemerisProvider};
use crate::error::{AnalysisError, Result};
use crate::geometry::signed_difference;
use crate::settings::CycleSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnKind {
    Solar,
    Lunar,
}

impl ReturnKind {
    pub fn body(self) -> Body {
        match self {
            ReturnKind::Solar => Body::Sun,
            ReturnKind::Lunar => Body::Moon,
        }
    }
}

/// Instant a body came back to its natal longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnResult {
    pub kind: ReturnKind,
    pub cycle: i32,
    pub instant: DateTime<Utc>,
    /// Natal longitude being sought
    pub target_longitude: f64,
    /// Longitude of the body at `instant`
    pub longitude: f64,
    /// Signed difference `longitude - target_longitude`, in (-180, 180]
    pub residual: f64,
    pub iterations: u32,
    /// False when the iteration cap ran out before the tolerance was met.
    /// `instant` is then the last midpoint, still usable as an estimate.
    pub converged: bool,
}

impl<P: EphemerisProvider> TemporalEngine<P> {
    pub fn solar_return(&self, natal: DateTime<Utc>, cycle: i32) -> Result<ReturnResult> {
        self.find_return(ReturnKind::Solar, natal, cycle)
    }

    pub fn lunar_return(&self, natal: DateTime<Utc>, cycle: i32) -> Result<ReturnResult> {
        self.find_return(ReturnKind::Lunar, natal, cycle)
    }

    /// Bisection for the `cycle`-th return after (or before, when negative)
    /// `natal`.
    ///
    /// The bracket is centred on `natal + period * cycle`. Within it the
    /// body's longitude must increase monotonically, which holds for the
    /// Sun and Moon.
    pub fn find_return(
        &self,
        kind: ReturnKind,
        natal: DateTime<Utc>,
        cycle: i32,
    ) -> Result<ReturnResult> {
        let body = kind.body();
        let target = require_position(&self.provider, natal, body, None)?.longitude;

        let CycleSettings {
            period_days,
            bracket_days,
        } = match kind {
            ReturnKind::Solar => self.returns.solar,
            ReturnKind::Lunar => self.returns.lunar,
        };
        let estimate = shift(natal, period_days * f64::from(cycle));
        let mut low = shift(estimate, -bracket_days);
        let mut high = shift(estimate, bracket_days);

        let max_iterations = self.returns.max_iterations.max(1);
        let tolerance = self.returns.tolerance;
        let mut result = None;

        for iteration in 1..=max_iterations {
            let mid = low + (high - low) / 2;
            let longitude = require_position(&self.provider, mid, body, None)?.longitude;
            let residual = signed_difference(longitude, target);

            let converged = residual.abs() < tolerance;
            result = Some(ReturnResult {
                kind,
                cycle,
                instant: mid,
                target_longitude: target,
                longitude,
                residual,
                iterations: iteration,
                converged,
            });
            if converged {
                break;
            }

            if residual > 0.0 {
                high = mid;
            } else {
                low = mid;
            }
        }

        // max_iterations >= 1, so the loop ran at least once
        let result = result.ok_or_else(|| AnalysisError::CalculationFailed {
            body: body.name().to_string(),
            message: "return search did not run".to_string(),
        })?;

        if result.converged {
            log::info!(
                "{:?} return {} found at {} after {} iterations",
                kind,
                cycle,
                result.instant,
                result.iterations
            );
        } else {
            log::warn!(
                "{:?} return {} did not converge in {} iterations (residual {:.2e}°); using {}",
                kind,
                cycle,
                max_iterations,
                result.residual,
                result.instant
            );
        }
        Ok(result)
    }
}
