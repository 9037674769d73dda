//! Time-evolving techniques: progressions, returns, transits and
//! electional scans.
//!
//! Everything here re-queries the injected [`EphemerisProvider`] at
//! instants other than the natal one. Wrap an expensive provider in
//! [`CachingEphemeris`](crate::ephemeris::CachingEphemeris) before handing
//! it over.

pub mod electional;
pub mod progression;
pub mod returns;
pub mod transit;

pub use electional::{ElectionalHit, ElectionalQuery};
pub use progression::{Progression, SolarArc};
pub use returns::{ReturnKind, ReturnResult};
pub use transit::TransitReport;

use crate::aspects::AspectEngine;
use crate::ephemeris::{EphemerisProvider, NodeVariant};
use crate::settings::{EngineSettings, ReturnSettings};
use chrono::{DateTime, Duration, Utc};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

pub struct TemporalEngine<P> {
    provider: P,
    aspects: AspectEngine,
    returns: ReturnSettings,
    node: Option<NodeVariant>,
}

impl<P: EphemerisProvider> TemporalEngine<P> {
    pub fn new(provider: P, settings: &EngineSettings) -> Self {
        Self {
            provider,
            aspects: AspectEngine::new(settings.aspects.clone()),
            returns: settings.returns.clone(),
            node: Some(settings.node),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn return_settings(&self) -> &ReturnSettings {
        &self.returns
    }
}

/// Move an instant by a fractional number of days.
pub(crate) fn shift(instant: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    instant + Duration::microseconds((days * MICROS_PER_DAY).round() as i64)
}

/// Signed days from `from` to `to`.
pub(crate) fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 86_400_000.0
}
