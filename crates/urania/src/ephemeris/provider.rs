//! Provider traits consumed by the engine, plus the fallback and caching
//! wrappers callers compose around them.

use crate::chart::{BodyPosition, Positions};
use crate::ephemeris::types::{
    Body, BodyState, GeoLocation, HouseFrame, HouseSystem, NodeVariant, PositionLookup,
};
use crate::error::{AnalysisError, Result};
use crate::geometry::normalize_degrees;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Source of body longitudes and speeds.
pub trait EphemerisProvider {
    fn query_position(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        node: Option<NodeVariant>,
    ) -> PositionLookup;
}

/// Source of house cusps and chart angles.
pub trait HouseProvider {
    fn compute_houses(
        &self,
        instant: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn query_position(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        node: Option<NodeVariant>,
    ) -> PositionLookup {
        (**self).query_position(instant, body, node)
    }
}

/// Query one body, turning `Unavailable` into an error.
///
/// The south node is derived from the north node, so providers never need
/// to supply it themselves.
pub fn require_position<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
    body: Body,
    node: Option<NodeVariant>,
) -> Result<BodyState> {
    if body == Body::SouthNode {
        let north = require_position(provider, instant, Body::NorthNode, node)?;
        return Ok(BodyState {
            longitude: normalize_degrees(north.longitude + 180.0),
            speed: north.speed,
        });
    }
    match provider.query_position(instant, body, node) {
        PositionLookup::Found(state) => Ok(BodyState {
            longitude: normalize_degrees(state.longitude),
            speed: state.speed,
        }),
        PositionLookup::Unavailable(reason) => Err(AnalysisError::PositionUnavailable {
            body: body.name().to_string(),
            instant,
            reason,
        }),
    }
}

/// Query a list of bodies at one instant.
///
/// Fails on the first unavailable body rather than returning a partial
/// chart.
pub fn query_bodies<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
    bodies: &[Body],
    node: Option<NodeVariant>,
) -> Result<Vec<BodyPosition>> {
    bodies
        .iter()
        .map(|body| {
            require_position(provider, instant, *body, node).map(|state| BodyPosition {
                name: body.name().to_string(),
                longitude: state.longitude,
                speed: state.speed,
            })
        })
        .collect()
}

/// Same as [`query_bodies`], keyed by body name.
pub fn query_positions<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
    bodies: &[Body],
    node: Option<NodeVariant>,
) -> Result<Positions> {
    Ok(query_bodies(provider, instant, bodies, node)?
        .into_iter()
        .map(|b| (b.name, b.longitude))
        .collect())
}

/// Tries `primary`, then `secondary` for bodies the primary lacks.
pub struct FallbackEphemeris<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackEphemeris<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: EphemerisProvider, S: EphemerisProvider> EphemerisProvider for FallbackEphemeris<P, S> {
    fn query_position(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        node: Option<NodeVariant>,
    ) -> PositionLookup {
        match self.primary.query_position(instant, body, node) {
            found @ PositionLookup::Found(_) => found,
            PositionLookup::Unavailable(reason) => {
                log::warn!(
                    "Primary ephemeris has no {} at {} ({}); trying secondary",
                    body,
                    instant,
                    reason
                );
                self.secondary.query_position(instant, body, node)
            }
        }
    }
}

type CacheKey = (i64, Body, Option<NodeVariant>);

/// Memoizes lookups by (instant, body, node variant).
///
/// Unavailable answers are cached too, so a missing body is not re-queried
/// for the same instant.
pub struct CachingEphemeris<P> {
    inner: P,
    cache: Mutex<HashMap<CacheKey, PositionLookup>>,
}

impl<P> CachingEphemeris<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl<P: EphemerisProvider> EphemerisProvider for CachingEphemeris<P> {
    fn query_position(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        node: Option<NodeVariant>,
    ) -> PositionLookup {
        let key = (instant.timestamp_micros(), body, node);
        if let Ok(cache) = self.cache.lock() {
            if let Some(hit) = cache.get(&key) {
                return hit.clone();
            }
        }
        let lookup = self.inner.query_position(instant, body, node);
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, lookup.clone());
        }
        lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed {
        longitude: f64,
        known: &'static [Body],
        calls: Cell<usize>,
    }

    impl EphemerisProvider for Fixed {
        fn query_position(
            &self,
            _instant: DateTime<Utc>,
            body: Body,
            _node: Option<NodeVariant>,
        ) -> PositionLookup {
            self.calls.set(self.calls.get() + 1);
            if self.known.contains(&body) {
                PositionLookup::Found(BodyState {
                    longitude: self.longitude,
                    speed: 1.0,
                })
            } else {
                PositionLookup::Unavailable(format!("no data for {}", body))
            }
        }
    }

    fn fixed(longitude: f64, known: &'static [Body]) -> Fixed {
        Fixed {
            longitude,
            known,
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_unavailable_becomes_error() {
        let provider = fixed(10.0, &[Body::Sun]);
        let err = require_position(&provider, Utc::now(), Body::Chiron, None).unwrap_err();
        assert!(matches!(err, AnalysisError::PositionUnavailable { .. }));
    }

    #[test]
    fn test_south_node_is_derived() {
        let provider = fixed(350.0, &[Body::NorthNode]);
        let state = require_position(&provider, Utc::now(), Body::SouthNode, None).unwrap();
        assert_eq!(state.longitude, 170.0);
    }

    #[test]
    fn test_fallback_uses_secondary_for_missing_bodies() {
        let provider = FallbackEphemeris::new(fixed(10.0, &[Body::Sun]), fixed(20.0, &[Body::Chiron]));
        let now = Utc::now();
        assert_eq!(
            provider.query_position(now, Body::Sun, None),
            PositionLookup::Found(BodyState { longitude: 10.0, speed: 1.0 })
        );
        assert_eq!(
            provider.query_position(now, Body::Chiron, None),
            PositionLookup::Found(BodyState { longitude: 20.0, speed: 1.0 })
        );
        assert!(!provider.query_position(now, Body::Pluto, None).is_found());
    }

    #[test]
    fn test_cache_memoizes_per_instant() {
        let provider = CachingEphemeris::new(fixed(10.0, &[Body::Sun]));
        let now = Utc::now();
        provider.query_position(now, Body::Sun, None);
        provider.query_position(now, Body::Sun, None);
        provider.query_position(now, Body::Moon, None);
        assert_eq!(provider.inner.calls.get(), 2);
        assert_eq!(provider.cached_entries(), 2);
    }
}
