#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;
pub mod provider;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use provider::{
    query_bodies, query_positions, require_position, CachingEphemeris, EphemerisProvider,
    FallbackEphemeris, HouseProvider,
};
pub use types::{
    Body, BodyState, GeoLocation, HouseFrame, HouseSystem, NodeVariant, PositionLookup,
    CHART_BODIES,
};
