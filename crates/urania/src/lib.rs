//! Astrological analysis over externally supplied body positions.
//!
//! The crate does not compute raw positions. Callers inject an
//! [`EphemerisProvider`] and a [`HouseProvider`] (the Swiss Ephemeris
//! adapter ships behind the `swiss-ephemeris` feature) and get back plain
//! records: placements, aspects, patterns, Arabic parts, chart comparisons
//! and time-evolved charts.

pub mod aspects;
pub mod chart;
pub mod comparison;
pub mod ephemeris;
pub mod error;
pub mod geometry;
pub mod houses;
pub mod patterns;
pub mod settings;
pub mod temporal;
pub mod western;
pub mod zodiac;

pub use aspects::{Aspect, AspectEngine, AspectTable, ChartId, TaggedAspect, TaggedPosition};
pub use chart::{analyze_chart, ChartAnalysis, ChartAnalyzer, ChartInput, Positions};
pub use comparison::{MidpointChart, MultiChartAnalyzer};
pub use ephemeris::{
    Body, CachingEphemeris, EphemerisProvider, FallbackEphemeris, GeoLocation, HouseProvider,
    HouseSystem, NodeVariant, PositionLookup,
};
pub use error::{AnalysisError, Result};
pub use houses::HouseCusps;
pub use patterns::{Pattern, PatternDetector, PatternReport};
pub use settings::EngineSettings;
pub use temporal::TemporalEngine;
