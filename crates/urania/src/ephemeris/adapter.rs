//! Swiss Ephemeris backend for both provider traits.
//!
//! Only compiled with the `swiss-ephemeris` feature.

use crate::chart::ChartAngles;
use crate::ephemeris::provider::{EphemerisProvider, HouseProvider};
use crate::ephemeris::types::{
    Body, BodyState, GeoLocation, HouseFrame, HouseSystem, NodeVariant, PositionLookup,
};
use crate::error::{AnalysisError, Result};
use crate::houses::HouseCusps;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::PathBuf;
use swisseph::swe::{calc_ut, houses_ex, julday};

const FLG_SWIEPH: u32 = 2;
const FLG_SPEED3: u32 = 128;
const FLG_SPEED: u32 = 256;
const GREG_CAL: i32 = 1;

const MEAN_NODE: u32 = 10;
const TRUE_NODE: u32 = 11;

// Swiss Ephemeris body numbers
const PLANET_IDS: &[(Body, u32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
    (Body::Lilith, 12), // MEAN_APOG
    (Body::Chiron, 15),
];

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    _ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(AnalysisError::InvalidSettings(format!(
                "Ephemeris path {} does not exist. Please ensure Swiss Ephemeris data files are installed.",
                path.display()
            )));
        }
        log::info!("Using Swiss Ephemeris files from {}", path.display());

        Ok(Self {
            _ephemeris_path: path,
        })
    }

    fn body_code(body: Body, node: Option<NodeVariant>) -> Option<u32> {
        match body {
            Body::NorthNode => Some(match node.unwrap_or_default() {
                NodeVariant::Mean => MEAN_NODE,
                NodeVariant::True => TRUE_NODE,
            }),
            _ => PLANET_IDS
                .iter()
                .find(|(b, _)| *b == body)
                .map(|(_, code)| *code),
        }
    }

    /// Flags for one body.
    ///
    /// The mean apogee (Lilith) is computed with three-point numerical speed
    /// instead of the analytic speed every other body uses. Its reported
    /// speed therefore carries a different precision.
    fn flags_for(body: Body) -> u32 {
        match body {
            Body::Lilith => FLG_SWIEPH | FLG_SPEED3,
            _ => FLG_SWIEPH | FLG_SPEED,
        }
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn query_position(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        node: Option<NodeVariant>,
    ) -> PositionLookup {
        let Some(code) = Self::body_code(body, node) else {
            return PositionLookup::Unavailable(format!("{} has no Swiss Ephemeris number", body));
        };

        let jd = datetime_to_julian_day(instant);
        match calc_ut(jd, code, Self::flags_for(body)) {
            Ok(result) => PositionLookup::Found(BodyState {
                longitude: result.out[0].rem_euclid(360.0),
                speed: result.out[3],
            }),
            Err(e) => PositionLookup::Unavailable(format!("Swiss Ephemeris error: {}", e)),
        }
    }
}

impl HouseProvider for SwissEphemerisAdapter {
    fn compute_houses(
        &self,
        instant: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame> {
        let jd = datetime_to_julian_day(instant);
        let (c, a) = houses_ex(jd, FLG_SWIEPH as i32, location.lat, location.lon, system.code() as i32);

        // ascmc layout: [asc, mc, armc, vertex, ...]
        let vertex = a[3];

        use swisseph::{AscMc, Cusp};
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusps = HouseCusps::new([
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ]);

        Ok(HouseFrame {
            system,
            cusps,
            angles: ChartAngles::new(ascmc.ascendant, ascmc.mc, vertex),
        })
    }
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal = dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 3600.0;
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREG_CAL)
}
