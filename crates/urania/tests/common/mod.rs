//! Deterministic stand-in for a real ephemeris.
//!
//! Every body moves at its mean daily motion from a fixed longitude at
//! J2000. Good enough to exercise returns and scans, useless for real charts.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use urania::chart::{ChartAngles, Positions};
use urania::ephemeris::{
    Body, BodyState, EphemerisProvider, GeoLocation, HouseFrame, HouseProvider, HouseSystem,
    NodeVariant, PositionLookup,
};
use urania::houses::HouseCusps;

/// (body, longitude at J2000, degrees per day)
const ELEMENTS: &[(Body, f64, f64)] = &[
    (Body::Sun, 280.46, 0.985_647_4),
    (Body::Moon, 218.32, 13.176_396),
    (Body::Mercury, 252.25, 4.092_339),
    (Body::Venus, 181.98, 1.602_131),
    (Body::Mars, 355.43, 0.524_039),
    (Body::Jupiter, 34.35, 0.083_086),
    (Body::Saturn, 50.08, 0.033_459),
    (Body::Uranus, 314.06, 0.011_732),
    (Body::Neptune, 304.35, 0.005_981),
    (Body::Pluto, 238.93, 0.003_964),
    (Body::Chiron, 251.0, 0.019_5),
    (Body::NorthNode, 125.04, -0.052_954),
    (Body::Lilith, 263.35, 0.111_404),
];

pub fn j2000() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
}

fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    (instant - j2000()).num_microseconds().unwrap() as f64 / 86_400_000_000.0
}

pub struct MeanMotionEphemeris {
    missing: Vec<Body>,
}

impl MeanMotionEphemeris {
    pub fn new() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    /// An ephemeris that answers `Unavailable` for `missing`.
    pub fn without(missing: &[Body]) -> Self {
        Self {
            missing: missing.to_vec(),
        }
    }

    pub fn longitude(&self, instant: DateTime<Utc>, body: Body) -> f64 {
        let (_, base, speed) = ELEMENTS.iter().find(|(b, _, _)| *b == body).unwrap();
        (base + speed * days_since_j2000(instant)).rem_euclid(360.0)
    }
}

impl EphemerisProvider for MeanMotionEphemeris {
    fn query_position(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        _node: Option<NodeVariant>,
    ) -> PositionLookup {
        if self.missing.contains(&body) {
            return PositionLookup::Unavailable(format!("{} not in test tables", body));
        }
        match ELEMENTS.iter().find(|(b, _, _)| *b == body) {
            Some((_, base, speed)) => PositionLookup::Found(BodyState {
                longitude: (base + speed * days_since_j2000(instant)).rem_euclid(360.0),
                speed: *speed,
            }),
            None => PositionLookup::Unavailable(format!("{} not in test tables", body)),
        }
    }
}

impl HouseProvider for MeanMotionEphemeris {
    /// Equal houses from an ascendant that turns once per sidereal day.
    fn compute_houses(
        &self,
        instant: DateTime<Utc>,
        location: GeoLocation,
        system: HouseSystem,
    ) -> urania::Result<HouseFrame> {
        let ascendant =
            (100.0 + location.lon + 360.985_647 * days_since_j2000(instant)).rem_euclid(360.0);
        Ok(HouseFrame {
            system,
            cusps: HouseCusps::equal_from(ascendant),
            angles: ChartAngles::new(ascendant, ascendant + 270.0, ascendant + 180.0),
        })
    }
}

pub fn positions(bodies: &[(&str, f64)]) -> Positions {
    bodies.iter().map(|(n, l)| (n.to_string(), *l)).collect()
}
