//! One-call analysis of a single chart.

use crate::aspects::{Aspect, AspectEngine};
use crate::chart::points::{arabic_parts, ArabicPart, PartInputs};
use crate::chart::types::{positions_map, BodyPosition, ChartAngles};
use crate::ephemeris::{query_bodies, Body, EphemerisProvider, GeoLocation, HouseProvider};
use crate::error::Result;
use crate::houses::HouseCusps;
use crate::patterns::{PatternDetector, PatternReport};
use crate::settings::EngineSettings;
use crate::western::{Dignity, DignityEvaluator};
use crate::zodiac::{degree_in_sign, Sign};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw material for an analysis: bodies, cusps and angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub bodies: Vec<BodyPosition>,
    pub cusps: HouseCusps,
    pub angles: ChartAngles,
}

impl ChartInput {
    /// Query both providers for a chart at `instant` and `location`.
    pub fn compute<E, H>(
        ephemeris: &E,
        houses: &H,
        instant: DateTime<Utc>,
        location: GeoLocation,
        bodies: &[Body],
        settings: &EngineSettings,
    ) -> Result<Self>
    where
        E: EphemerisProvider + ?Sized,
        H: HouseProvider + ?Sized,
    {
        let frame = houses.compute_houses(instant, location, settings.house_system)?;
        let bodies = query_bodies(ephemeris, instant, bodies, Some(settings.node))?;
        Ok(Self {
            bodies,
            cusps: frame.cusps,
            angles: frame.angles,
        })
    }
}

/// Where one body sits and how it is dignified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub longitude: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub house: u8,
    pub dignity: Dignity,
    pub exact_exaltation: bool,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub placements: Vec<Placement>,
    pub angles: ChartAngles,
    pub cusps: HouseCusps,
    pub aspects: Vec<Aspect>,
    pub patterns: PatternReport,
    /// Empty when the chart lacks a Sun or Moon
    pub parts: Vec<ArabicPart>,
}

pub struct ChartAnalyzer {
    aspects: AspectEngine,
    patterns: PatternDetector,
    dignities: DignityEvaluator,
}

impl ChartAnalyzer {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            aspects: AspectEngine::new(settings.aspects.clone()),
            patterns: PatternDetector::new(settings.patterns.clone()),
            dignities: DignityEvaluator::with_exact_exaltations(
                DignityEvaluator::default_exact_exaltations(),
            ),
        }
    }

    pub fn aspect_engine(&self) -> &AspectEngine {
        &self.aspects
    }

    pub fn analyze(&self, input: &ChartInput) -> ChartAnalysis {
        let placements = input
            .bodies
            .iter()
            .map(|body| self.place(body, &input.cusps))
            .collect();

        let positions = positions_map(&input.bodies);
        let aspects = self.aspects.compute_aspects(&positions);
        let patterns = self.patterns.detect(&aspects, Some(&positions));

        let parts = match PartInputs::from_positions(input.angles.ascendant, &positions) {
            Ok(inputs) => arabic_parts(&inputs, &input.cusps),
            Err(e) => {
                log::debug!("Skipping Arabic parts: {}", e);
                Vec::new()
            }
        };

        ChartAnalysis {
            placements,
            angles: input.angles,
            cusps: input.cusps,
            aspects,
            patterns,
            parts,
        }
    }

    fn place(&self, body: &BodyPosition, cusps: &HouseCusps) -> Placement {
        Placement {
            name: body.name.clone(),
            longitude: body.longitude,
            sign: Sign::from_longitude(body.longitude),
            degree_in_sign: degree_in_sign(body.longitude),
            house: cusps.house_for(body.longitude),
            dignity: self.dignities.dignity(&body.name, body.longitude),
            exact_exaltation: self.dignities.exact_exaltation(&body.name, body.longitude),
            retrograde: body.is_retrograde(),
        }
    }
}

/// Analyze a chart with the given settings.
pub fn analyze_chart(input: &ChartInput, settings: &EngineSettings) -> ChartAnalysis {
    ChartAnalyzer::new(settings).analyze(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(bodies: &[(&str, f64, f64)]) -> ChartInput {
        ChartInput {
            bodies: bodies
                .iter()
                .map(|(n, l, s)| BodyPosition::new(n, *l, *s))
                .collect(),
            cusps: HouseCusps::equal_from(0.0),
            angles: ChartAngles::new(0.0, 270.0, 180.0),
        }
    }

    #[test]
    fn test_placements_carry_sign_house_and_dignity() {
        let analysis = analyze_chart(
            &input(&[("Sun", 125.0, 1.0), ("Mars", 45.0, -0.2)]),
            &EngineSettings::default(),
        );
        let sun = &analysis.placements[0];
        assert_eq!(sun.sign, Sign::Leo);
        assert_eq!(sun.house, 5);
        assert_eq!(sun.dignity, Dignity::Domicile);
        assert!((sun.degree_in_sign - 5.0).abs() < 1e-9);

        let mars = &analysis.placements[1];
        assert_eq!(mars.sign, Sign::Taurus);
        assert_eq!(mars.dignity, Dignity::Detriment);
        assert!(mars.retrograde);
    }

    #[test]
    fn test_parts_skipped_without_moon() {
        let analysis = analyze_chart(&input(&[("Sun", 10.0, 1.0)]), &EngineSettings::default());
        assert!(analysis.parts.is_empty());
        assert!(analysis.aspects.is_empty());
    }

    #[test]
    fn test_parts_present_with_sun_and_moon() {
        let analysis = analyze_chart(
            &input(&[("Sun", 10.0, 1.0), ("Moon", 100.0, 13.0)]),
            &EngineSettings::default(),
        );
        assert!(!analysis.parts.is_empty());
        assert_eq!(analysis.aspects.len(), 1);
        assert_eq!(analysis.aspects[0].aspect, "Square");
    }
}
