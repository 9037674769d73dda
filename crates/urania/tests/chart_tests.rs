mod common;

use chrono::{TimeZone, Utc};
use common::MeanMotionEphemeris;
use urania::chart::{analyze_chart, ArabicPartKind, BodyPosition, ChartAngles, ChartInput};
use urania::ephemeris::{
    query_positions, Body, FallbackEphemeris, GeoLocation, HouseProvider, HouseSystem,
    CHART_BODIES,
};
use urania::geometry::{angular_distance, short_arc_midpoint};
use urania::houses::{house_for, HouseCusps};
use urania::settings::EngineSettings;
use urania::AnalysisError;

#[test]
fn test_angular_distance_is_symmetric_and_bounded() {
    let samples = [0.0, 0.5, 29.9, 90.0, 179.99, 180.0, 181.0, 270.0, 359.9, 719.0, -45.0];
    for a in samples {
        for b in samples {
            let d = angular_distance(a, b);
            assert_eq!(d, angular_distance(b, a));
            assert!((0.0..=180.0).contains(&d), "{} {} -> {}", a, b, d);
        }
    }
}

#[test]
fn test_short_arc_midpoints() {
    assert_eq!(short_arc_midpoint(10.0, 350.0), 0.0);
    assert_eq!(short_arc_midpoint(0.0, 180.0), 90.0);
    assert_eq!(short_arc_midpoint(350.0, 20.0), 5.0);
}

#[test]
fn test_house_for_with_wrapping_cusps() {
    // Unequal cusps crossing 0 inside the 4th house
    let cusps = [
        200.0, 228.0, 259.0, 293.0, 325.0, 355.0, 20.0, 48.0, 79.0, 113.0, 145.0, 175.0,
    ];
    assert_eq!(house_for(200.0, &cusps), 1);
    assert_eq!(house_for(227.9, &cusps), 1);
    assert_eq!(house_for(228.0, &cusps), 2);
    assert_eq!(house_for(359.0, &cusps), 6);
    assert_eq!(house_for(0.0, &cusps), 6);
    assert_eq!(house_for(19.99, &cusps), 6);
    assert_eq!(house_for(20.0, &cusps), 7);
    assert_eq!(house_for(199.99, &cusps), 12);

    let mut lon = 0.0;
    while lon < 360.0 {
        assert!((1..=12).contains(&house_for(lon, &cusps)));
        lon += 0.25;
    }
}

#[test]
fn test_cusps_must_number_twelve() {
    let err = HouseCusps::from_slice(&[0.0; 11]).unwrap_err();
    assert_eq!(err, AnalysisError::InvalidCusps { count: 11 });
    assert!(serde_json::from_str::<HouseCusps>("[1, 2, 3]").is_err());
}

#[test]
fn test_analysis_from_providers() {
    let provider = MeanMotionEphemeris::new();
    let settings = EngineSettings::default();
    let instant = Utc.with_ymd_and_hms(1995, 7, 4, 16, 20, 0).unwrap();
    let location = GeoLocation {
        lat: 51.5,
        lon: -0.12,
    };

    let input =
        ChartInput::compute(&provider, &provider, instant, location, CHART_BODIES, &settings)
            .unwrap();
    assert_eq!(input.bodies.len(), CHART_BODIES.len());

    let analysis = analyze_chart(&input, &settings);
    assert_eq!(analysis.placements.len(), CHART_BODIES.len());
    assert!(analysis.placements.iter().all(|p| (1..=12).contains(&p.house)));
    // The mean node always moves backwards
    let node = analysis
        .placements
        .iter()
        .find(|p| p.name == "North Node")
        .unwrap();
    assert!(node.retrograde);

    let kinds: Vec<ArabicPartKind> = analysis.parts.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ArabicPartKind::Fortune,
            ArabicPartKind::Spirit,
            ArabicPartKind::Love,
            ArabicPartKind::Marriage,
            ArabicPartKind::Death,
        ]
    );
}

#[test]
fn test_missing_body_surfaces_instead_of_being_dropped() {
    let provider = MeanMotionEphemeris::without(&[Body::Chiron]);
    let instant = Utc.with_ymd_and_hms(1995, 7, 4, 16, 20, 0).unwrap();
    let err = query_positions(&provider, instant, &[Body::Sun, Body::Chiron], None).unwrap_err();
    match err {
        AnalysisError::PositionUnavailable { body, .. } => assert_eq!(body, "Chiron"),
        other => panic!("unexpected error {:?}", other),
    }

    let chained = FallbackEphemeris::new(provider, MeanMotionEphemeris::new());
    let found = query_positions(&chained, instant, &[Body::Sun, Body::Chiron], None).unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn test_house_provider_returns_twelve_cusps() {
    let provider = MeanMotionEphemeris::new();
    let instant = Utc.with_ymd_and_hms(2010, 10, 10, 10, 10, 0).unwrap();
    let frame = provider
        .compute_houses(instant, GeoLocation { lat: 0.0, lon: 0.0 }, HouseSystem::Equal)
        .unwrap();
    assert_eq!(frame.cusps.cusp(1), frame.angles.ascendant);
    assert_eq!(frame.cusps.house_for(frame.angles.ascendant), 1);
}

#[test]
fn test_chart_input_from_json() {
    let json = r#"{
        "bodies": [
            {"name": "Sun", "longitude": 95.0, "speed": 0.95},
            {"name": "Moon", "longitude": 215.0, "speed": 13.1},
            {"name": "Mercury", "longitude": 80.0, "speed": -0.4}
        ],
        "cusps": [0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330],
        "angles": {"ascendant": 0.0, "midheaven": 270.0}
    }"#;
    let input: ChartInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.angles, ChartAngles::new(0.0, 270.0, 0.0));
    assert_eq!(input.bodies[2], BodyPosition::new("Mercury", 80.0, -0.4));

    let analysis = analyze_chart(&input, &EngineSettings::default());
    assert!(analysis.placements[2].retrograde);
    assert_eq!(analysis.placements[0].house, 4);
    assert_eq!(
        analysis.aspects.iter().filter(|a| a.aspect == "Trine").count(),
        1
    );
}
