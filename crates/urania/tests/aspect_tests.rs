mod common;

use common::positions;
use urania::aspects::{AspectClass, AspectDefinition, AspectEngine, AspectTable, Importance};
use urania::geometry::angular_distance;

#[test]
fn test_every_aspect_respects_its_orb() {
    let engine = AspectEngine::default();
    let chart = positions(&[
        ("Sun", 12.3),
        ("Moon", 131.9),
        ("Mercury", 27.0),
        ("Venus", 58.4),
        ("Mars", 196.2),
        ("Jupiter", 253.7),
        ("Saturn", 287.1),
        ("Uranus", 343.9),
    ]);
    let aspects = engine.compute_aspects(&chart);
    assert!(!aspects.is_empty());

    for aspect in &aspects {
        let definition = engine.table().get(&aspect.aspect).unwrap();
        assert!(aspect.orb <= definition.max_orb);
        assert!((0.0..=1.0).contains(&aspect.strength));
        let distance = angular_distance(chart[&aspect.body_a], chart[&aspect.body_b]);
        assert!((distance - aspect.exact_angle).abs() - aspect.orb < 1e-9);
        assert_ne!(aspect.body_a, aspect.body_b);
    }

    for pair in aspects.windows(2) {
        assert!(pair[0].strength >= pair[1].strength);
    }
}

#[test]
fn test_two_runs_give_identical_order() {
    let engine = AspectEngine::default();
    let chart = positions(&[
        ("Sun", 0.0),
        ("Moon", 120.0),
        ("Mars", 240.0),
        ("Venus", 60.0),
        ("Saturn", 180.0),
    ]);
    assert_eq!(engine.compute_aspects(&chart), engine.compute_aspects(&chart));
}

#[test]
fn test_equal_strength_keeps_pair_order() {
    let engine = AspectEngine::default();
    // Three exact aspects, all strength 1
    let chart = positions(&[("A", 0.0), ("B", 90.0), ("C", 180.0)]);
    let aspects = engine.compute_aspects(&chart);
    let pairs: Vec<(&str, &str)> = aspects
        .iter()
        .map(|a| (a.body_a.as_str(), a.body_b.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C")]);
}

#[test]
fn test_custom_table_replaces_defaults() {
    let table = AspectTable::new(vec![AspectDefinition::new(
        "Quintile",
        72.0,
        1.5,
        AspectClass::Minor,
        "talent",
    )]);
    let engine = AspectEngine::new(table);
    let aspects = engine.compute_aspects(&positions(&[("Sun", 10.0), ("Mars", 83.0), ("Moon", 190.0)]));
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect, "Quintile");
    assert_eq!(aspects[0].importance, Importance::Close);
}

#[test]
fn test_wraparound_conjunction() {
    let engine = AspectEngine::default();
    let aspects = engine.aspects_between("Sun", 359.0, "Moon", 1.0);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect, "Conjunction");
    assert!((aspects[0].orb - 2.0).abs() < 1e-9);
    assert!((aspects[0].strength - 0.75).abs() < 1e-9);
}
