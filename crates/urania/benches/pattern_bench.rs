use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::AspectEngine;
use urania::chart::Positions;
use urania::patterns::{AspectGraph, PatternDetector};

/// A crowded chart: two interlocking grand trines plus a stellium.
fn busy_chart() -> Positions {
    [
        ("Sun", 0.0),
        ("Moon", 120.0),
        ("Mercury", 240.0),
        ("Venus", 60.0),
        ("Mars", 180.0),
        ("Jupiter", 300.0),
        ("Saturn", 90.0),
        ("Uranus", 3.0),
        ("Neptune", 6.0),
        ("Pluto", 150.0),
    ]
    .into_iter()
    .map(|(n, l)| (n.to_string(), l))
    .collect()
}

fn bench_detect(c: &mut Criterion) {
    let positions = busy_chart();
    let aspects = AspectEngine::default().compute_aspects(&positions);
    let detector = PatternDetector::default();

    c.bench_function("build_aspect_graph", |b| {
        b.iter(|| AspectGraph::from_aspects(black_box(&aspects)))
    });

    c.bench_function("detect_patterns", |b| {
        b.iter(|| detector.detect(black_box(&aspects), Some(black_box(&positions))))
    });
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
