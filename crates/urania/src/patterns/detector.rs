use crate::aspects::types::{OPPOSITION, QUINCUNX, SEXTILE, SQUARE, TRINE};
use crate::aspects::Aspect;
use crate::chart::Positions;
use crate::patterns::graph::AspectGraph;
use crate::patterns::types::{Pattern, PatternReport, PatternSettings};
use crate::zodiac::{degree_in_sign, Modality, Sign};
use std::collections::{BTreeMap, BTreeSet};

/// Finds grand trines, T-squares, kites, yods and stelliums.
#[derive(Debug, Clone, Default)]
pub struct PatternDetector {
    settings: PatternSettings,
}

impl PatternDetector {
    pub fn new(settings: PatternSettings) -> Self {
        Self { settings }
    }

    /// Run every detector over one chart.
    ///
    /// `positions` feeds T-square modality and stelliums; without it
    /// T-squares carry no modality and no stelliums are reported.
    pub fn detect(&self, aspects: &[Aspect], positions: Option<&Positions>) -> PatternReport {
        let graph = AspectGraph::from_aspects(aspects);
        let grand_trines = grand_trines(&graph);
        let kites = kites(&graph, &grand_trines);

        let report = PatternReport {
            t_squares: t_squares(&graph, positions),
            yods: yods(&graph),
            stelliums: positions
                .map(|p| self.stelliums(p))
                .unwrap_or_default(),
            grand_trines,
            kites,
        };
        log::debug!(
            "Detected {} patterns from {} aspects",
            report.len(),
            aspects.len()
        );
        report
    }

    /// Clusters of bodies packed within `stellium_span` degrees of one sign.
    pub fn stelliums(&self, positions: &Positions) -> Vec<Pattern> {
        let mut by_sign: BTreeMap<Sign, Vec<(f64, &str)>> = BTreeMap::new();
        for (body, lon) in positions {
            by_sign
                .entry(Sign::from_longitude(*lon))
                .or_default()
                .push((degree_in_sign(*lon), body.as_str()));
        }

        let mut found = BTreeSet::new();
        for (sign, mut members) in by_sign {
            members.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));
            for i in 0..members.len() {
                let mut j = i;
                while j + 1 < members.len()
                    && members[j + 1].0 - members[i].0 <= self.settings.stellium_span
                {
                    j += 1;
                }
                let window = &members[i..=j];
                if window.len() >= self.settings.stellium_min_bodies.max(1) {
                    let mut bodies: Vec<String> =
                        window.iter().map(|(_, b)| b.to_string()).collect();
                    bodies.sort();
                    found.insert(Pattern::Stellium { sign, bodies });
                }
            }
        }
        found.into_iter().collect()
    }
}

/// Triangles of trines.
pub fn grand_trines(graph: &AspectGraph) -> Vec<Pattern> {
    let found: BTreeSet<Pattern> = graph
        .triangles(TRINE)
        .into_iter()
        .map(|t| Pattern::GrandTrine {
            bodies: t.map(str::to_string),
        })
        .collect();
    found.into_iter().collect()
}

/// Oppositions whose two ends both square a common apex.
pub fn t_squares(graph: &AspectGraph, positions: Option<&Positions>) -> Vec<Pattern> {
    let mut found = BTreeSet::new();
    for (x, y) in graph.edges(OPPOSITION) {
        for z in graph.common_neighbors(SQUARE, x, y) {
            if z == x {
                continue;
            }
            let bodies = sorted([x, y, z]);
            let modality = positions.and_then(|p| shared_modality(p, &bodies));
            found.insert(Pattern::TSquare { bodies, modality });
        }
    }
    found.into_iter().collect()
}

/// Grand trines with a fourth body opposite one vertex and sextile the
/// other two.
pub fn kites(graph: &AspectGraph, grand_trines: &[Pattern]) -> Vec<Pattern> {
    let mut found = BTreeSet::new();
    for trine in grand_trines {
        let Pattern::GrandTrine { bodies } = trine else {
            continue;
        };
        for (p_idx, p) in bodies.iter().enumerate() {
            for d in graph.neighbors(OPPOSITION, p) {
                if bodies.iter().any(|b| b == d) {
                    continue;
                }
                let others_sextile = bodies
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != p_idx)
                    .all(|(_, other)| graph.connected(SEXTILE, d, other));
                if others_sextile {
                    let mut four = [
                        d.to_string(),
                        bodies[0].clone(),
                        bodies[1].clone(),
                        bodies[2].clone(),
                    ];
                    four.sort();
                    found.insert(Pattern::Kite { bodies: four });
                }
            }
        }
    }
    found.into_iter().collect()
}

/// Sextile pairs with a third body quincunx to both.
pub fn yods(graph: &AspectGraph) -> Vec<Pattern> {
    let mut found = BTreeSet::new();
    for (a, b) in graph.edges(SEXTILE) {
        for c in graph.common_neighbors(QUINCUNX, a, b) {
            if c == a {
                continue;
            }
            found.insert(Pattern::Yod {
                bodies: sorted([a, b, c]),
            });
        }
    }
    found.into_iter().collect()
}

fn sorted(bodies: [&str; 3]) -> [String; 3] {
    let mut owned = bodies.map(str::to_string);
    owned.sort();
    owned
}

fn shared_modality(positions: &Positions, bodies: &[String]) -> Option<Modality> {
    let mut modalities = bodies
        .iter()
        .map(|b| positions.get(b).map(|lon| Sign::from_longitude(*lon).modality()));
    let first = modalities.next()??;
    modalities
        .all(|m| m == Some(first))
        .then_some(first)
}
