use crate::aspects::types::{
    Aspect, AspectDefinition, AspectTable, ChartId, Importance, TaggedAspect, TaggedPosition,
};
use crate::chart::Positions;
use crate::geometry::angular_distance;

/// A definition matched by one pair of input indices.
struct PairMatch<'t> {
    i: usize,
    j: usize,
    definition: &'t AspectDefinition,
    orb: f64,
    strength: f64,
}

/// Pairwise aspect detection over an injected aspect table.
#[derive(Debug, Clone, Default)]
pub struct AspectEngine {
    table: AspectTable,
}

impl AspectEngine {
    pub fn new(table: AspectTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AspectTable {
        &self.table
    }

    /// Aspects between every pair of bodies in `positions`.
    ///
    /// Sorted by descending strength. Equal strengths keep discovery order:
    /// pairs in map order, then definitions in table order.
    pub fn compute_aspects(&self, positions: &Positions) -> Vec<Aspect> {
        let names: Vec<&str> = positions.keys().map(String::as_str).collect();
        let longitudes: Vec<f64> = positions.values().copied().collect();

        let aspects: Vec<Aspect> = self
            .scan(&longitudes)
            .into_iter()
            .map(|m| build_aspect(names[m.i], names[m.j], &m))
            .collect();

        log::debug!(
            "Computed {} aspects over {} bodies",
            aspects.len(),
            positions.len()
        );
        aspects
    }

    /// Aspects over bodies drawn from several charts.
    ///
    /// Pairs are enumerated in slice order, so a body listed earlier always
    /// lands in `body_a`. Same-chart pairs are included; callers filter with
    /// [`TaggedAspect::is_cross_chart`].
    pub fn compute_tagged_aspects(&self, points: &[TaggedPosition]) -> Vec<TaggedAspect> {
        let longitudes: Vec<f64> = points.iter().map(|p| p.longitude).collect();

        self.scan(&longitudes)
            .into_iter()
            .map(|m| {
                let a = &points[m.i];
                let b = &points[m.j];
                TaggedAspect {
                    origin_a: a.origin.clone(),
                    origin_b: b.origin.clone(),
                    aspect: build_aspect(&a.body, &b.body, &m),
                }
            })
            .collect()
    }

    /// Every definition matched by a single pair of longitudes.
    pub fn aspects_between(&self, body_a: &str, lon_a: f64, body_b: &str, lon_b: f64) -> Vec<Aspect> {
        self.scan(&[lon_a, lon_b])
            .into_iter()
            .map(|m| build_aspect(body_a, body_b, &m))
            .collect()
    }

    /// Tag two single-chart position maps and merge them in chart order.
    pub fn tag_charts(
        origin_a: &ChartId,
        chart_a: &Positions,
        origin_b: &ChartId,
        chart_b: &Positions,
    ) -> Vec<TaggedPosition> {
        let tag = |origin: &ChartId, chart: &Positions| {
            chart
                .iter()
                .map(|(body, lon)| TaggedPosition {
                    origin: origin.clone(),
                    body: body.clone(),
                    longitude: *lon,
                })
                .collect::<Vec<_>>()
        };
        let mut merged = tag(origin_a, chart_a);
        merged.extend(tag(origin_b, chart_b));
        merged
    }

    fn scan(&self, longitudes: &[f64]) -> Vec<PairMatch<'_>> {
        let mut matches = Vec::new();
        for i in 0..longitudes.len() {
            for j in (i + 1)..longitudes.len() {
                let distance = angular_distance(longitudes[i], longitudes[j]);

                // A pair may match several definitions when their orbs overlap
                for definition in self.table.definitions() {
                    let orb = (distance - definition.exact_angle).abs();
                    if orb <= definition.max_orb {
                        matches.push(PairMatch {
                            i,
                            j,
                            definition,
                            orb,
                            strength: strength_for(orb, definition.max_orb),
                        });
                    }
                }
            }
        }

        // sort_by is stable, so ties keep discovery order
        matches.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        matches
    }
}

fn strength_for(orb: f64, max_orb: f64) -> f64 {
    if max_orb <= 0.0 {
        return 1.0;
    }
    (1.0 - orb / max_orb).clamp(0.0, 1.0)
}

fn build_aspect(body_a: &str, body_b: &str, m: &PairMatch<'_>) -> Aspect {
    Aspect {
        body_a: body_a.to_string(),
        body_b: body_b.to_string(),
        aspect: m.definition.name.clone(),
        exact_angle: m.definition.exact_angle,
        orb: m.orb,
        strength: m.strength,
        classification: m.definition.classification,
        importance: Importance::from_orb(m.orb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::{AspectClass, AspectDefinition};

    fn positions(entries: &[(&str, f64)]) -> Positions {
        entries.iter().map(|(n, l)| (n.to_string(), *l)).collect()
    }

    #[test]
    fn test_strength_and_importance() {
        let engine = AspectEngine::default();
        let aspects = engine.aspects_between("sun", 100.0, "moon", 102.0);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].aspect, "Conjunction");
        assert!((aspects[0].strength - 0.75).abs() < 1e-12);
        assert_eq!(aspects[0].importance, Importance::None);

        let exact = engine.aspects_between("sun", 0.0, "mars", 90.3);
        assert_eq!(exact[0].importance, Importance::Exact);
    }

    #[test]
    fn test_overlapping_definitions_all_match() {
        let table = AspectTable::new(vec![
            AspectDefinition::new("Wide", 60.0, 10.0, AspectClass::Major, ""),
            AspectDefinition::new("Narrow", 65.0, 10.0, AspectClass::Minor, ""),
        ]);
        let engine = AspectEngine::new(table);
        let aspects = engine.compute_aspects(&positions(&[("a", 0.0), ("b", 64.0)]));
        assert_eq!(aspects.len(), 2);
        assert_eq!(aspects[0].aspect, "Narrow");
        assert_eq!(aspects[1].aspect, "Wide");
    }

    #[test]
    fn test_zero_orb_definition_is_all_or_nothing() {
        let table = AspectTable::new(vec![AspectDefinition::new(
            "Exact", 90.0, 0.0, AspectClass::Major, "",
        )]);
        let engine = AspectEngine::new(table);
        let aspects = engine.compute_aspects(&positions(&[("a", 0.0), ("b", 90.0), ("c", 91.0)]));
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].strength, 1.0);
    }
}
