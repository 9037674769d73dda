//! Comparisons between charts: cross aspects and midpoint charts.

use crate::aspects::{Aspect, AspectEngine, ChartId, TaggedAspect, TaggedPosition};
use crate::chart::Positions;
use crate::geometry::short_arc_midpoint;
use serde::{Deserialize, Serialize};

pub const FIRST_CHART: &str = "first";
pub const SECOND_CHART: &str = "second";

/// A chart built from the midpoints of two charts' shared bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidpointChart {
    pub positions: Positions,
    /// Empty when fewer than two bodies are shared
    pub aspects: Vec<Aspect>,
}

pub struct MultiChartAnalyzer<'e> {
    engine: &'e AspectEngine,
}

impl<'e> MultiChartAnalyzer<'e> {
    pub fn new(engine: &'e AspectEngine) -> Self {
        Self { engine }
    }

    /// Aspects from bodies of `first` to bodies of `second`.
    ///
    /// `body_a` of each aspect is the first chart's body. Aspects within a
    /// single chart are dropped.
    pub fn synastry(&self, first: &Positions, second: &Positions) -> Vec<Aspect> {
        let merged = AspectEngine::tag_charts(
            &ChartId::new(FIRST_CHART),
            first,
            &ChartId::new(SECOND_CHART),
            second,
        );
        self.tagged_cross_aspects(&merged)
            .into_iter()
            .map(|t| t.aspect)
            .collect()
    }

    /// Cross aspects over any number of tagged charts, origins kept.
    pub fn tagged_cross_aspects(&self, points: &[TaggedPosition]) -> Vec<TaggedAspect> {
        let aspects: Vec<TaggedAspect> = self
            .engine
            .compute_tagged_aspects(points)
            .into_iter()
            .filter(TaggedAspect::is_cross_chart)
            .collect();
        log::debug!(
            "{} cross-chart aspects over {} tagged bodies",
            aspects.len(),
            points.len()
        );
        aspects
    }

    pub fn composite(&self, first: &Positions, second: &Positions) -> MidpointChart {
        let positions: Positions = first
            .iter()
            .filter_map(|(body, lon)| {
                second
                    .get(body)
                    .map(|other| (body.clone(), short_arc_midpoint(*lon, *other)))
            })
            .collect();

        let aspects = if positions.len() >= 2 {
            self.engine.compute_aspects(&positions)
        } else {
            Vec::new()
        };
        MidpointChart { positions, aspects }
    }

    /// Davison chart over longitudes.
    ///
    /// Uses the composite midpoint rule. A full davison would midpoint the two
    /// birth times and locations and query the ephemeris there instead.
    pub fn davison(&self, first: &Positions, second: &Positions) -> MidpointChart {
        self.composite(first, second)
    }
}
