use super::TemporalEngine;
use crate::aspects::{Aspect, AspectEngine, ChartId};
use crate::chart::Positions;
use crate::ephemeris::{query_positions, Body, EphemerisProvider};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NATAL: &str = "natal";
pub const TRANSIT: &str = "transit";

/// Transiting positions and their aspects to a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitReport {
    pub instant: DateTime<Utc>,
    pub positions: Positions,
    /// `body_a` is always the natal body, `body_b` the transiting one
    pub aspects: Vec<Aspect>,
}

impl<P: EphemerisProvider> TemporalEngine<P> {
    pub fn transits(
        &self,
        natal: &Positions,
        instant: DateTime<Utc>,
        bodies: &[Body],
    ) -> Result<TransitReport> {
        let positions = query_positions(&self.provider, instant, bodies, self.node)?;

        let merged = AspectEngine::tag_charts(
            &ChartId::new(NATAL),
            natal,
            &ChartId::new(TRANSIT),
            &positions,
        );
        let aspects: Vec<Aspect> = self
            .aspects
            .compute_tagged_aspects(&merged)
            .into_iter()
            .filter(|t| t.is_cross_chart())
            .map(|t| t.aspect)
            .collect();

        log::debug!("{} transit aspects at {}", aspects.len(), instant);
        Ok(TransitReport {
            instant,
            positions,
            aspects,
        })
    }
}
