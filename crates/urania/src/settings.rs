//! Engine configuration, deserializable from TOML.
//!
//! Every section has defaults, so an empty document yields the standard
//! nine-aspect table, an 8° stellium window and a 20-step return finder.

use crate::aspects::AspectTable;
use crate::ephemeris::{HouseSystem, NodeVariant};
use crate::error::{AnalysisError, Result};
use crate::patterns::PatternSettings;
use serde::{Deserialize, Serialize};

/// Period and search bracket for one kind of return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleSettings {
    /// Mean time for the body to come back to the same longitude
    pub period_days: f64,
    /// Half-width of the bisection bracket around the estimate
    pub bracket_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnSettings {
    pub max_iterations: u32,
    /// Accepted residual, in degrees
    pub tolerance: f64,
    pub solar: CycleSettings,
    pub lunar: CycleSettings,
}

impl Default for ReturnSettings {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance: 1e-5,
            solar: CycleSettings {
                period_days: 365.25,
                bracket_days: 5.0,
            },
            lunar: CycleSettings {
                period_days: 27.321582,
                bracket_days: 2.0,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub aspects: AspectTable,
    pub patterns: PatternSettings,
    pub returns: ReturnSettings,
    pub house_system: HouseSystem,
    pub node: NodeVariant,
}

impl EngineSettings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: EngineSettings = toml::from_str(text)
            .map_err(|e| AnalysisError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        for definition in self.aspects.definitions() {
            if definition.max_orb.is_nan() || definition.max_orb < 0.0 {
                return Err(AnalysisError::InvalidSettings(format!(
                    "aspect {} has a negative orb",
                    definition.name
                )));
            }
            if !(0.0..=180.0).contains(&definition.exact_angle) {
                return Err(AnalysisError::InvalidSettings(format!(
                    "aspect {} angle {} is outside 0..=180",
                    definition.name, definition.exact_angle
                )));
            }
        }
        if self.patterns.stellium_span < 0.0 {
            return Err(AnalysisError::InvalidSettings(
                "patterns.stellium_span must not be negative".to_string(),
            ));
        }
        if self.returns.max_iterations == 0 {
            return Err(AnalysisError::InvalidSettings(
                "returns.max_iterations must be positive".to_string(),
            ));
        }
        if self.returns.tolerance.is_nan() || self.returns.tolerance <= 0.0 {
            return Err(AnalysisError::InvalidSettings(
                "returns.tolerance must be positive".to_string(),
            ));
        }
        for (name, cycle) in [("solar", self.returns.solar), ("lunar", self.returns.lunar)] {
            if cycle.period_days.is_nan()
                || cycle.bracket_days.is_nan()
                || cycle.period_days <= 0.0
                || cycle.bracket_days <= 0.0
            {
                return Err(AnalysisError::InvalidSettings(format!(
                    "returns.{} period and bracket must be positive",
                    name
                )));
            }
        }
        Ok(())
    }
}
