use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use urania::chart::{positions_map, ChartInput, Positions};

/// A chart as stored on disk: the analysis input plus optional labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instant: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub input: ChartInput,
}

impl ChartFile {
    pub fn positions(&self) -> Positions {
        positions_map(&self.input.bodies)
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("chart")
    }
}

pub fn read_chart_file(path: &Path) -> anyhow::Result<ChartFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart {}", path.display()))?;
    let chart: ChartFile = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse chart {}", path.display()))?;
    if chart.input.bodies.is_empty() {
        anyhow::bail!("Chart {} lists no bodies", path.display());
    }
    Ok(chart)
}
