use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use urania::settings::EngineSettings;

/// Overrides the search paths when set.
pub const CONFIG_ENV: &str = "URANIA_CONFIG";

const SEARCH_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

/// Output options for the report tools. Lives next to the engine settings
/// in the same file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub pretty: bool,
    /// Drop minor aspects from reports
    #[serde(default)]
    pub major_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    report: Option<ReportSettings>,
}

/// Everything read from one config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UraniaConfig {
    pub engine: EngineSettings,
    pub report: ReportSettings,
    /// File the settings came from, `None` when defaults were used
    pub source: Option<PathBuf>,
}

/// Candidate config paths in lookup order: `$URANIA_CONFIG`, then the
/// usual relative paths for running from the repo root or a crate dir.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(path) = env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            paths.push(PathBuf::from(path));
        }
    }
    paths.extend(SEARCH_PATHS.iter().map(PathBuf::from));
    paths
}

/// Try the candidate paths for `urania.toml`; the first readable one wins.
pub fn read_settings_toml_text() -> anyhow::Result<(PathBuf, String)> {
    let paths = candidate_paths();
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok((p.clone(), c));
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", paths);
}

pub fn parse_config(text: &str) -> anyhow::Result<(EngineSettings, ReportSettings)> {
    let engine = EngineSettings::from_toml_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse engine settings: {e}"))?;
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse [report] settings: {e}"))?;
    Ok((engine, root.report.unwrap_or_default()))
}

/// Load one explicit file. A missing file is an error here.
pub fn load_config_file(path: &Path) -> anyhow::Result<UraniaConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let (engine, report) = parse_config(&text)?;
    log::info!("Loaded settings from {}", path.display());
    Ok(UraniaConfig {
        engine,
        report,
        source: Some(path.to_path_buf()),
    })
}

/// Load from the search paths, falling back to defaults when no file
/// exists. A file that exists but does not parse is still an error.
pub fn load_config() -> anyhow::Result<UraniaConfig> {
    match read_settings_toml_text() {
        Ok((path, text)) => {
            let (engine, report) = parse_config(&text)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
            log::info!("Loaded settings from {}", path.display());
            Ok(UraniaConfig {
                engine,
                report,
                source: Some(path),
            })
        }
        Err(e) => {
            log::info!("{e}; using default settings");
            Ok(UraniaConfig::default())
        }
    }
}
