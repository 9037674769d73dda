mod input;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use urania::aspects::Aspect;
use urania::chart::{ChartAnalysis, ChartAnalyzer};
use urania::comparison::{MidpointChart, MultiChartAnalyzer};
use urania::settings::EngineSettings;
use urania_config::{load_config, load_config_file, UraniaConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze a chart (and optionally a partner chart) as JSON")]
struct Args {
    /// Chart JSON file (bodies, cusps, angles).
    #[arg(long)]
    chart: PathBuf,

    /// Second chart for synastry, composite and davison.
    #[arg(long)]
    partner: Option<PathBuf>,

    /// Settings file (otherwise searches $URANIA_CONFIG and configs/urania.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Only use major aspects.
    #[arg(long, default_value_t = false)]
    major_only: bool,
}

#[derive(Debug, Serialize)]
struct ComparisonReport {
    partner: String,
    synastry: Vec<Aspect>,
    composite: MidpointChart,
    davison: MidpointChart,
}

#[derive(Debug, Serialize)]
struct Report {
    chart: String,
    analysis: ChartAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<ComparisonReport>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config: UraniaConfig = match &args.config {
        Some(path) => load_config_file(path)?,
        None => load_config()?,
    };
    let mut settings: EngineSettings = config.engine;
    if args.major_only || config.report.major_only {
        settings.aspects = settings.aspects.major_only();
    }

    let chart = input::read_chart_file(&args.chart)?;
    let analyzer = ChartAnalyzer::new(&settings);
    let analysis = analyzer.analyze(&chart.input);
    log::info!(
        "{}: {} aspects, {} patterns",
        chart.label(),
        analysis.aspects.len(),
        analysis.patterns.len()
    );

    let comparison = match &args.partner {
        Some(path) => {
            let partner = input::read_chart_file(path)?;
            let comparer = MultiChartAnalyzer::new(analyzer.aspect_engine());
            let (first, second) = (chart.positions(), partner.positions());
            Some(ComparisonReport {
                partner: partner.label().to_string(),
                synastry: comparer.synastry(&first, &second),
                composite: comparer.composite(&first, &second),
                davison: comparer.davison(&first, &second),
            })
        }
        None => None,
    };

    let report = Report {
        chart: chart.label().to_string(),
        analysis,
        comparison,
    };
    let json = if args.pretty || config.report.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}
