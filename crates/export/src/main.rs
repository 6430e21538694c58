// File: crates/export/src/main.rs
// Summary: waterflow-export; renders a chart from CSV (or seeded data) and optionally the static dashboard pages.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{ChartKind, NegativePolicy};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waterflow_dashboard::{DashboardConfig, Pages};
use waterflow_export::{default_chart, load_samples_csv, write_chart, write_pages};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Line,
    Bar,
}

impl From<KindArg> for ChartKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Line => ChartKind::Line,
            KindArg::Bar => ChartKind::Bar,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NegativeArg {
    Reject,
    Clamp,
}

impl From<NegativeArg> for NegativePolicy {
    fn from(n: NegativeArg) -> Self {
        match n {
            NegativeArg::Reject => NegativePolicy::Reject,
            NegativeArg::Clamp => NegativePolicy::Clamp,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "waterflow-export")]
#[command(about = "Render WaterFlow usage charts and dashboard pages to files")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(short, long, env = "WATERFLOW_OUT", default_value = "target/out")]
    out: PathBuf,

    /// JSON configuration file (missing file means defaults)
    #[arg(short, long, env = "WATERFLOW_CONFIG", default_value = "waterflow.json")]
    config: PathBuf,

    /// `label,value` CSV with a header row; seeded data is used when omitted
    #[arg(long, env = "WATERFLOW_CSV")]
    csv: Option<PathBuf>,

    /// Chart mode
    #[arg(short, long, value_enum, default_value = "line")]
    kind: KindArg,

    /// Chart title embedded in the SVG
    #[arg(short, long)]
    title: Option<String>,

    /// Also rasterize the chart to PNG
    #[arg(long)]
    png: bool,

    /// Also write the six dashboard pages as HTML
    #[arg(long)]
    pages: bool,

    /// Negative readings in the CSV; overrides the config file
    #[arg(long, value_enum, env = "WATERFLOW_NEGATIVE")]
    negative: Option<NegativeArg>,

    /// Chart theme preset; overrides the config file
    #[arg(long, env = "WATERFLOW_THEME")]
    theme: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "WATERFLOW_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = DashboardConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if let Some(negative) = cli.negative {
        config.negative_policy = negative.into();
    }
    let opts = config.render_options();
    let kind = ChartKind::from(cli.kind);

    let (mut chart, stem) = match &cli.csv {
        Some(path) => {
            let samples = load_samples_csv(path, config.negative_policy)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (chart_core::Chart::with_samples(kind, samples), stem)
        }
        None => {
            info!(kind = ?kind, "no CSV given, exporting seeded data");
            (default_chart(kind), "chart".to_string())
        }
    };
    if let Some(title) = cli.title {
        chart = chart.with_title(title);
    }

    write_chart(&chart, &opts, &cli.out, &stem, cli.png)?;
    if cli.pages {
        write_pages(&Pages::seed(), &opts, config.sidebar_open, &cli.out)?;
    }
    Ok(())
}
