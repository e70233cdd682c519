//! Insurance Dashboard CLI
//!
//! Renders the industry dashboard from the metrics and reference CSVs

use anyhow::Context;
use clap::{Parser, ValueEnum};
use insurance_dashboard::{
    build_dashboard, load_metrics, load_reference,
    dashboard::DEFAULT_TITLE,
    dashboard::reference::DEFAULT_REFERENCE_PATH,
    metrics::loader::DEFAULT_METRICS_PATH,
    HtmlHost, JsonHost, LayoutHost,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Standalone page with plotly.js charts
    Html,
    /// Page tree with figure JSON
    Json,
}

#[derive(Parser)]
#[command(name = "insurance-dashboard")]
#[command(about = "Render the life insurance industry dashboard")]
struct Args {
    /// Industry metrics CSV (first column "Company Acronym")
    #[arg(long, default_value = DEFAULT_METRICS_PATH)]
    data: PathBuf,

    /// Growth rates, solvency margins and pie offsets keyed by company
    #[arg(long, default_value = DEFAULT_REFERENCE_PATH)]
    reference: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "dashboard.html")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Page title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = load_metrics(&args.data)
        .with_context(|| format!("Failed to load metrics from {}", args.data.display()))?;
    let reference = load_reference(&args.reference)
        .with_context(|| format!("Failed to load reference series from {}", args.reference.display()))?;

    let page = build_dashboard(&table, &reference, &args.title).context("Failed to build dashboard")?;

    let document = match args.format {
        OutputFormat::Html => HtmlHost::new().with_timestamp(chrono::Local::now()).render(&page)?,
        OutputFormat::Json => JsonHost.render(&page)?,
    };

    std::fs::write(&args.output, document)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("Wrote {} charts to {}", page.chart_count(), args.output.display());
    println!("Dashboard written to: {}", args.output.display());
    Ok(())
}
