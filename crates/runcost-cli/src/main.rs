mod display;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use runcost_core::analyzer::{sarif, summary, Analyzer};
use runcost_core::config::AnalyzerConfig;
use runcost_core::discovery::discover_workflow_files;
use runcost_core::Report;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "runcost",
    version,
    about = "RunCost — GitHub Actions cost analyzer & optimizer",
    long_about = "Analyze GitHub Actions workflows for cost optimization.\n\nEstimates the monthly compute cost of each workflow and flags patterns that waste runner minutes."
)]
struct Cli {
    /// Path to a workflow file or a directory containing workflow files
    #[arg(default_value = ".github/workflows")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding runner pricing and disabling rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the estimated cost of each job (text format only)
    #[arg(long)]
    breakdown: bool,

    /// Log analysis details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Sarif,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = Analyzer::from_config(&config);

    let files = discover_workflow_files(&cli.path)?;
    if files.is_empty() {
        println!("No workflow files found.");
        return Ok(());
    }
    info!("Analyzing {} workflow file(s)", files.len());

    let reports = files
        .iter()
        .map(|file| analyze_file(&analyzer, file))
        .collect::<Result<Vec<_>>>()?;

    if cli.output.is_some() {
        colored::control::set_override(false);
    }
    let rendered = render(&reports, cli.format, cli.breakdown)?;

    match &cli.output {
        Some(out_path) => {
            std::fs::write(out_path, &rendered)
                .with_context(|| format!("Failed to write report to {}", out_path.display()))?;
            println!("Report saved to {}", out_path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn analyze_file(analyzer: &Analyzer, file: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read workflow file: {}", file.display()))?;
    debug!("Read {} bytes from {}", content.len(), file.display());
    Ok(analyzer.analyze(&content, &file.to_string_lossy()))
}

fn render(reports: &[Report], format: OutputFormat, breakdown: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => summary::to_json(reports)?,
        OutputFormat::Sarif => serde_json::to_string_pretty(&sarif::to_sarif(reports))?,
        OutputFormat::Text => display::format_text_report(reports, breakdown),
    };
    Ok(rendered)
}
