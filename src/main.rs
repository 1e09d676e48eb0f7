use bounty_board::config::ScenarioConfig;
use bounty_board::{config_loader, report, scenario};
use clap::{Parser, ValueEnum};
use color_eyre::Result;
use env_logger::Env;
use log::{info, LevelFilter};
use std::path::PathBuf;

/// Output format for the scenario report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Json,
    Text,
}

/// Replay a bounty contract scenario against a fresh session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scenario YAML file
    #[arg(short, long)]
    scenario: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Log level requested by the scenario, if any
fn scenario_log_level(config: &ScenarioConfig) -> Option<LevelFilter> {
    config
        .general()
        .log_level
        .as_deref()
        .and_then(|level| level.parse().ok())
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging before loading so the loader's output is kept.
    // RUST_LOG wins over the scenario's log level.
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    if !rust_log_set {
        log::set_max_level(LevelFilter::Info);
    }

    let config = config_loader::load_scenario(&args.scenario)?;

    if !rust_log_set {
        if let Some(level) = scenario_log_level(&config) {
            log::set_max_level(level);
        }
    }

    info!("Scenario file: {:?}", args.scenario);

    let run = scenario::run_scenario(&config);

    let rendered = match args.format {
        ReportFormat::Json => report::render_json(&run)?,
        ReportFormat::Text => report::render_text(&run),
    };

    match &args.output {
        Some(path) => report::write_report(&rendered, path)?,
        None => println!("{}", rendered),
    }

    Ok(())
}
