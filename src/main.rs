//! Fanfetch - parallel and serial HTTP GET fan-out
//!
//! A CLI tool that fetches a list of URLs with two strategies -- all at
//! once (parallel) or one at a time (serial) -- and prints the response
//! bodies in input order, truncated for display.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (invalid arguments, config failure, fetch failure)

mod cli;
mod config;
mod display;
mod fetch;
mod gather;

use anyhow::{Context, Result};
use chrono::Local;
use cli::{Args, RunMode};
use config::Config;
use fetch::HttpFetcher;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::FmtSubscriber;

/// Wall-clock timestamps with tenth-of-a-second precision, so the spacing
/// of serial issuance lines is visible in the log.
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(
            w,
            "{}.{}",
            now.format("%H:%M:%S"),
            now.timestamp_subsec_millis() / 100
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    debug!("fanfetch v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the harness
    if let Err(e) = run_harness(args).await {
        error!("Fetch run failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .fanfetch.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".fanfetch.toml");

    if path.exists() {
        eprintln!(".fanfetch.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .fanfetch.toml")?;

    println!("Created .fanfetch.toml with default settings.");
    println!("Edit it to customize the URL list and display truncation.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_timer(ClockTime)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the selected fan-out strategies over the configured URL list.
async fn run_harness(args: Args) -> Result<()> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let urls = config.harness.urls;
    let truncate = config.harness.truncate;
    let fetcher = HttpFetcher::new();

    if matches!(args.mode, RunMode::Parallel | RunMode::Both) {
        info!("Trying parallel fetch...");
        let start = Instant::now();

        let bodies = gather::fetch_all_parallel(&fetcher, &urls)
            .await
            .context("Parallel fetch failed")?;

        report_phase(&bodies, truncate, start)?;
    }

    if matches!(args.mode, RunMode::Serial | RunMode::Both) {
        info!("Trying serial fetch...");
        let start = Instant::now();

        let bodies = gather::fetch_all_serial(&fetcher, &urls)
            .await
            .context("Serial fetch failed")?;

        report_phase(&bodies, truncate, start)?;
    }

    Ok(())
}

/// Log the gathered bodies (truncated, as a JSON array) and the phase wall time.
fn report_phase(bodies: &[String], truncate: usize, start: Instant) -> Result<()> {
    let rendered = display::format_bodies(bodies, truncate)?;
    info!("Got responses: {}", rendered);
    info!("Phase took {:.1}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        debug!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            debug!("Loaded default config from .fanfetch.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}
