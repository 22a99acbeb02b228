//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Fanfetch - parallel and serial HTTP GET fan-out
///
/// Fetch a list of URLs either all at once (parallel) or one at a time
/// (serial), and print the response bodies in input order, truncated to a
/// short prefix. With no URLs given, runs the built-in httpbin.org delay
/// demo in both modes.
///
/// Examples:
///   fanfetch
///   fanfetch https://example.org/ https://example.com/
///   fanfetch --mode serial --truncate 40 https://httpbin.org/delay/1
///   fanfetch --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// URLs to fetch, in order
    ///
    /// When omitted, the built-in test list is used (three httpbin.org
    /// delay endpoints), or the list from the config file if one exists.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Which fan-out strategy to run
    ///
    /// `both` runs the parallel gather first, then the serial gather,
    /// which makes the two latency shapes easy to compare in the log.
    #[arg(short, long, default_value = "both", value_name = "MODE")]
    pub mode: RunMode,

    /// Display prefix length per response body, in characters
    ///
    /// Defaults to 20, or to the config file's `truncate` when one is set.
    #[arg(short, long, value_name = "CHARS")]
    pub truncate: Option<usize>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .fanfetch.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .fanfetch.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Fan-out strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RunMode {
    /// Issue every fetch up front, await them all
    Parallel,
    /// Issue fetches one at a time
    Serial,
    /// Run parallel first, then serial
    #[default]
    Both,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        for url in &self.urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!(
                    "URL must start with 'http://' or 'https://': {}",
                    url
                ));
            }
        }

        if self.truncate == Some(0) {
            return Err("Truncate length must be at least 1 character".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            urls: vec!["https://httpbin.org/delay/1".to_string()],
            mode: RunMode::Both,
            truncate: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(make_args().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_url() {
        let mut args = make_args();
        args.urls.push("ftp://example.org".to_string());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_zero_truncate() {
        let mut args = make_args();
        args.truncate = Some(0);
        assert!(args.validate().is_err());

        args.truncate = Some(1);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
