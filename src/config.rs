//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.fanfetch.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Harness settings.
    #[serde(default)]
    pub harness: HarnessConfig,
}

/// Settings for the fetch harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// URLs to fetch when none are given on the command line.
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,

    /// Display prefix length per response body, in characters.
    #[serde(default = "default_truncate")]
    pub truncate: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            truncate: default_truncate(),
        }
    }
}

fn default_urls() -> Vec<String> {
    // httpbin.org/delay/N waits N seconds before responding, which makes
    // the parallel/serial latency difference visible in the logs.
    vec![
        "https://httpbin.org/delay/1",
        "https://httpbin.org/delay/2",
        "https://httpbin.org/delay/1",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_truncate() -> usize {
    20
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".fanfetch.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // URLs - only override when the CLI actually provides some
        if !args.urls.is_empty() {
            self.harness.urls = args.urls.clone();
        }

        // Truncate length - only override if explicitly provided via CLI
        if let Some(truncate) = args.truncate {
            self.harness.truncate = truncate;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
