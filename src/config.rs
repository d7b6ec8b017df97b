//! Configuration file support for pc-compat.
//!
//! Provides YAML-based configuration through `pc-compat.config.yml` files:
//! data structures, file loading, validation, and the merge of file values
//! with command-line overrides into resolved settings.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::error::CompatError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "pc-compat.config.yml";

const DEFAULT_CATALOG_ENDPOINT: &str = "https://api.example.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";
const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com";
const DEFAULT_ADVICE_LOG: &str = "pc-compat-advice.log";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub catalog_endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub offline: Option<bool>,
    pub ollama: Option<OllamaSection>,
    pub github: Option<GitHubSection>,
    pub advice_log: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OllamaSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GitHubSection {
    pub endpoint: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(timeout) = config.timeout_secs {
        if timeout == 0 {
            return Err(CompatError::Config {
                message: "timeout_secs must be greater than zero".to_string(),
            }
            .into());
        }
    }

    for (field, url) in [
        ("catalog_endpoint", config.catalog_endpoint.as_deref()),
        (
            "ollama.endpoint",
            config.ollama.as_ref().and_then(|o| o.endpoint.as_deref()),
        ),
        (
            "github.endpoint",
            config.github.as_ref().and_then(|g| g.endpoint.as_deref()),
        ),
    ] {
        if let Some(url) = url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CompatError::Config {
                    message: format!("{} must be an http:// or https:// URL, got '{}'", field, url),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub endpoint: Option<&'a str>,
    pub offline: bool,
}

/// Fully resolved settings: defaults, overlaid by the config file, overlaid
/// by command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_endpoint: String,
    pub timeout: Duration,
    pub offline: bool,
    pub ollama_endpoint: String,
    pub ollama_model: String,
    pub github_endpoint: String,
    pub advice_log: PathBuf,
}

impl Settings {
    pub fn resolve(config: Option<ConfigFile>, overrides: &Overrides<'_>) -> Self {
        let config = config.unwrap_or_default();
        let ollama = config.ollama.unwrap_or_default();
        let github = config.github.unwrap_or_default();

        Self {
            catalog_endpoint: overrides
                .endpoint
                .map(str::to_string)
                .or(config.catalog_endpoint)
                .unwrap_or_else(|| DEFAULT_CATALOG_ENDPOINT.to_string()),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            offline: overrides.offline || config.offline.unwrap_or(false),
            ollama_endpoint: ollama
                .endpoint
                .unwrap_or_else(|| DEFAULT_OLLAMA_ENDPOINT.to_string()),
            ollama_model: ollama
                .model
                .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            github_endpoint: github
                .endpoint
                .unwrap_or_else(|| DEFAULT_GITHUB_ENDPOINT.to_string()),
            advice_log: PathBuf::from(
                config
                    .advice_log
                    .unwrap_or_else(|| DEFAULT_ADVICE_LOG.to_string()),
            ),
        }
    }
}
