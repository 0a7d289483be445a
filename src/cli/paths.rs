//! Configuration directory and persistent settings

use super::args::OutputFormat;
use crate::line::StressPolicy;
use crate::rhyme::RHYME_THRESHOLD;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for versemeter
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("versemeter"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default rhyme threshold
    pub threshold: Option<f64>,
    /// Default handling of stray stress marks
    pub stress_policy: Option<StressPolicy>,
    /// Default output format
    pub format: Option<OutputFormat>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        threshold: Option<f64>,
        stress_policy: Option<StressPolicy>,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            threshold: threshold.or(self.threshold),
            stress_policy: stress_policy.or(self.stress_policy),
            format: format.or(self.format),
        }
    }

    /// Threshold to use, falling back to the built-in default
    pub fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(RHYME_THRESHOLD)
    }

    /// Stress policy to use
    pub fn stress_policy(&self) -> StressPolicy {
        self.stress_policy.unwrap_or_default()
    }

    /// Output format to use
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            threshold: Some(RHYME_THRESHOLD),
            stress_policy: Some(StressPolicy::Ignore),
            format: Some(OutputFormat::Text),
        }
    }
}
