//! TOML configuration for analysis defaults.
//!
//! Every section is optional; missing keys fall back to compiled-in defaults.
//! Command-line flags take precedence over values loaded here.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analysis::{OutlierMethod, DEFAULT_NAME};
use crate::stats::NormalizeMethod;

/// Environment variable naming a config file to load when none is given.
pub const CONFIG_ENV: &str = "SCISTAT_CONFIG";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub outliers: OutlierConfig,
}

impl AnalysisConfig {
    /// Load configuration from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        info!(path = %path.display(), "Loaded analysis configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the file named by `SCISTAT_CONFIG`, falling back to compiled-in
    /// defaults when the variable is unset or the file fails to load.
    ///
    /// A path given on the command line goes through [`AnalysisConfig::load`]
    /// instead, so a bad file there is an error rather than a warning.
    pub fn load_or_default() -> Self {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let path = Path::new(&env_path);
            match Self::load(path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    let cause = format!("{:#}", e);
                    warn!(
                        path = %path.display(),
                        error = %cause,
                        "SCISTAT_CONFIG set but file could not be loaded, using defaults"
                    );
                }
            }
        }

        debug!("No config file loaded, using compiled-in defaults");
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Display name for the analyzed dataset.
    pub name: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub method: NormalizeMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    pub method: OutlierMethod,
    pub threshold: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            method: OutlierMethod::Iqr,
            threshold: 1.5,
        }
    }
}
