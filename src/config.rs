//! Engine configuration
//!
//! Configuration is read from a JSON file. Every field has a default, so a
//! partial file (or no file at all) is valid.
//!
//! ```
//! use pnt::config::EngineConfig;
//!
//! let config: EngineConfig = serde_json::from_str(r#"{ "parallel": true }"#).unwrap();
//! assert!(config.parallel);
//! assert!(config.pruning);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::io::{GeneratorConfig, ReportFormat};

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimals printed for values and branching factors
    pub precision: usize,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            format: ReportFormat::Text,
        }
    }
}

/// Top-level configuration shared by the binaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Replace every test case's depth ceiling with this value
    pub depth_override: Option<i32>,

    /// Use alpha-beta pruning (plain minimax otherwise)
    pub pruning: bool,

    /// Solve batches of test cases on multiple threads
    pub parallel: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,

    pub report: ReportConfig,

    pub generator: GeneratorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth_override: None,
            pruning: true,
            parallel: false,
            log_filter: "info".to_string(),
            report: ReportConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|err| Error::io(format!("read config {}", path.display()), err))?;
        let config: EngineConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, falling back to defaults when it cannot be read.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        match Self::load(path) {
            Err(Error::Io { operation, source }) => {
                warn!(%operation, %source, "using default configuration");
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.report.precision > 17 {
            return Err(Error::InvalidConfiguration {
                message: format!("report precision {} exceeds 17", self.report.precision),
            });
        }
        Ok(())
    }

    /// Override the depth ceiling of every solved state.
    pub fn with_depth_override(mut self, depth: i32) -> Self {
        self.depth_override = Some(depth);
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Enable or disable parallel batch solving.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
