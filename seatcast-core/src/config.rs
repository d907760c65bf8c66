/// Report configuration, loaded from TOML.
///
/// All fields are optional. A missing config file is not an error: defaults apply.
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::constants::DEFAULT_CONFIDENCE_LEVEL;
use crate::error::{Error, Result};
use crate::types::SummaryOptions;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Confidence level of published intervals. Default: 0.95.
    pub confidence_level: Option<f64>,
    /// Legislature size for seat reconciliation. Unset = no reconciliation.
    pub total_seats: Option<i64>,
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = "\
# seatcast report configuration

# Confidence level of published intervals, strictly between 0 and 1
# confidence_level = 0.95

# Number of seats in the legislature; enables adjusted medians
# total_seats = 150
";

impl ReportConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ReportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.confidence_level {
            if !(level > 0.0 && level < 1.0) {
                return Err(Error::invalid_argument(format!(
                    "confidence_level must lie strictly between 0 and 1, got {level}"
                )));
            }
        }
        if let Some(total) = self.total_seats {
            if total < 0 {
                return Err(Error::InvalidTotal { total });
            }
        }
        Ok(())
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            confidence_level: self.confidence_level.unwrap_or(DEFAULT_CONFIDENCE_LEVEL),
            total_seats: self.total_seats,
        }
    }
}

/// Load config from a file path. Returns the default (all `None`) if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => ReportConfig::from_toml_str(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(ReportConfig::default())
        }
        Err(source) => Err(Error::Io { path: path.to_path_buf(), source }),
    }
}
