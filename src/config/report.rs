use super::traits::ConfigSection;
use crate::error::FeatselectError;
use serde::{Deserialize, Serialize};

pub const MAX_DECIMALS: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Digits after the decimal point for percentages
    pub decimals: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            format: OutputFormat::Text,
        }
    }
}

impl ConfigSection for ReportConfig {
    fn section_name() -> &'static str {
        "report"
    }

    fn validate(&self) -> Result<(), FeatselectError> {
        if self.decimals > MAX_DECIMALS {
            return Err(FeatselectError::Configuration(format!(
                "decimals must be at most {}",
                MAX_DECIMALS
            )));
        }
        Ok(())
    }
}
