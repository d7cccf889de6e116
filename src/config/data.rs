use super::traits::ConfigSection;
use crate::error::FeatselectError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// z-score every feature column once after loading
    pub normalize: bool,
    pub min_instances: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            min_instances: 2,
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), FeatselectError> {
        if self.min_instances < 2 {
            return Err(FeatselectError::Configuration(
                "min_instances must be at least 2 for leave-one-out evaluation".to_string(),
            ));
        }
        Ok(())
    }
}
