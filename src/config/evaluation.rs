use super::traits::ConfigSection;
use crate::error::FeatselectError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub method: EvaluationMethod,
    pub seed: Option<u64>,
    /// Log every leave-one-out prediction at trace level
    pub log_instances: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMethod {
    LeaveOneOut,
    Random,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            method: EvaluationMethod::LeaveOneOut,
            seed: None,
            log_instances: false,
        }
    }
}

impl ConfigSection for EvaluationConfig {
    fn section_name() -> &'static str {
        "evaluation"
    }

    fn validate(&self) -> Result<(), FeatselectError> {
        if self.method == EvaluationMethod::Random && self.log_instances {
            log::warn!("log_instances has no effect with the random evaluator");
        }
        Ok(())
    }
}
