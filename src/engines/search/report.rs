use super::policy::SearchMethod;
use crate::error::Result;
use crate::types::{FeatureSubset, TraceEntry};
use serde::{Deserialize, Serialize};

/// Subset kept at the end of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: usize,
    /// Feature added (forward) or removed (backward)
    pub feature: usize,
    pub subset: FeatureSubset,
    pub accuracy: f64,
    /// Whether this round set a new global best
    pub improved: bool,
    pub regression: bool,
}

/// Result of a complete search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub method: SearchMethod,
    pub evaluator: String,
    pub num_features: usize,
    pub baseline: TraceEntry,
    pub rounds: Vec<RoundSummary>,
    pub best_subset: FeatureSubset,
    pub best_accuracy: f64,
    /// Candidate evaluations, baseline excluded
    pub evaluations: usize,
    pub elapsed_ms: u64,
    pub finished_at: String,
}

impl SearchReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `0.9512` with 2 decimals renders as `95.12%`
pub fn format_percent(accuracy: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, accuracy * 100.0)
}
