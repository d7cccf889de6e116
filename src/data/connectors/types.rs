use crate::types::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-column statistics used by z-score normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub mean: f64,
    /// Population standard deviation, 1.0 for constant columns
    pub std: f64,
}

/// Metadata about a loaded dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub source: Option<String>,
    pub num_instances: usize,
    pub num_features: usize,
    pub class_counts: BTreeMap<Label, usize>,
    pub normalized: bool,
}
