use super::connectors::{ColumnStats, DataValidator, DatasetSummary};
use crate::error::{FeatselectError, Result};
use crate::types::{Instance, Label};
use std::collections::BTreeMap;

/// Ordered collection of labeled feature vectors sharing one feature count.
///
/// Construction validates the shape; after that the only mutation allowed is
/// a single call to [`Dataset::normalize`]. Searches borrow it immutably.
#[derive(Debug, Clone)]
pub struct Dataset {
    instances: Vec<Instance>,
    num_features: usize,
    normalization: Option<Vec<ColumnStats>>,
    source: Option<String>,
}

impl Dataset {
    pub fn new(instances: Vec<Instance>) -> Result<Self> {
        let num_features = DataValidator::validate_instances(&instances)?;
        Ok(Self {
            instances,
            num_features,
            normalization: None,
            source: None,
        })
    }

    /// Build from parallel label and feature columns
    pub fn from_parts(labels: &[Label], features: &[Vec<f64>]) -> Result<Self> {
        if labels.len() != features.len() {
            return Err(FeatselectError::Validation(format!(
                "{} labels but {} feature rows",
                labels.len(),
                features.len()
            )));
        }
        let instances = labels
            .iter()
            .zip(features)
            .map(|(&label, row)| Instance::new(label, row.clone()))
            .collect();
        Self::new(instances)
    }

    pub(crate) fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn label(&self, index: usize) -> Label {
        self.instances[index].label
    }

    pub fn features(&self, index: usize) -> &[f64] {
        &self.instances[index].features
    }

    pub fn is_normalized(&self) -> bool {
        self.normalization.is_some()
    }

    /// Statistics applied by [`Dataset::normalize`], if it has run
    pub fn column_stats(&self) -> Option<&[ColumnStats]> {
        self.normalization.as_deref()
    }

    /// Replace every value with its z-score over the whole dataset.
    ///
    /// Mean and population standard deviation are computed per column over
    /// all instances, held-out ones included: this is a global transform,
    /// not a per-fold one. A column with zero deviation divides by 1.0.
    /// Calling it a second time is an error.
    pub fn normalize(&mut self) -> Result<&[ColumnStats]> {
        if self.normalization.is_some() {
            return Err(FeatselectError::AlreadyNormalized);
        }

        let n = self.instances.len() as f64;
        let mut stats = Vec::with_capacity(self.num_features);

        for j in 0..self.num_features {
            let mean = self.instances.iter().map(|inst| inst.features[j]).sum::<f64>() / n;
            let variance = self
                .instances
                .iter()
                .map(|inst| {
                    let diff = inst.features[j] - mean;
                    diff * diff
                })
                .sum::<f64>()
                / n;
            let mut std = variance.sqrt();
            if std == 0.0 {
                std = 1.0;
            }
            stats.push(ColumnStats { mean, std });
        }

        for instance in &mut self.instances {
            for (value, col) in instance.features.iter_mut().zip(&stats) {
                *value = (*value - col.mean) / col.std;
            }
        }

        log::debug!("Normalized {} feature columns", stats.len());
        Ok(self.normalization.insert(stats).as_slice())
    }

    pub fn summary(&self) -> DatasetSummary {
        let mut class_counts = BTreeMap::new();
        for instance in &self.instances {
            *class_counts.entry(instance.label).or_insert(0) += 1;
        }
        DatasetSummary {
            source: self.source.clone(),
            num_instances: self.len(),
            num_features: self.num_features,
            class_counts,
            normalized: self.is_normalized(),
        }
    }
}
