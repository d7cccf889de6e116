use crate::data::Dataset;
use crate::error::{FeatselectError, Result};
use crate::types::Instance;

pub struct DataValidator;

impl DataValidator {
    /// Validate that every instance carries the same, non-zero feature count.
    /// Returns the shared count. Rows are reported 1-based.
    pub fn validate_instances(instances: &[Instance]) -> Result<usize> {
        let first = instances.first().ok_or(FeatselectError::EmptyDataset)?;
        let expected = first.num_features();
        if expected == 0 {
            return Err(FeatselectError::Validation(
                "Dataset must have at least one feature column".to_string(),
            ));
        }

        for (i, instance) in instances.iter().enumerate() {
            Self::check_feature_count(i + 1, expected, instance.num_features())?;
            if let Some(pos) = instance.features.iter().position(|v| !v.is_finite()) {
                return Err(FeatselectError::MalformedRow {
                    line: i + 1,
                    reason: format!("feature {} is not a finite number", pos + 1),
                });
            }
        }

        Ok(expected)
    }

    pub fn check_feature_count(line: usize, expected: usize, actual: usize) -> Result<()> {
        if actual != expected {
            return Err(FeatselectError::InconsistentFeatureCount {
                line,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Check for minimum required instances
    pub fn validate_minimum_instances(dataset: &Dataset, min_instances: usize) -> Result<()> {
        if dataset.len() < min_instances {
            return Err(FeatselectError::InsufficientInstances {
                required: min_instances,
                actual: dataset.len(),
            });
        }
        Ok(())
    }

    /// Classes with a single member can never be predicted correctly by leave-one-out
    pub fn singleton_classes(dataset: &Dataset) -> Vec<i64> {
        dataset
            .summary()
            .class_counts
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|(label, _)| label)
            .collect()
    }
}
