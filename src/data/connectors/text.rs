use super::validator::DataValidator;
use crate::data::Dataset;
use crate::error::{FeatselectError, Result};
use crate::types::{Instance, Label};
use std::path::Path;

/// Reader for whitespace-delimited datasets: one instance per line,
/// class label first, feature values after it.
pub struct TextConnector;

impl TextConnector {
    /// Load a dataset file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FeatselectError::DataLoading(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let dataset = Self::parse(&contents)?.with_source(path.display().to_string());
        log::info!(
            "Loaded {} instances with {} features from {}",
            dataset.len(),
            dataset.num_features(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse dataset text. Blank lines are skipped; everything else must be well formed.
    pub fn parse(contents: &str) -> Result<Dataset> {
        let mut instances = Vec::new();
        let mut expected: Option<usize> = None;

        for (idx, line) in contents.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let instance = Self::parse_row(line_no, line)?;
            match expected {
                Some(n) => DataValidator::check_feature_count(line_no, n, instance.num_features())?,
                None => expected = Some(instance.num_features()),
            }
            instances.push(instance);
        }

        if instances.is_empty() {
            return Err(FeatselectError::EmptyDataset);
        }

        Dataset::new(instances)
    }

    fn parse_row(line_no: usize, line: &str) -> Result<Instance> {
        let mut tokens = line.split_whitespace();

        // Label column is often written as a real, e.g. 2.0000000e+00
        let label_token = tokens.next().ok_or_else(|| FeatselectError::MalformedRow {
            line: line_no,
            reason: "missing class label".to_string(),
        })?;
        let label = Self::parse_label(line_no, label_token)?;

        let features = tokens
            .enumerate()
            .map(|(pos, token)| -> Result<f64> {
                let value: f64 = token.parse().map_err(|_| FeatselectError::MalformedRow {
                    line: line_no,
                    reason: format!("feature {} value '{}' is not numeric", pos + 1, token),
                })?;
                if !value.is_finite() {
                    return Err(FeatselectError::MalformedRow {
                        line: line_no,
                        reason: format!("feature {} value '{}' is not finite", pos + 1, token),
                    });
                }
                Ok(value)
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Instance::new(label, features))
    }

    fn parse_label(line_no: usize, token: &str) -> Result<Label> {
        if let Ok(label) = token.parse::<Label>() {
            return Ok(label);
        }

        let value: f64 = token.parse().map_err(|_| FeatselectError::MalformedRow {
            line: line_no,
            reason: format!("class label '{}' is not numeric", token),
        })?;
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !value.is_finite()
            || value.fract() != 0.0
            || value < Label::MIN as f64
            || value >= Label::MAX as f64
        {
            return Err(FeatselectError::MalformedRow {
                line: line_no,
                reason: format!("class label '{}' is not an integer", token),
            });
        }
        Ok(value as Label)
    }
}
