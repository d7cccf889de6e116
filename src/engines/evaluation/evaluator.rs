use super::classifier::{Classifier, NearestNeighbor};
use crate::data::Dataset;
use crate::error::Result;
use crate::types::FeatureSubset;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Scores a feature subset. Higher is better; accuracies lie in `[0, 1]`.
pub trait SubsetEvaluator {
    fn name(&self) -> &str;

    fn evaluate(&mut self, subset: &FeatureSubset) -> Result<f64>;
}

/// Outcome of one full leave-one-out pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub subset: FeatureSubset,
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
    pub elapsed_secs: f64,
}

/// Leave-one-out accuracy of a classifier over a fixed dataset.
///
/// Each call classifies every instance against all the others, so one
/// evaluation costs `O(n^2 * |subset|)` distance terms.
pub struct LeaveOneOutEvaluator<'a, C: Classifier = NearestNeighbor<'a>> {
    dataset: &'a Dataset,
    classifier: C,
    log_instances: bool,
}

impl<'a> LeaveOneOutEvaluator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_classifier(dataset, NearestNeighbor::new(dataset))
    }
}

impl<'a, C: Classifier> LeaveOneOutEvaluator<'a, C> {
    pub fn with_classifier(dataset: &'a Dataset, classifier: C) -> Self {
        Self {
            dataset,
            classifier,
            log_instances: false,
        }
    }

    /// Emit every prediction at trace level
    pub fn log_instances(mut self, enabled: bool) -> Self {
        self.log_instances = enabled;
        self
    }

    pub fn run(&self, subset: &FeatureSubset) -> Result<Evaluation> {
        let start = Instant::now();
        let total = self.dataset.len();
        let mut correct = 0;

        for i in 0..total {
            let predicted = self.classifier.predict(i, subset)?;
            let actual = self.dataset.label(i);
            if predicted == actual {
                correct += 1;
            }

            if self.log_instances {
                log::trace!(
                    "Instance {}: predicted={}, actual={}, elapsed={:.3}s",
                    i,
                    predicted,
                    actual,
                    start.elapsed().as_secs_f64()
                );
            }
        }

        Ok(Evaluation {
            subset: subset.clone(),
            correct,
            total,
            accuracy: correct as f64 / total as f64,
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }
}

impl<C: Classifier> SubsetEvaluator for LeaveOneOutEvaluator<'_, C> {
    fn name(&self) -> &str {
        "leave-one-out"
    }

    fn evaluate(&mut self, subset: &FeatureSubset) -> Result<f64> {
        self.run(subset).map(|evaluation| evaluation.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatselectError;
    use crate::types::Label;

    /// Always predicts the same label
    struct Constant(Label);

    impl Classifier for Constant {
        fn predict(&self, _query: usize, _subset: &FeatureSubset) -> Result<Label> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_accuracy_counts_matches() {
        let dataset =
            Dataset::from_parts(&[1, 1, 1, 2], &[vec![0.0], vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let evaluator = LeaveOneOutEvaluator::with_classifier(&dataset, Constant(1));
        let evaluation = evaluator.run(&FeatureSubset::full(1)).unwrap();
        assert_eq!(evaluation.correct, 3);
        assert_eq!(evaluation.total, 4);
        assert_eq!(evaluation.accuracy, 0.75);
    }

    #[test]
    fn test_identical_points_opposite_labels() {
        let dataset = Dataset::from_parts(&[0, 1], &[vec![1.0], vec![1.0]]).unwrap();
        let mut evaluator = LeaveOneOutEvaluator::new(&dataset);
        assert_eq!(evaluator.evaluate(&FeatureSubset::full(1)).unwrap(), 0.0);
    }

    #[test]
    fn test_degenerate_dataset_fails() {
        let dataset = Dataset::from_parts(&[0], &[vec![1.0]]).unwrap();
        let mut evaluator = LeaveOneOutEvaluator::new(&dataset);
        assert!(matches!(
            evaluator.evaluate(&FeatureSubset::empty()),
            Err(FeatselectError::InsufficientInstances { .. })
        ));
    }

    #[test]
    fn test_repeat_calls_agree() {
        let dataset = Dataset::from_parts(
            &[0, 1, 0, 1, 1],
            &[vec![0.1, 3.0], vec![0.9, 1.0], vec![0.2, 2.5], vec![1.1, 0.5], vec![0.4, 4.0]],
        )
        .unwrap();
        let mut evaluator = LeaveOneOutEvaluator::new(&dataset);
        let subset = FeatureSubset::full(2);
        let first = evaluator.evaluate(&subset).unwrap();
        let second = evaluator.evaluate(&subset).unwrap();
        assert_eq!(first, second);
    }
}
