use super::evaluator::SubsetEvaluator;
use crate::error::Result;
use crate::types::FeatureSubset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Stand-in evaluator returning a random accuracy for every subset.
///
/// Lets the search loop run from a bare feature count, without a dataset.
/// Accuracies have a resolution of 0.01%.
pub struct RandomEvaluator {
    num_features: usize,
    rng: StdRng,
}

impl RandomEvaluator {
    pub fn new(num_features: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { num_features, rng }
    }
}

impl SubsetEvaluator for RandomEvaluator {
    fn name(&self) -> &str {
        "random"
    }

    fn evaluate(&mut self, subset: &FeatureSubset) -> Result<f64> {
        subset.check_bounds(self.num_features)?;
        Ok(self.rng.gen_range(0..10_000u32) as f64 / 10_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sequences_repeat() {
        let subset = FeatureSubset::full(3);
        let mut a = RandomEvaluator::new(3, Some(42));
        let mut b = RandomEvaluator::new(3, Some(42));
        for _ in 0..10 {
            let x = a.evaluate(&subset).unwrap();
            assert_eq!(x, b.evaluate(&subset).unwrap());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_rejects_unknown_feature() {
        let mut evaluator = RandomEvaluator::new(2, Some(1));
        let subset: FeatureSubset = [5].into_iter().collect();
        assert!(evaluator.evaluate(&subset).is_err());
    }
}
