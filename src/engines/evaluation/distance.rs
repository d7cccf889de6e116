use crate::types::FeatureSubset;

/// Distance between two feature vectors projected onto a subset of features.
///
/// Subset members are 1-based; callers are responsible for bounds.
pub trait SubsetDistance {
    fn distance(&self, a: &[f64], b: &[f64], subset: &FeatureSubset) -> f64;
}

/// Euclidean norm of the projected difference. The empty subset is distance 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl SubsetDistance for Euclidean {
    fn distance(&self, a: &[f64], b: &[f64], subset: &FeatureSubset) -> f64 {
        subset
            .iter()
            .map(|feature| {
                let diff = a[feature - 1] - b[feature - 1];
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}
