use super::distance::{Euclidean, SubsetDistance};
use crate::data::Dataset;
use crate::error::{FeatselectError, Result};
use crate::types::{FeatureSubset, Label};

/// Predicts the label of one dataset instance from the others
pub trait Classifier {
    fn predict(&self, query: usize, subset: &FeatureSubset) -> Result<Label>;
}

/// 1-nearest-neighbor over a fixed training set
pub struct NearestNeighbor<'a, D: SubsetDistance = Euclidean> {
    dataset: &'a Dataset,
    metric: D,
}

impl<'a> NearestNeighbor<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_metric(dataset, Euclidean)
    }
}

impl<'a, D: SubsetDistance> NearestNeighbor<'a, D> {
    pub fn with_metric(dataset: &'a Dataset, metric: D) -> Self {
        Self { dataset, metric }
    }

    /// Index and distance of the closest instance other than `query`.
    /// Ties keep the lowest index.
    pub fn nearest(&self, query: usize, subset: &FeatureSubset) -> Result<(usize, f64)> {
        self.check_query(query, subset)?;

        let target = self.dataset.features(query);
        let mut best: Option<(usize, f64)> = None;

        for i in 0..self.dataset.len() {
            if i == query {
                continue;
            }
            let dist = self.metric.distance(target, self.dataset.features(i), subset);
            if best.map_or(true, |(_, min)| dist < min) {
                best = Some((i, dist));
            }
        }

        best.ok_or(FeatselectError::InsufficientInstances {
            required: 2,
            actual: self.dataset.len(),
        })
    }

    fn check_query(&self, query: usize, subset: &FeatureSubset) -> Result<()> {
        if self.dataset.len() < 2 {
            return Err(FeatselectError::InsufficientInstances {
                required: 2,
                actual: self.dataset.len(),
            });
        }
        if query >= self.dataset.len() {
            return Err(FeatselectError::Validation(format!(
                "Query index {} out of range for {} instances",
                query,
                self.dataset.len()
            )));
        }
        subset.check_bounds(self.dataset.num_features())
    }
}

impl<D: SubsetDistance> Classifier for NearestNeighbor<'_, D> {
    fn predict(&self, query: usize, subset: &FeatureSubset) -> Result<Label> {
        let (index, _) = self.nearest(query, subset)?;
        Ok(self.dataset.label(index))
    }
}
