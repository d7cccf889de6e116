use crate::error::{FeatselectError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Integer class label
pub type Label = i64;

/// One labeled row of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub label: Label,
    pub features: Vec<f64>,
}

impl Instance {
    pub fn new(label: Label, features: Vec<f64>) -> Self {
        Self { label, features }
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }
}

/// Set of 1-based feature indices, iterated in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSubset(BTreeSet<usize>);

impl FeatureSubset {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// All features `1..=num_features`
    pub fn full(num_features: usize) -> Self {
        Self((1..=num_features).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, feature: usize) -> bool {
        self.0.contains(&feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn insert(&mut self, feature: usize) -> bool {
        self.0.insert(feature)
    }

    pub fn remove(&mut self, feature: usize) -> bool {
        self.0.remove(&feature)
    }

    /// Copy of this subset with `feature` added
    pub fn with(&self, feature: usize) -> Self {
        let mut next = self.clone();
        next.insert(feature);
        next
    }

    /// Copy of this subset with `feature` removed
    pub fn without(&self, feature: usize) -> Self {
        let mut next = self.clone();
        next.remove(feature);
        next
    }

    /// Check every member lies in `1..=num_features`
    pub fn check_bounds(&self, num_features: usize) -> Result<()> {
        match self.iter().find(|&f| f == 0 || f > num_features) {
            Some(feature) => Err(FeatselectError::InvalidFeature {
                feature,
                num_features,
            }),
            None => Ok(()),
        }
    }
}

impl FromIterator<usize> for FeatureSubset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FeatureSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, feature) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", feature)?;
        }
        write!(f, "}}")
    }
}

/// Parses `1,15,27` or `{1,15,27}`; `{}` and the empty string are the empty subset
impl FromStr for FeatureSubset {
    type Err = FeatselectError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(trimmed);

        let mut subset = Self::empty();
        for token in inner.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let feature: usize = token
                .parse()
                .map_err(|_| FeatselectError::InvalidSubset(format!("'{}' is not a feature index", token)))?;
            if feature == 0 {
                return Err(FeatselectError::InvalidSubset(
                    "feature indices are 1-based".to_string(),
                ));
            }
            subset.insert(feature);
        }
        Ok(subset)
    }
}

/// One evaluated candidate subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub round: usize,
    pub subset: FeatureSubset,
    pub accuracy: f64,
}
