use crate::error::{FeatselectError, Result};
use crate::types::FeatureSubset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    Forward,
    Backward,
}

impl SearchMethod {
    /// Accepts the menu numbers `1`/`2` as well as the method names
    pub fn from_selector(selector: &str) -> Result<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "1" | "forward" | "forward-selection" | "forward_selection" => Ok(Self::Forward),
            "2" | "backward" | "backward-elimination" | "backward_elimination" => Ok(Self::Backward),
            other => Err(FeatselectError::InvalidSelector(other.to_string())),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Forward => "Forward Selection",
            Self::Backward => "Backward Elimination",
        }
    }
}

impl FromStr for SearchMethod {
    type Err = FeatselectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_selector(s)
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// What distinguishes the greedy variants inside the shared search loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub method: SearchMethod,
    /// Whether the baseline subset competes for the global best
    pub seed_best_with_baseline: bool,
    /// Flag rounds whose accuracy does not beat the global best
    pub warn_on_regression: bool,
}

impl SearchPolicy {
    /// Grow from the empty subset
    pub fn forward() -> Self {
        Self {
            method: SearchMethod::Forward,
            seed_best_with_baseline: false,
            warn_on_regression: true,
        }
    }

    /// Shrink from the full subset
    pub fn backward() -> Self {
        Self {
            method: SearchMethod::Backward,
            seed_best_with_baseline: true,
            warn_on_regression: false,
        }
    }

    pub fn for_method(method: SearchMethod) -> Self {
        match method {
            SearchMethod::Forward => Self::forward(),
            SearchMethod::Backward => Self::backward(),
        }
    }

    pub fn initial_subset(&self, num_features: usize) -> FeatureSubset {
        match self.method {
            SearchMethod::Forward => FeatureSubset::empty(),
            SearchMethod::Backward => FeatureSubset::full(num_features),
        }
    }

    /// Features to toggle this round, ascending
    pub fn candidates(&self, current: &FeatureSubset, num_features: usize) -> Vec<usize> {
        match self.method {
            SearchMethod::Forward => (1..=num_features).filter(|&f| !current.contains(f)).collect(),
            SearchMethod::Backward => current.iter().collect(),
        }
    }

    pub fn apply(&self, current: &FeatureSubset, feature: usize) -> FeatureSubset {
        match self.method {
            SearchMethod::Forward => current.with(feature),
            SearchMethod::Backward => current.without(feature),
        }
    }
}
