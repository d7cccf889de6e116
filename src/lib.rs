//! Greedy wrapper feature selection for a 1-nearest-neighbor classifier.
//!
//! A [`data::Dataset`] is loaded and normalized once, then a
//! [`engines::search::SearchEngine`] grows (forward selection) or shrinks
//! (backward elimination) a feature subset, scoring each candidate with
//! leave-one-out accuracy from [`engines::evaluation::LeaveOneOutEvaluator`].

pub mod cli;
pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{FeatselectError, Result};
