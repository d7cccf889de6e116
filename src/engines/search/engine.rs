use super::policy::SearchPolicy;
use super::progress::SearchObserver;
use super::report::{RoundSummary, SearchReport};
use crate::engines::evaluation::SubsetEvaluator;
use crate::error::{FeatselectError, Result};
use crate::types::{FeatureSubset, TraceEntry};
use std::time::Instant;

/// Greedy wrapper search over feature subsets.
///
/// Runs exactly `num_features` rounds. Each round evaluates every candidate
/// the policy proposes, keeps the first candidate with the strictly highest
/// accuracy, and applies it. The global best changes only on a strictly
/// higher accuracy, so it may differ from the subset left after the last
/// round. There is no early stopping.
pub struct SearchEngine {
    policy: SearchPolicy,
    num_features: usize,
}

impl SearchEngine {
    pub fn new(policy: SearchPolicy, num_features: usize) -> Result<Self> {
        if num_features == 0 {
            return Err(FeatselectError::Validation(
                "Search needs at least one feature".to_string(),
            ));
        }
        Ok(Self {
            policy,
            num_features,
        })
    }

    pub fn run<E, O>(&self, evaluator: &mut E, observer: &mut O) -> Result<SearchReport>
    where
        E: SubsetEvaluator + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let start = Instant::now();
        let method = self.policy.method;
        log::info!(
            "Starting {} over {} features with {} evaluation",
            method,
            self.num_features,
            evaluator.name()
        );

        let mut current = self.policy.initial_subset(self.num_features);
        let baseline = TraceEntry {
            round: 0,
            accuracy: evaluator.evaluate(&current)?,
            subset: current.clone(),
        };
        observer.on_baseline(method, evaluator.name(), &baseline)?;

        let mut best: Option<(FeatureSubset, f64)> = if self.policy.seed_best_with_baseline {
            Some((baseline.subset.clone(), baseline.accuracy))
        } else {
            None
        };
        let mut rounds = Vec::with_capacity(self.num_features);
        let mut evaluations = 0;

        for round in 1..=self.num_features {
            let mut leader: Option<(usize, f64)> = None;

            for feature in self.policy.candidates(&current, self.num_features) {
                let candidate = self.policy.apply(&current, feature);
                let accuracy = evaluator.evaluate(&candidate)?;
                evaluations += 1;
                observer.on_candidate(&TraceEntry {
                    round,
                    subset: candidate,
                    accuracy,
                })?;

                if leader.map_or(true, |(_, lead)| accuracy > lead) {
                    leader = Some((feature, accuracy));
                }
            }

            let Some((feature, accuracy)) = leader else {
                break;
            };
            current = self.policy.apply(&current, feature);

            let improved = best.as_ref().map_or(true, |(_, top)| accuracy > *top);
            if improved {
                best = Some((current.clone(), accuracy));
            }
            let regression = !improved && self.policy.warn_on_regression;
            if regression {
                log::warn!("Round {} accuracy {:.4} did not beat the best so far", round, accuracy);
            }

            let summary = RoundSummary {
                round,
                feature,
                subset: current.clone(),
                accuracy,
                improved,
                regression,
            };
            observer.on_round_complete(&summary)?;
            rounds.push(summary);
        }

        let (best_subset, best_accuracy) =
            best.unwrap_or_else(|| (baseline.subset.clone(), baseline.accuracy));

        let elapsed = start.elapsed();
        log::info!(
            "{} finished after {} evaluations in {:.2}s",
            method,
            evaluations,
            elapsed.as_secs_f64()
        );

        let report = SearchReport {
            method,
            evaluator: evaluator.name().to_string(),
            num_features: self.num_features,
            baseline,
            rounds,
            best_subset,
            best_accuracy,
            evaluations,
            elapsed_ms: elapsed.as_millis() as u64,
            finished_at: chrono::Utc::now().to_rfc3339(),
        };
        observer.on_finished(&report)?;
        Ok(report)
    }
}
