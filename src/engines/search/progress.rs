use super::policy::SearchMethod;
use super::report::{format_percent, RoundSummary, SearchReport};
use crate::error::Result;
use crate::types::TraceEntry;
use std::io::Write;

/// Receives search progress. An error stops the search.
pub trait SearchObserver {
    fn on_baseline(&mut self, method: SearchMethod, evaluator: &str, baseline: &TraceEntry) -> Result<()>;
    fn on_candidate(&mut self, entry: &TraceEntry) -> Result<()>;
    fn on_round_complete(&mut self, summary: &RoundSummary) -> Result<()>;
    fn on_finished(&mut self, report: &SearchReport) -> Result<()>;
}

/// Prints the human-readable search trace
pub struct ConsoleTrace<W: Write> {
    out: W,
    decimals: usize,
}

impl<W: Write> ConsoleTrace<W> {
    pub fn new(out: W, decimals: usize) -> Self {
        Self { out, decimals }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn pct(&self, accuracy: f64) -> String {
        format_percent(accuracy, self.decimals)
    }
}

impl<W: Write> SearchObserver for ConsoleTrace<W> {
    fn on_baseline(&mut self, method: SearchMethod, evaluator: &str, baseline: &TraceEntry) -> Result<()> {
        let which = match method {
            SearchMethod::Forward => "no features".to_string(),
            SearchMethod::Backward => format!("all features {}", baseline.subset),
        };
        let pct = self.pct(baseline.accuracy);
        writeln!(
            self.out,
            "Using {} and \"{}\" evaluation, I get an accuracy of {}\n",
            which, evaluator, pct
        )?;
        writeln!(self.out, "Beginning search.\n")?;
        Ok(())
    }

    fn on_candidate(&mut self, entry: &TraceEntry) -> Result<()> {
        let pct = self.pct(entry.accuracy);
        writeln!(self.out, "Using feature(s) {} accuracy is {}", entry.subset, pct)?;
        Ok(())
    }

    fn on_round_complete(&mut self, summary: &RoundSummary) -> Result<()> {
        let pct = self.pct(summary.accuracy);
        writeln!(
            self.out,
            "\nFeature set {} was best, accuracy is {}\n",
            summary.subset, pct
        )?;
        if summary.regression {
            writeln!(self.out, "(Warning, Accuracy has decreased!)\n")?;
        }
        Ok(())
    }

    fn on_finished(&mut self, report: &SearchReport) -> Result<()> {
        let pct = self.pct(report.best_accuracy);
        writeln!(
            self.out,
            "Finished search! The best feature subset is {} with an accuracy of {}",
            report.best_subset, pct
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every trace entry in memory
#[derive(Debug, Default)]
pub struct TraceRecorder {
    pub baseline: Option<TraceEntry>,
    pub entries: Vec<TraceEntry>,
    pub rounds: Vec<RoundSummary>,
    pub finished: bool,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest accuracy among the candidate evaluations
    pub fn max_candidate_accuracy(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.accuracy).reduce(f64::max)
    }
}

impl SearchObserver for TraceRecorder {
    fn on_baseline(&mut self, _method: SearchMethod, _evaluator: &str, baseline: &TraceEntry) -> Result<()> {
        self.baseline = Some(baseline.clone());
        Ok(())
    }

    fn on_candidate(&mut self, entry: &TraceEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn on_round_complete(&mut self, summary: &RoundSummary) -> Result<()> {
        self.rounds.push(summary.clone());
        Ok(())
    }

    fn on_finished(&mut self, _report: &SearchReport) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
