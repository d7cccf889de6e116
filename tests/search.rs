use featselect::data::{Dataset, TextConnector};
use featselect::engines::evaluation::{LeaveOneOutEvaluator, RandomEvaluator, SubsetEvaluator};
use featselect::engines::search::{
    ConsoleTrace, SearchEngine, SearchMethod, SearchPolicy, SearchReport, TraceRecorder,
};
use featselect::error::FeatselectError;
use featselect::types::FeatureSubset;
use std::io::{self, Write};

const SMALL_DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/small_dataset.txt");

fn load_small() -> Dataset {
    let mut dataset = TextConnector::load(SMALL_DATASET).unwrap();
    dataset.normalize().unwrap();
    dataset
}

/// Four instances, two features, both features separate the classes
fn separable() -> Dataset {
    let mut dataset = Dataset::from_parts(
        &[0, 0, 1, 1],
        &[vec![0.0, 0.0], vec![0.0, 1.0], vec![5.0, 5.0], vec![5.0, 6.0]],
    )
    .unwrap();
    dataset.normalize().unwrap();
    dataset
}

fn search(dataset: &Dataset, policy: SearchPolicy) -> (SearchReport, TraceRecorder) {
    let mut evaluator = LeaveOneOutEvaluator::new(dataset);
    let mut recorder = TraceRecorder::new();
    let engine = SearchEngine::new(policy, dataset.num_features()).unwrap();
    let report = engine.run(&mut evaluator, &mut recorder).unwrap();
    (report, recorder)
}

#[test]
fn test_forward_on_separable_data() {
    let dataset = separable();
    let (report, _) = search(&dataset, SearchPolicy::forward());

    // Both single features score 100%; the lower index wins the tie
    assert_eq!(report.rounds[0].feature, 1);
    assert_eq!(report.rounds[0].accuracy, 1.0);
    assert_eq!(report.best_accuracy, 1.0);
    assert_eq!(report.best_subset.to_string(), "{1}");
    assert_eq!(report.method, SearchMethod::Forward);
}

#[test]
fn test_forward_finds_informative_feature() {
    let dataset = load_small();
    let (report, _) = search(&dataset, SearchPolicy::forward());

    assert_eq!(report.rounds[0].feature, 2);
    assert_eq!(report.best_subset.to_string(), "{2}");
    assert_eq!(report.best_accuracy, 1.0);
    assert_eq!(report.rounds.last().unwrap().subset, FeatureSubset::full(3));
}

#[test]
fn test_evaluation_counts() {
    let dataset = load_small();
    let n = dataset.num_features();

    for policy in [SearchPolicy::forward(), SearchPolicy::backward()] {
        let (report, recorder) = search(&dataset, policy);
        assert_eq!(report.evaluations, n * (n + 1) / 2);
        assert_eq!(recorder.entries.len(), n * (n + 1) / 2);
        assert_eq!(report.rounds.len(), n);
    }
}

#[test]
fn test_backward_baseline_is_full_set_accuracy() {
    let dataset = load_small();
    let (report, _) = search(&dataset, SearchPolicy::backward());

    let mut evaluator = LeaveOneOutEvaluator::new(&dataset);
    let direct = evaluator
        .evaluate(&FeatureSubset::full(dataset.num_features()))
        .unwrap();
    assert_eq!(report.baseline.subset, FeatureSubset::full(3));
    assert_eq!(report.baseline.accuracy, direct);
    assert!(report.best_accuracy >= direct);
}

#[test]
fn test_empty_subset_accuracy_agrees_across_strategies() {
    let dataset = load_small();
    let (forward, _) = search(&dataset, SearchPolicy::forward());
    let (_, backward_trace) = search(&dataset, SearchPolicy::backward());

    let last = backward_trace.entries.last().unwrap();
    assert!(last.subset.is_empty());
    assert!(forward.baseline.subset.is_empty());
    assert_eq!(forward.baseline.accuracy, last.accuracy);
}

#[test]
fn test_best_matches_maximum_evaluated() {
    let dataset = load_small();

    let (forward, trace) = search(&dataset, SearchPolicy::forward());
    assert_eq!(Some(forward.best_accuracy), trace.max_candidate_accuracy());

    let (backward, trace) = search(&dataset, SearchPolicy::backward());
    let max_seen = trace
        .max_candidate_accuracy()
        .unwrap()
        .max(backward.baseline.accuracy);
    assert_eq!(backward.best_accuracy, max_seen);
}

#[test]
fn test_identical_features_pick_lowest_index() {
    let rows: Vec<Vec<f64>> = [0.0, 0.5, 4.0, 4.5, 9.0]
        .iter()
        .map(|&v| vec![v, v, v])
        .collect();
    let mut dataset = Dataset::from_parts(&[0, 0, 1, 1, 1], &rows).unwrap();
    dataset.normalize().unwrap();

    let (report, trace) = search(&dataset, SearchPolicy::forward());
    let first_round: Vec<f64> = trace
        .entries
        .iter()
        .filter(|e| e.round == 1)
        .map(|e| e.accuracy)
        .collect();
    assert_eq!(first_round.len(), 3);
    assert!(first_round.iter().all(|&a| a == first_round[0]));
    assert_eq!(report.rounds[0].feature, 1);
}

#[test]
fn test_seeded_random_search_is_reproducible() {
    let run = |seed| {
        let mut evaluator = RandomEvaluator::new(5, Some(seed));
        let engine = SearchEngine::new(SearchPolicy::backward(), 5).unwrap();
        engine.run(&mut evaluator, &mut TraceRecorder::new()).unwrap()
    };
    let a = run(11);
    let b = run(11);
    assert_eq!(a.best_subset, b.best_subset);
    assert_eq!(a.best_accuracy, b.best_accuracy);
    assert_eq!(a.evaluations, 15);
}

#[test]
fn test_console_trace_lines() {
    let dataset = separable();
    let mut evaluator = LeaveOneOutEvaluator::new(&dataset);
    let mut trace = ConsoleTrace::new(Vec::new(), 2);
    let engine = SearchEngine::new(SearchPolicy::forward(), 2).unwrap();
    engine.run(&mut evaluator, &mut trace).unwrap();

    let text = String::from_utf8(trace.into_inner()).unwrap();
    assert!(text.contains("Beginning search."));
    assert!(text.contains("Using feature(s) {1} accuracy is 100.00%"));
    assert!(text.contains("Using feature(s) {2} accuracy is 100.00%"));
    assert!(text.contains("Feature set {1} was best, accuracy is 100.00%"));
    assert!(text.contains("Using feature(s) {1,2} accuracy is 100.00%"));
    // Round two ties the best, which counts as a decrease
    assert!(text.contains("(Warning, Accuracy has decreased!)"));
    assert!(text
        .trim_end()
        .ends_with("Finished search! The best feature subset is {1} with an accuracy of 100.00%"));
}

#[test]
fn test_backward_trace_has_no_regression_notice() {
    let dataset = load_small();
    let mut evaluator = LeaveOneOutEvaluator::new(&dataset);
    let mut trace = ConsoleTrace::new(Vec::new(), 1);
    let engine = SearchEngine::new(SearchPolicy::backward(), 3).unwrap();
    let report = engine.run(&mut evaluator, &mut trace).unwrap();

    let text = String::from_utf8(trace.into_inner()).unwrap();
    assert!(!text.contains("Warning"));
    assert!(text.contains("Using feature(s) {} accuracy is"));
    // End-of-round lines carry the round's own accuracy
    let first = &report.rounds[0];
    let expected = format!(
        "Feature set {} was best, accuracy is {:.1}%",
        first.subset,
        first.accuracy * 100.0
    );
    assert!(text.contains(&expected));
}

/// Accepts a fixed number of writes, then fails like a closed pipe
struct ClosingWriter {
    remaining: usize,
}

impl Write for ClosingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.remaining -= 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_failed_trace_write_stops_search() {
    let dataset = load_small();
    let mut evaluator = LeaveOneOutEvaluator::new(&dataset);
    let mut trace = ConsoleTrace::new(ClosingWriter { remaining: 0 }, 2);
    let engine = SearchEngine::new(SearchPolicy::forward(), dataset.num_features()).unwrap();

    let result = engine.run(&mut evaluator, &mut trace);
    assert!(matches!(result, Err(FeatselectError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
}
