use super::args::{EvaluateArgs, SearchArgs};
use super::prompt::{prompt_data_source, prompt_method, DataSource};
use crate::config::{AppConfig, DataConfig, EvaluationMethod, OutputFormat};
use crate::data::{DataValidator, Dataset, TextConnector};
use crate::engines::evaluation::{
    Evaluation, LeaveOneOutEvaluator, RandomEvaluator, SubsetEvaluator,
};
use crate::engines::search::{
    format_percent, ConsoleTrace, SearchEngine, SearchMethod, SearchPolicy, SearchReport,
    TraceRecorder,
};
use crate::error::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

#[derive(Debug)]
pub enum SearchOutcome {
    Completed(SearchReport),
    /// The method selector was not recognised; nothing was searched
    InvalidChoice,
}

/// Load, validate and (per config) normalize a dataset file
pub fn prepare_dataset(path: &Path, config: &DataConfig) -> Result<Dataset> {
    let start = Instant::now();
    let mut dataset = TextConnector::load(path)?;
    log::info!(
        "Data loading completed in {:.3}s",
        start.elapsed().as_secs_f64()
    );

    DataValidator::validate_minimum_instances(&dataset, config.min_instances)?;
    let singletons = DataValidator::singleton_classes(&dataset);
    if !singletons.is_empty() {
        log::warn!(
            "Classes with a single instance can never be predicted correctly: {:?}",
            singletons
        );
    }

    if config.normalize {
        let start = Instant::now();
        dataset.normalize()?;
        log::info!(
            "Normalization completed in {:.3}s",
            start.elapsed().as_secs_f64()
        );
    } else {
        log::warn!("Normalization disabled; distances use raw feature values");
    }

    Ok(dataset)
}

/// Prompts share `out` with the text trace; in JSON mode `out` carries
/// only the report, so prompts go to stderr.
fn prompt_target<'w, W: Write>(
    text: bool,
    out: &'w mut W,
    stderr: &'w mut io::Stderr,
) -> &'w mut dyn Write {
    if text {
        out
    } else {
        stderr
    }
}

/// Interactive or flag-driven search
pub fn run_search<R: BufRead, W: Write>(
    args: &SearchArgs,
    config: &AppConfig,
    input: &mut R,
    out: &mut W,
) -> Result<SearchOutcome> {
    let text = config.report.format == OutputFormat::Text;
    let mut stderr = io::stderr();

    let source = match (&args.data, args.features) {
        (Some(path), _) => DataSource::File(path.clone()),
        (None, Some(n)) => DataSource::FeatureCount(n),
        (None, None) => prompt_data_source(input, prompt_target(text, out, &mut stderr))?,
    };

    let (dataset, num_features) = match source {
        DataSource::File(path) => {
            let dataset = prepare_dataset(&path, &config.data)?;
            if text {
                writeln!(out, "There are {} instances", dataset.len())?;
                writeln!(
                    out,
                    "This dataset has {} features (not including the class attribute), with {} instances.\n",
                    dataset.num_features(),
                    dataset.len()
                )?;
            }
            let n = dataset.num_features();
            (Some(dataset), n)
        }
        DataSource::FeatureCount(n) => (None, n),
    };

    let method = match &args.method {
        Some(selector) => SearchMethod::from_selector(selector).ok(),
        None => prompt_method(input, prompt_target(text, out, &mut stderr))?,
    };
    let Some(method) = method else {
        writeln!(prompt_target(text, out, &mut stderr), "Invalid choice. Exiting program.")?;
        return Ok(SearchOutcome::InvalidChoice);
    };

    let mut evaluator: Box<dyn SubsetEvaluator + '_> = match (&dataset, config.evaluation.method) {
        (Some(dataset), EvaluationMethod::LeaveOneOut) => Box::new(
            LeaveOneOutEvaluator::new(dataset).log_instances(config.evaluation.log_instances),
        ),
        (None, EvaluationMethod::LeaveOneOut) => {
            log::info!("No dataset loaded; scoring subsets randomly");
            Box::new(RandomEvaluator::new(num_features, config.evaluation.seed))
        }
        (_, EvaluationMethod::Random) => {
            Box::new(RandomEvaluator::new(num_features, config.evaluation.seed))
        }
    };

    let engine = SearchEngine::new(SearchPolicy::for_method(method), num_features)?;
    let report = match config.report.format {
        OutputFormat::Text => {
            let mut trace = ConsoleTrace::new(&mut *out, config.report.decimals);
            engine.run(evaluator.as_mut(), &mut trace)?
        }
        OutputFormat::Json => {
            let report = engine.run(evaluator.as_mut(), &mut TraceRecorder::new())?;
            writeln!(out, "{}", report.to_json()?)?;
            report
        }
    };

    Ok(SearchOutcome::Completed(report))
}

/// Leave-one-out accuracy of a single subset
pub fn run_evaluate<W: Write>(args: &EvaluateArgs, config: &AppConfig, out: &mut W) -> Result<Evaluation> {
    let dataset = prepare_dataset(&args.data, &config.data)?;
    args.subset.check_bounds(dataset.num_features())?;

    log::info!("Beginning evaluation of {} on {} instances", args.subset, dataset.len());
    let evaluation = LeaveOneOutEvaluator::new(&dataset)
        .log_instances(config.evaluation.log_instances)
        .run(&args.subset)?;

    match config.report.format {
        OutputFormat::Text => writeln!(
            out,
            "Using feature subset {}, accuracy is {} ({}/{} correct, {:.3}s)",
            evaluation.subset,
            format_percent(evaluation.accuracy, config.report.decimals),
            evaluation.correct,
            evaluation.total,
            evaluation.elapsed_secs
        )?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&evaluation)?)?,
    }

    Ok(evaluation)
}
