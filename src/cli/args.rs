use crate::config::{AppConfig, OutputFormat};
use crate::types::FeatureSubset;
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Greedy feature subset selection for a nearest-neighbor classifier
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "featselect")]
#[command(version)]
#[command(about = "Forward selection and backward elimination scored by leave-one-out 1-NN accuracy")]
pub struct Cli {
    /// Subcommand to execute; prompts interactively for a search when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// TOML or JSON configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Search for the best feature subset
    Search(SearchArgs),

    /// Report leave-one-out accuracy for one feature subset
    Evaluate(EvaluateArgs),
}

#[derive(Parser, Debug, Clone, Default, PartialEq)]
pub struct SearchArgs {
    /// Whitespace-delimited dataset file
    #[arg(short, long, value_name = "FILE", conflicts_with = "features")]
    pub data: Option<PathBuf>,

    /// Run without data over this many features using random evaluation
    #[arg(short = 'n', long, value_name = "N")]
    pub features: Option<usize>,

    /// forward | backward (or the menu numbers 1 | 2)
    #[arg(short, long)]
    pub method: Option<String>,

    /// Score subsets randomly even when a dataset is given
    #[arg(long)]
    pub random: bool,

    /// Seed for random evaluation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Use raw feature values instead of z-scores
    #[arg(long)]
    pub no_normalize: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    /// Whitespace-delimited dataset file
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Feature subset such as 1,15,27
    #[arg(short, long, value_parser = parse_subset)]
    pub subset: FeatureSubset,

    /// Log every prediction (needs -v or RUST_LOG=trace)
    #[arg(long)]
    pub log_instances: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Use raw feature values instead of z-scores
    #[arg(long)]
    pub no_normalize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_subset(s: &str) -> Result<FeatureSubset, String> {
    s.parse().map_err(|e: crate::error::FeatselectError| e.to_string())
}

impl SearchArgs {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if self.random || self.features.is_some() {
            config.evaluation.method = crate::config::EvaluationMethod::Random;
        }
        if let Some(seed) = self.seed {
            config.evaluation.seed = Some(seed);
        }
        if let Some(format) = self.format {
            config.report.format = format.into();
        }
        if self.no_normalize {
            config.data.normalize = false;
        }
    }
}

impl EvaluateArgs {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if self.log_instances {
            config.evaluation.log_instances = true;
        }
        if let Some(format) = self.format {
            config.report.format = format.into();
        }
        if self.no_normalize {
            config.data.normalize = false;
        }
    }
}

/// Parse command-line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
