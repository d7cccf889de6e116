//! Command-line surface: argument parsing, interactive prompts and the
//! search/evaluate workflows behind them.

mod args;
mod prompt;
mod runner;

pub use args::{parse_args, Cli, Command, EvaluateArgs, FormatArg, SearchArgs};
pub use prompt::{prompt_data_source, prompt_method, DataSource};
pub use runner::{prepare_dataset, run_evaluate, run_search, SearchOutcome};
