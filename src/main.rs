use anyhow::Context;
use featselect::cli::{self, Cli, Command, SearchArgs, SearchOutcome};
use featselect::config::{ConfigManager, OutputFormat};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    init_logging(&cli);

    let mut manager = ConfigManager::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or_else(|| Command::Search(SearchArgs::default())) {
        Command::Search(args) => {
            manager.update(|config| args.apply_overrides(config))?;
            let config = manager.get();
            if config.report.format == OutputFormat::Text {
                writeln!(out, "Welcome to the nearest-neighbor feature selection search.")?;
            }
            match cli::run_search(&args, &config, &mut input, &mut out)
                .context("Search failed")?
            {
                SearchOutcome::Completed(report) => {
                    log::debug!("Search finished at {}", report.finished_at);
                }
                SearchOutcome::InvalidChoice => {}
            }
        }
        Command::Evaluate(args) => {
            manager.update(|config| args.apply_overrides(config))?;
            cli::run_evaluate(&args, &manager.get(), &mut out)
                .with_context(|| format!("Evaluation of {} failed", args.data.display()))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
