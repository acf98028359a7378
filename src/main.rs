use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use pure_helpers::config::AppConfig;
use pure_helpers::generator::{self, BuildMode, BuildOutcome, GenerateError};
use pure_helpers::harness::TestReport;
use pure_helpers::helpers::{Binding, Namespace};
use pure_helpers::registry::Registry;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// test | module (alias: createjs) | readme | all
    mode: Option<String>,

    /// Extra config file, applied after the user config
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print every importable method
    #[arg(long)]
    api: bool,

    /// Resolve a comma separated list of names under the configured import policy
    #[arg(long, value_name = "NAMES")]
    import: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;
    let _guard = init_logging(&config)?;

    tracing::info!("pure-helpers starting");

    let registry = Registry::builtin();
    if args.api {
        print!("{}", registry.api_listing());
    }
    if let Some(names) = args.import.as_deref() {
        report_import(registry, names, &config)?;
    }

    let mode = match args.mode.as_deref().map(str::parse::<BuildMode>) {
        Some(Ok(mode)) => mode,
        Some(Err(err)) => {
            println!("{err}");
            return Ok(());
        }
        None => {
            if !args.api && args.import.is_none() {
                println!("no valid arguments");
            }
            return Ok(());
        }
    };

    tracing::info!("build mode: {mode:?}");
    for line in build_lines(generator::build(registry, mode, &config.build))? {
        println!("{line}");
    }

    Ok(())
}

/// Console lines for a build result; errors other than failing tests propagate.
fn build_lines(result: Result<BuildOutcome, GenerateError>) -> Result<Vec<String>, GenerateError> {
    let mut lines = Vec::new();
    match result {
        Ok(outcome) => {
            if let Some(report) = &outcome.report {
                lines.extend(report_lines(report));
            }
            lines.extend(outcome.written.iter().map(|path| format!("wrote {}", path.display())));
        }
        Err(GenerateError::TestsFailed { failed, report }) => {
            lines.extend(report_lines(&report));
            lines.push(format!("CAN NOT BUILD, you should fix {failed} test(s) first"));
        }
        Err(err) => return Err(err),
    }
    Ok(lines)
}

// Log to file; stdout carries the test report
fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "pure-helpers.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(guard)
}

fn report_lines(report: &TestReport) -> Vec<String> {
    report
        .outcomes
        .iter()
        .map(ToString::to_string)
        .chain([report.summary()])
        .collect()
}

fn report_import(registry: &Registry, names: &str, config: &AppConfig) -> Result<()> {
    let namespace = registry.import(names, Namespace::new(), config.import.policy)?;
    for name in namespace.names() {
        let state = match namespace.get(name) {
            Some(Binding::Resolved(_)) => "resolved",
            Some(Binding::Stub(_)) | None => "stub",
        };
        println!("{name}: {state}");
    }
    Ok(())
}
