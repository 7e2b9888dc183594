//! Processing-element testbench CLI.
//!
//! This binary runs a scenario suite against one behavioral PE and maps the
//! outcome to the exit status. It performs:
//! 1. **Default run:** With no arguments, the built-in regression suite.
//! 2. **Scenario files:** `--scenarios <json>` runs a suite loaded from disk.
//! 3. **Tracing:** `--trace` logs every clock edge to stderr; `RUST_LOG` filters logging.
//!
//! Exit status is 0 when every scenario passes, 1 when any fails, and 2 when the
//! run could not be set up.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pesim_core::common::constants::EXIT_SETUP_ERROR;
use pesim_core::common::error::Result;
use pesim_core::config::Config;
use pesim_core::sim::loader;
use pesim_core::testbench::{ScenarioRunner, suite};
use pesim_core::{ProcessingElement, RunSummary};

#[derive(Parser, Debug)]
#[command(
    name = "pe-tb",
    author,
    version,
    about = "Cycle-accurate processing-element testbench",
    long_about = "Drive a pipelined multiply-accumulate PE through a scenario suite and check its output.\n\nWith no arguments the built-in suite runs.\n\nExamples:\n  pe-tb\n  pe-tb --scenarios scenarios/smoke.json\n  pe-tb --trace"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON scenario suite to run instead of the built-in suite.
    #[arg(short, long)]
    scenarios: Option<PathBuf>,

    /// Log every clock edge (stage contents and accumulator) to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => process::exit(summary.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_SETUP_ERROR);
        }
    }
}

/// Loads config and scenarios, then runs the suite on a fresh device.
fn run(cli: &Cli) -> Result<RunSummary> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_cycles = true;
    }
    init_logging(config.general.trace_cycles);

    let suite = match &cli.scenarios {
        Some(path) => loader::load_suite(path)?,
        None => suite::builtin(),
    };

    let mut pe = ProcessingElement::new().with_trace(config.general.trace_cycles);
    let stdout = io::stdout();
    let mut runner = ScenarioRunner::new(&mut pe, stdout.lock());
    if config.harness.banner {
        runner = runner.with_banner(config.harness.title.clone());
    }
    runner.run_suite(&suite)
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the default level.
fn init_logging(trace_cycles: bool) {
    let default_level = if trace_cycles { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
