use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use lcs_dp_bench::solvers::required_stack_bytes;
use lcs_dp_bench::sweep::{DEFAULT_MAX_LEN, DEFAULT_REPETITIONS, DEFAULT_STEP};
use lcs_dp_bench::{InstanceKind, Sweep, SweepConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Time memoized top-down and bottom-up LCS over a grid of input sizes.
///
/// Writes `instance,n,m,TD,BU` CSV to stdout, one row per (n, m) cell with n
/// and m stepping by 100. TD and BU are mean milliseconds over 100 runs.
/// Diagnostics go to stderr; set RUST_LOG=debug for per-cell details.
#[derive(Parser, Debug)]
#[command(name = "lcs_bench", version)]
struct Args {
    /// Maximum length of the first sequence
    #[arg(value_name = "N", default_value_t = DEFAULT_MAX_LEN)]
    max_n: usize,

    /// Maximum length of the second sequence
    #[arg(value_name = "M", default_value_t = DEFAULT_MAX_LEN)]
    max_m: usize,

    /// Instance kind: 0 for worst case (disjoint symbols), any other integer for best case
    #[arg(value_name = "MODE", default_value_t = 0, allow_negative_numbers = true)]
    mode: i64,
}

impl Args {
    fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            max_n: self.max_n,
            max_m: self.max_m,
            kind: InstanceKind::from_flag(self.mode),
            step: DEFAULT_STEP,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = args.sweep_config();

    // Deep top-down recursion needs more stack than the main thread offers.
    let stack_bytes = required_stack_bytes(config.max_n, config.max_m);
    info!(
        max_n = config.max_n,
        max_m = config.max_m,
        kind = config.kind.label(),
        stack_bytes,
        "starting sweep"
    );

    let worker = thread::Builder::new()
        .name("lcs-sweep".to_string())
        .stack_size(stack_bytes)
        .spawn(move || run(config));

    let handle = match worker {
        Ok(handle) => handle,
        Err(err) => {
            error!("failed to spawn sweep thread: {err}");
            return ExitCode::FAILURE;
        }
    };

    match handle.join() {
        Ok(Ok(rows)) => {
            info!(rows, "done");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            error!("lcs_bench: {err}");
            ExitCode::FAILURE
        }
        Err(_) => {
            error!("sweep thread panicked");
            ExitCode::FAILURE
        }
    }
}

fn run(config: SweepConfig) -> lcs_dp_bench::Result<usize> {
    let sweep = Sweep::new(config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let rows = sweep.run(&mut out)?;
    Ok(rows.len())
}
