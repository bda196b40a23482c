//! CLI for timing one step of the Array-of-Structures and Structure-of-Arrays particle layouts.

pub mod utils;

use clap::Parser;
use layouts::{DEFAULT_DT, DEFAULT_K, DEFAULT_N, Harness, StepParams, generate::DEFAULT_SEED};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The number of particles in each layout.
    #[arg(short('n'), long, default_value_t = DEFAULT_N)]
    num_particles: usize,

    /// The time step.
    #[arg(long, default_value_t = DEFAULT_DT)]
    dt: f64,

    /// The spring constant of the restoring force towards the origin.
    #[arg(short('k'), long, default_value_t = DEFAULT_K)]
    spring_constant: f64,

    /// The random seed for the initial states.
    #[arg(short('s'), long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// The number of timed steps per layout. With more than one, the median, min, and mean are reported.
    #[arg(short('t'), long, default_value_t = 1)]
    trials: usize,

    /// The number of worker threads. Defaults to the number of logical cores.
    #[arg(short('j'), long)]
    threads: Option<usize>,

    /// Check that both layouts hold identical particles after the timed steps.
    #[arg(long)]
    verify: bool,

    /// The name of the log-file to use.
    #[arg(short('l'), long, default_value = "layouts.log")]
    log_name: String,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let logs_dir = utils::logs_dir()?;
    let (_guard, log_path) = utils::configure_logger(&args.log_name, &logs_dir)?;
    ftlog::info!("Log file: {log_path:?}");

    if let Some(num_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to set num threads: {e}"))?;
    }
    ftlog::info!("Using {} worker threads", rayon::current_num_threads());

    let params = StepParams::new(args.num_particles, args.dt, args.spring_constant)?.with_seed(args.seed);
    let mut harness = Harness::new(params)?.with_trials(args.trials)?;

    let report = harness.run();
    println!("{report}");

    if args.verify {
        harness.verify()?;
        println!("Verified: both layouts agree on all {} particles.", report.n);
    }

    Ok(())
}
