//! progeny-sim — command-line driver for the Progeny decay models.
//!
//! Two subcommands: `mc` runs the stochastic population simulation over
//! the full branching chain; `ode` runs the deterministic rate-equation
//! model of the dominant path. Both render text reports by default and
//! JSON with `--json`.

mod report;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use progeny_core::params::SimParams;
use progeny_mc::simulate;
use progeny_ode::RadonSeries;

/// Radon decay-chain simulator.
#[derive(Parser)]
#[command(name = "progeny-sim")]
#[command(version, about = "Simulate the decay of a Ra-222 atom population")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monte Carlo population simulation over the full branching chain.
    Mc(McArgs),
    /// Deterministic rate-equation model of the dominant path.
    Ode(OdeArgs),
}

#[derive(Args)]
struct McArgs {
    /// Number of atoms in the initial population.
    #[arg(short, long)]
    count: usize,

    /// Time step of the simulation in seconds.
    #[arg(short, long)]
    time_step: f64,

    /// Number of time steps to perform.
    #[arg(short, long)]
    loops: usize,

    /// Seed for a reproducible run; drawn from entropy otherwise.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit snapshots as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct OdeArgs {
    /// Initial Po-218 inventory, in atoms.
    #[arg(short, long, default_value = "100000")]
    atoms: f64,

    /// Total simulated time in seconds.
    #[arg(short, long, default_value = "20000")]
    duration: f64,

    /// Number of output samples after t = 0.
    #[arg(short, long, default_value = "100")]
    samples: usize,

    /// Implicit sub-steps between consecutive samples.
    #[arg(long, default_value = "10")]
    substeps: usize,

    /// Emit the trajectory as JSON instead of the text table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    match cli.command {
        Commands::Mc(args) => run_mc(args),
        Commands::Ode(args) => run_ode(args),
    }
}

fn run_mc(args: McArgs) -> Result<()> {
    // Invalid parameters are rejected here; the engine is never invoked
    // with them.
    let params = SimParams::new(args.count, args.time_step, args.loops)
        .context("invalid simulation parameters")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        atoms = params.atom_count,
        dt = params.time_step,
        steps = params.steps,
        seed = args.seed,
        "running Monte Carlo model"
    );
    let snapshots = simulate(&params, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    } else {
        print!("{}", report::render_censuses(&snapshots));
    }
    Ok(())
}

fn run_ode(args: OdeArgs) -> Result<()> {
    if !args.atoms.is_finite() || args.atoms < 0.0 {
        bail!("initial inventory must be non-negative, got {}", args.atoms);
    }
    if !args.duration.is_finite() || args.duration <= 0.0 {
        bail!("duration must be positive, got {}", args.duration);
    }
    if args.samples == 0 {
        bail!("at least one output sample is required");
    }

    let grid: Vec<f64> = (0..=args.samples)
        .map(|i| args.duration * i as f64 / args.samples as f64)
        .collect();

    info!(
        atoms = args.atoms,
        duration = args.duration,
        samples = args.samples,
        "running rate-equation model"
    );
    let solution = RadonSeries::new()
        .solve(args.atoms, &grid, args.substeps)
        .context("rate-equation solve failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{}", report::render_solution(&solution));
    }
    Ok(())
}
