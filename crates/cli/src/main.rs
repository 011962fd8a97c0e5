mod commands;
mod output;

use calculatepi_shared::config::{EstimatorConfig, SWEEP_MAX, SWEEP_MIN, SWEEP_STEP};
use calculatepi_shared::{DEFAULT_NITER, SEED};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "calculatepi", version, about = "Monte Carlo estimate of pi")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate pi once (the default when no subcommand is given)
    Run {
        /// Number of random points to sample
        #[arg(long, default_value_t = DEFAULT_NITER)]
        niter: u64,
        /// Seed for the random stream
        #[arg(long, default_value_t = SEED)]
        seed: u64,
    },
    /// Estimate pi for a range of sample counts and time each run
    Sweep {
        /// First sample count
        #[arg(long, default_value_t = SWEEP_MIN)]
        min: u64,
        /// Last sample count (inclusive)
        #[arg(long, default_value_t = SWEEP_MAX)]
        max: u64,
        /// Increment between sample counts
        #[arg(long, default_value_t = SWEEP_STEP)]
        step: u64,
        /// Seed for every run in the sweep
        #[arg(long, default_value_t = SEED)]
        seed: u64,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose, cli.quiet)),
    )
    .init();

    match cli.command {
        None => commands::run::run(&EstimatorConfig::default()),
        Some(Commands::Run { niter, seed }) => {
            commands::run::run(&EstimatorConfig { niter, seed })
        }
        Some(Commands::Sweep {
            min,
            max,
            step,
            seed,
            format,
        }) => commands::sweep::run(min, max, step, seed, format),
    }
}
