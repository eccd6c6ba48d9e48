use anyhow::Result;
use clap::Parser;
use percolation_stats::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};

////////////////////////////////////////////////////////////////////////////////

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Grid dimension N.
    dimension: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed for the random source; draws vary between runs if unset.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 2)]
    log_level: usize,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    stderrlog::new()
        .verbosity(args.log_level)
        .module(module_path!())
        .init()
        .unwrap();

    let stats = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            PercolationStats::run_with(args.dimension, args.trials, &mut rng)?
        }
        None => PercolationStats::run(args.dimension, args.trials)?,
    };

    let interval = stats.confidence_interval_95();

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!("95% confidence interval = [{}, {}]", interval.low, interval.high);

    Ok(())
}
