use clap::Parser;
use mlmath::probability::{simulate_dice_rolls, DEFAULT_TRIALS};
use rand::{rngs::StdRng, SeedableRng};
use std::process::ExitCode;

/// Estimates two-dice sum frequencies by simulation.
#[derive(Parser)]
#[command(name = "dice_rolls")]
struct Cli {
    /// Number of simulated rolls
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Random seed for reproducibility (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    mlmath::logging::init_tracing();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match simulate_dice_rolls(cli.trials, &mut rng) {
        Ok(estimate) => {
            println!("{estimate}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
