use clap::Parser;
use mlmath::housing::{
    generate_records, write_test_data, GenerationSummary, HousingRecord, DEFAULT_SAMPLES, DEFAULT_SEED,
};
use mlmath::Result;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;

const PREVIEW_ROWS: usize = 10;

/// Generates synthetic California housing rows for model evaluation.
#[derive(Parser)]
#[command(name = "generate_test_data")]
struct Cli {
    /// Output CSV file
    #[arg(short, long, default_value = "test_data.csv")]
    output: PathBuf,

    /// Number of rows to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn print_preview(records: &[HousingRecord]) {
    println!("\nSample of generated test data:");
    println!("{}", "=".repeat(80));
    println!("{}", HousingRecord::COLUMNS.join(" | "));
    for record in records.iter().take(PREVIEW_ROWS) {
        println!("{} | {}", record.to_fields().join(" | "), record.describe());
    }
}

fn run(cli: &Cli) -> Result<()> {
    println!("Generating {} test samples...", cli.samples);

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let records = generate_records(cli.samples, &mut rng)?;
    print_preview(&records);

    write_test_data(&cli.output, &records)?;
    println!("\nTest data saved to '{}'", cli.output.display());
    println!(
        "Dataset contains {} rows and {} columns",
        records.len(),
        HousingRecord::COLUMNS.len() + 1
    );
    println!("Features: {:?}", HousingRecord::COLUMNS);
    println!("Note: 'description' column is just for context, not used in prediction");

    if let Some(summary) = GenerationSummary::from_records(&records) {
        println!("\nData Summary:");
        println!("{}", "=".repeat(50));
        println!("{summary}");
    }

    println!("\nTest data generation completed!");
    println!("Run evaluate_model next to make predictions.");
    Ok(())
}

fn main() -> ExitCode {
    mlmath::logging::init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
