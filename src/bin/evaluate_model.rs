use clap::Parser;
use mlmath::housing::{evaluate, load_model, HousingFrame, PipelineConfig};
use mlmath::Result;
use std::path::PathBuf;
use std::process::ExitCode;

/// Predicts house values for a CSV batch with a trained model.
#[derive(Parser)]
#[command(name = "evaluate_model")]
struct Cli {
    /// Trained model file (JSON)
    #[arg(short, long, default_value = "house_price_model.json")]
    model: PathBuf,

    /// Test data CSV file
    #[arg(short, long, default_value = "test_data.csv")]
    data: PathBuf,

    /// Where to write the prediction results
    #[arg(short, long, default_value = "prediction_results.csv")]
    output: PathBuf,

    /// Number of rows to show
    #[arg(long, default_value_t = 15)]
    top_n: usize,

    /// Scale with the model's training-time statistics instead of refitting
    #[arg(long)]
    reuse_training_stats: bool,
}

fn run(cli: &Cli) -> Result<()> {
    println!("Starting House Price Model Evaluation");
    println!("{}", "=".repeat(50));

    let model = load_model(&cli.model)?;
    println!("Model loaded from {}", cli.model.display());

    let frame = HousingFrame::from_csv_path(&cli.data)?;
    println!("Test data loaded: {} rows, {} columns", frame.n_rows(), frame.n_columns());
    println!("Test data columns: {:?}", frame.column_names());

    let missing = frame.missing_count();
    if missing > 0 {
        println!("Found {missing} missing values - filling with median...");
    }

    let config = PipelineConfig {
        reuse_training_stats: cli.reuse_training_stats,
        ..PipelineConfig::default()
    };
    let evaluation = evaluate(&model, &frame, &config)?;
    println!("Final features: {:?}", evaluation.feature_names);

    println!("\n{}", "=".repeat(80));
    println!("HOUSE PRICE PREDICTIONS");
    println!("{}", "=".repeat(80));
    println!("\nShowing top {} predictions:", cli.top_n);
    println!("{}", "-".repeat(80));
    println!("{}", evaluation.render_top(cli.top_n));

    println!("\n{}", "=".repeat(80));
    println!("PREDICTION SUMMARY");
    println!("{}", "=".repeat(80));
    println!("{}", evaluation.summary);

    evaluation.write_csv(&cli.output)?;
    println!("\nResults saved to '{}'", cli.output.display());
    println!("\nEvaluation completed successfully!");
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
