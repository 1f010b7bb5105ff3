use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use workout_pdf::inspect;
use workout_pdf::{generate_workout_pdf, GeneratorConfig, WorkoutPlan};

/// Writes the sample workout PDF used to exercise the routine importer.
///
/// Without arguments the document lands in `examples/test-workout.pdf` under
/// the project root. `WORKOUT_PDF_PROJECT_ROOT` and `WORKOUT_PDF_OUTPUT`
/// override the location; `--output` overrides both.
///
/// The project root defaults to the source checkout the binary was built
/// from, so an installed binary should be given `WORKOUT_PDF_PROJECT_ROOT`
/// or `--output`.
///
/// Logs go to stderr at `warn` by default; set `RUST_LOG=info` to see the
/// `--verify` page and line counts.
#[derive(Parser)]
#[command(author, version, about = "Generate the sample workout PDF")]
struct Cli {
    /// Write the document to this path instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Re-read the written file and check its page count and text.
    #[arg(long)]
    verify: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = GeneratorConfig::from_env().with_output_override(cli.output);

    let path = generate_workout_pdf(config.output_path())?;

    if cli.verify {
        let summary = inspect::inspect_file(&path)?;
        inspect::verify_plan(&summary, &WorkoutPlan::sample())?;
        info!(
            "Verified {}: {} page, {} lines",
            path.display(),
            summary.page_count,
            summary.lines().len()
        );
    }

    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
