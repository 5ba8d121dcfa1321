use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use workout_core::*;

#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(about = "Workout distance, speed and calorie calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (text, json); overrides the config file
    #[arg(long, global = true)]
    format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the three reference workouts (default)
    Demo,

    /// Report every record of a delimited file
    Report {
        /// Input file, or `-` for stdin
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    workout_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = match &cli.format {
        Some(format) => format.parse::<OutputFormat>()?,
        None => config.output.format,
    };

    let outcomes = match cli.command {
        Some(Commands::Report { input }) => {
            let records = if input.as_os_str() == "-" {
                read_records(io::stdin().lock(), &config.input)?
            } else {
                read_records_from_path(&input, &config.input)?
            };
            process_records(&records)?
        }
        Some(Commands::Demo) | None => process_packages(&demo_packages())?,
    };

    tracing::info!("Processed {} records", outcomes.len());
    print_outcomes(&outcomes, format)
}

fn print_outcomes(outcomes: &[RecordOutcome], format: OutputFormat) -> Result<()> {
    let mut skipped = 0;

    for outcome in outcomes {
        match outcome {
            RecordOutcome::Reported { summary, .. } => {
                println!("{}", render(summary, format)?);
            }
            RecordOutcome::Skipped {
                line,
                record,
                error,
            } => {
                skipped += 1;
                eprintln!("Skipped record {} [{}]: {}", line, record, error);
            }
        }
    }

    if skipped > 0 {
        eprintln!("{} of {} records skipped", skipped, outcomes.len());
    }

    Ok(())
}
