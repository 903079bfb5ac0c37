//! geno: segment and signal statistics
//!
//! Usage: geno <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;

use geno::commands::{CorrelationCommand, OverlapCommand, SegmentMeanCommand};
use geno::output::FloatFormat;
use geno::GenoError;

#[derive(Parser)]
#[command(name = "geno")]
#[command(version)]
#[command(about = "Overlap, correlation and segment means for segment (.s) and function (.f) files", long_about = None)]
struct Cli {
    /// Print a one-line summary of the inputs to stderr
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total overlap length between two segment files
    Overlap {
        /// Segment file A (.s)
        #[arg(short = 'a', long)]
        file_a: PathBuf,

        /// Segment file B (.s)
        #[arg(short = 'b', long)]
        file_b: PathBuf,
    },

    /// Pearson correlation between two function files
    #[command(alias = "corr")]
    Correlation {
        /// Function file A (.f)
        #[arg(short = 'a', long)]
        file_a: PathBuf,

        /// Function file B (.f)
        #[arg(short = 'b', long)]
        file_b: PathBuf,

        /// Print the result with this many decimal places
        #[arg(short, long)]
        precision: Option<usize>,
    },

    /// Mean function value over the positions covered by a segment file
    Mean {
        /// Segment file (.s)
        #[arg(short = 's', long)]
        segments: PathBuf,

        /// Function file (.f)
        #[arg(short = 'f', long)]
        function: PathBuf,

        /// Print the result with this many decimal places
        #[arg(short, long)]
        precision: Option<usize>,
    },
}

fn float_format(precision: Option<usize>) -> FloatFormat {
    precision.map_or(FloatFormat::Shortest, FloatFormat::Fixed)
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Overlap { file_a, file_b } => run_overlap(file_a, file_b, cli.stats),
        Commands::Correlation {
            file_a,
            file_b,
            precision,
        } => run_correlation(file_a, file_b, precision, cli.stats),
        Commands::Mean {
            segments,
            function,
            precision,
        } => run_mean(segments, function, precision, cli.stats),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_overlap(file_a: PathBuf, file_b: PathBuf, stats: bool) -> Result<(), GenoError> {
    let cmd = OverlapCommand::new();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let result = cmd.run(file_a, file_b, &mut handle)?;
    if stats {
        eprintln!("Overlap stats: {}", result);
    }
    Ok(())
}

fn run_correlation(
    file_a: PathBuf,
    file_b: PathBuf,
    precision: Option<usize>,
    stats: bool,
) -> Result<(), GenoError> {
    let cmd = CorrelationCommand::new().with_float_format(float_format(precision));

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let result = cmd.run(file_a, file_b, &mut handle)?;
    if stats {
        eprintln!("Correlation stats: {}", result);
    }
    Ok(())
}

fn run_mean(
    segments: PathBuf,
    function: PathBuf,
    precision: Option<usize>,
    stats: bool,
) -> Result<(), GenoError> {
    let cmd = SegmentMeanCommand::new().with_float_format(float_format(precision));

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let result = cmd.run(segments, function, &mut handle)?;
    if stats {
        eprintln!("Segment mean stats: {}", result);
    }
    Ok(())
}
