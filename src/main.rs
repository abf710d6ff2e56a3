use clap::Parser;
use soundlib::command::catalog::{catalog_directory, CatalogOptions, Output, WriteMode};
use soundlib::{HierarchyBuilder, DEFAULT_INSTRUMENT, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Command line interface configuration
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Sound library directory to scan
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Output JSON file path ("-" for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Append to the output file instead of replacing it (repeated runs concatenate documents)
    #[arg(long)]
    append: bool,

    /// Order entries by file name instead of directory listing order
    #[arg(long)]
    sort: bool,

    /// Value of the Instrument field for every sample
    #[arg(long, default_value = DEFAULT_INSTRUMENT)]
    instrument: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// RUST_LOG wins over -v when set
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Main function: Parse CLI arguments, scan the directory and write the catalog
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let builder = HierarchyBuilder::new()
        .instrument(cli.instrument)
        .sorted(cli.sort);
    let options = CatalogOptions {
        output: Output::from_arg(&cli.output),
        mode: if cli.append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        },
    };

    match catalog_directory(&cli.directory, &builder, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
