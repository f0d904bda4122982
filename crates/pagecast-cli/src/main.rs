mod commands;
mod output;

use clap::{Parser, Subcommand};
use pagecast_core::config::{load_config, ConvertConfig};
use pagecast_core::error::ConvertError;
use pagecast_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pagecast",
    version,
    about = "Rebuild reading-order text and table rows from PDF page layout"
)]
struct Cli {
    /// JSON config file with layout thresholds and report labels
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the reconstructed reading-order text
    Text {
        /// Path to PDF or JSON text-item dump
        input_file: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Print the detected table rows
    Rows {
        /// Path to PDF or JSON text-item dump
        input_file: PathBuf,

        /// Output format: table (default), json, or sheet (cells with styles)
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Convert to an RTF word-processor document
    Word {
        /// Path to PDF or JSON text-item dump
        input_file: PathBuf,

        /// Output file (default: input file with .rtf extension)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Convert to a spreadsheet CSV
    Excel {
        /// Path to PDF or JSON text-item dump
        input_file: PathBuf,

        /// Classify each text line instead of emitting grouped rows
        #[arg(long)]
        report: bool,

        /// Output file (default: input file with .csv extension)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn load(config: Option<PathBuf>) -> Result<ConvertConfig, ConvertError> {
    match config {
        Some(path) => load_config(&path),
        None => Ok(ConvertConfig::default()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match load(cli.config) {
        Err(e) => Err(e),
        Ok(config) => match cli.command {
            Commands::Text { input_file, output } => {
                commands::text::run(input_file, &output, &config).await
            }
            Commands::Rows { input_file, output } => {
                commands::rows::run(input_file, &output, &config).await
            }
            Commands::Word { input_file, out } => {
                commands::convert::run(input_file, OutputFormat::Word, out, &config).await
            }
            Commands::Excel {
                input_file,
                report,
                out,
            } => {
                let format = if report {
                    OutputFormat::ExcelReport
                } else {
                    OutputFormat::Excel
                };
                commands::convert::run(input_file, format, out, &config).await
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
