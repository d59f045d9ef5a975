use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pdftext::extraction::panic_message;
use pdftext::{extract_pdf_text, logging, write_banner_text, write_output_file, PdfExtractor};
use tracing::{debug, error};

/// Extract text from PDF files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the PDF file
    input_file: PathBuf,

    /// Path to the output text file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match panic::catch_unwind(|| run(&cli)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            eprintln!("Unhandled error: {err}");
            eprintln!("{err:?}");
            ExitCode::from(1)
        }
        Err(payload) => {
            eprintln!("Unhandled error: {}", panic_message(payload.as_ref()));
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    logging::init()?;
    debug!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let text = extract_pdf_text(&cli.input_file, &PdfExtractor).render();

    let stdout = io::stdout();
    match &cli.output {
        Some(output_path) => match write_output_file(output_path, &text) {
            Ok(()) => {
                writeln!(
                    stdout.lock(),
                    "Text extracted and saved to '{}'",
                    output_path.display()
                )
                .context("failed to write to stdout")?;
            }
            // Reported, but not fatal: the exit code stays 0.
            Err(err) => {
                eprintln!("Error writing to output file: {err:#}");
                error!(error = ?err, "failed to write output file");
            }
        },
        None => {
            write_banner_text(stdout.lock(), &text)
                .context("failed to write extracted text to stdout")?;
        }
    }

    Ok(())
}
