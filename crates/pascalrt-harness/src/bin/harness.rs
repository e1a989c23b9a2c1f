//! CLI entrypoint for the pascalrt tooling.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pascalrt_harness::HarnessError;
use pascalrt_harness::nasm_include::{IncludeOptions, render_include};
use pascalrt_harness::structured_log::validate_trace_file;
use pascalrt_harness::symbols;

/// Tooling for the Pascal runtime library.
#[derive(Debug, Parser)]
#[command(name = "pascalrt-harness")]
#[command(about = "Symbol manifest, include generation and trace validation for pascalrt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every runtime entry point with its C signature.
    Symbols {
        /// Output format: `plain` (default) or `json`.
        #[arg(long, default_value = "plain")]
        format: String,
    },
    /// Write the NASM include that compiled programs pull in.
    GenInclude {
        /// Output path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Prefix symbols with `_` (32-bit Windows, Mach-O).
        #[arg(long)]
        underscore: bool,
    },
    /// Validate a runtime trace file (`PASCALRT_TRACE_FILE` output).
    ValidateTrace {
        /// Structured JSONL log path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn write_output(output: Option<PathBuf>, text: &str) -> Result<(), HarnessError> {
    match output {
        Some(path) => std::fs::write(&path, text).map_err(|e| HarnessError::io(path, e)),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn run(cli: Cli) -> Result<(), HarnessError> {
    match cli.command {
        Command::Symbols { format } => {
            let text = match format.as_str() {
                "plain" => symbols::render_plain(),
                "json" => symbols::render_json()? + "\n",
                other => return Err(HarnessError::UnknownFormat(other.to_string())),
            };
            write_output(None, &text)
        }
        Command::GenInclude { output, underscore } => {
            let text = render_include(IncludeOptions { underscore });
            let written = output.clone();
            write_output(output, &text)?;
            if let Some(path) = written {
                eprintln!("wrote {}", path.display());
            }
            Ok(())
        }
        Command::ValidateTrace { log } => {
            let report = validate_trace_file(&log)?;
            for err in &report.errors {
                eprintln!("{err}");
            }
            if report.is_valid() {
                println!("{}: {} lines valid", log.display(), report.total_lines);
                Ok(())
            } else {
                Err(HarnessError::InvalidTrace {
                    invalid: report.invalid_lines(),
                    total: report.total_lines,
                })
            }
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
