//! CLI command definitions and handlers

mod analyze;
mod init;
mod models;
mod watch;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docscore::config::{load_config, load_config_file, AnalyzerConfig};
use std::path::{Path, PathBuf};

/// Parse and validate a percentage threshold (0-100)
fn parse_percent(s: &str) -> Result<f64, String> {
    let pct: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if (0.0..=100.0).contains(&pct) {
        Ok(pct)
    } else {
        Err("percentage must be between 0 and 100".to_string())
    }
}

/// docscore - Heuristic document scoring
#[derive(Parser, Debug)]
#[command(name = "docscore")]
#[command(
    version,
    about = "Extract text from PDF documents and score structure, features, spelling and format",
    after_help = "\
Examples:
  docscore analyze manual.pdf                   Analyze a PDF
  docscore analyze manual.pdf --format json     JSON output for scripting
  docscore analyze notes.txt --fail-under 50    Exit code 1 if any score is below 50%
  docscore watch draft.pdf                      Re-analyze on every save
  docscore models                               Show the model registry"
)]
pub struct Cli {
    /// Config file (default: ./docscore.toml, ./.docscorerc.json, then user config)
    #[arg(long, short = 'c', global = true, env = "DOCSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a docscore.toml config file with example settings
    Init,

    /// Analyze a document and print its report
    #[command(after_help = "\
Examples:
  docscore analyze manual.pdf                          Terminal report
  docscore analyze manual.pdf -f markdown -o report.md Markdown report to a file
  docscore analyze README.md                           Plain text is read as one page
  docscore analyze manual.pdf --fail-under 80          CI mode")]
    Analyze {
        /// Document to analyze (.txt, .text and .md are read as plain text, anything else as PDF)
        file: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if any score is below this percentage
        #[arg(long, value_parser = parse_percent)]
        fail_under: Option<f64>,

        /// Hide the progress spinner
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Watch a document and re-analyze it on every change
    Watch {
        /// Document to watch
        file: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,
    },

    /// List scorers, the model registry and the known-mistakes dictionary
    Models,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(&std::env::current_dir()?),

        Commands::Analyze {
            file,
            format,
            output,
            fail_under,
            quiet,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            let format = format
                .or_else(|| config.defaults.format.clone())
                .unwrap_or_else(|| "text".to_string());
            let fail_under = fail_under.or(config.defaults.fail_under);
            analyze::run(config, &file, &format, output.as_deref(), fail_under, quiet)
        }

        Commands::Watch { file, format } => {
            let config = resolve_config(cli.config.as_deref())?;
            let format = format
                .or_else(|| config.defaults.format.clone())
                .unwrap_or_else(|| "text".to_string());
            watch::run(config, &file, &format)
        }

        Commands::Models => {
            let config = resolve_config(cli.config.as_deref())?;
            models::run(&config)
        }
    }
}

/// An explicit config path must load; discovered configs fall back to defaults
fn resolve_config(explicit: Option<&Path>) -> Result<AnalyzerConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            Ok(load_config(&cwd))
        }
    }
}
