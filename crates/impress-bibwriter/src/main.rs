//! impress-bibwriter command line
//!
//! # Usage
//!
//! ```bash
//! # Encode a value for a field
//! impress-bibwriter write --field month '#jan# - #feb#'
//!
//! # Values can come from stdin (read verbatim, trailing newline included)
//! printf 'Some {Title}' | impress-bibwriter write --field title
//!
//! # Check brace balance only
//! impress-bibwriter check '{\}'
//!
//! # Show how a value is split into literals and macro references
//! impress-bibwriter segments --field month '#jan# 1'
//!
//! # Dump the default preferences as a starting config file
//! impress-bibwriter config > bibwriter.toml
//! ```

use std::error::Error;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use impress_bibwriter::{check_braces, Field, FieldPreferences, FieldWriter};

#[derive(Parser)]
#[command(name = "impress-bibwriter")]
#[command(version)]
#[command(about = "Write BibTeX field values exactly as they are saved in a .bib file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Preferences file (.toml or .json); built-in defaults when omitted
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode one field value
    Write {
        /// Field name, e.g. title or month
        #[arg(short, long)]
        field: String,

        /// Raw value (reads stdin if not provided)
        value: Option<String>,
    },

    /// Check that a value's braces balance
    Check {
        /// Raw value (reads stdin if not provided)
        value: Option<String>,
    },

    /// Print the literal and macro-reference segments of a value as JSON
    Segments {
        /// Field name, e.g. month
        #[arg(short, long)]
        field: String,

        /// Raw value (reads stdin if not provided)
        value: Option<String>,
    },

    /// Print the effective preferences as TOML
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let preferences = match &cli.config {
        Some(path) => load_preferences(path)?,
        None => FieldPreferences::default(),
    };
    let writer = FieldWriter::new(preferences);

    match cli.command {
        Commands::Write { field, value } => {
            let value = read_value(value)?;
            match writer.write(&Field::from_str(&field), &value) {
                Ok(written) => {
                    println!("{}", written);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Check { value } => {
            let value = read_value(value)?;
            match check_braces(&value) {
                Ok(()) => {
                    println!("balanced");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    println!("{}", e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Segments { field, value } => {
            let value = read_value(value)?;
            match writer.segments(&Field::from_str(&field), &value) {
                Ok(segments) => {
                    println!("{}", serde_json::to_string_pretty(&segments)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Config => {
            print!("{}", writer.preferences().to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load preferences, picking the format from the file extension
fn load_preferences(path: &Path) -> Result<FieldPreferences, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)?;
    let preferences = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => FieldPreferences::from_json(&contents)?,
        _ => FieldPreferences::from_toml(&contents)?,
    };
    preferences.validate()?;
    tracing::debug!(?path, ?preferences, "loaded preferences");
    Ok(preferences)
}

fn read_value(value: Option<String>) -> io::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
