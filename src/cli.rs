//! CLI interface for the candidate scorer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "candidate-scorer")]
#[command(about = "Multi-criteria candidate profile assessment tool")]
#[command(
    long_about = "Score a structured candidate profile across education, experience, skills, and languages, rank fit against a fixed role catalog, and generate improvement recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Scoring configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a candidate record
    Analyze {
        /// Path to the structured candidate record (JSON)
        #[arg(short = 'i', long)]
        candidate: PathBuf,

        /// Directory with reference table overrides (TOML)
        #[arg(short, long)]
        reference_dir: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,

        /// Persist the assessment into this directory
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Identifier for the persisted assessment (defaults to the input
        /// file stem)
        #[arg(long)]
        id: Option<String>,
    },

    /// Show or manage the scoring configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::output::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::output::OutputFormat::Console),
        "json" => Ok(crate::output::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}
