//! CLI command definitions

use clap::{Parser, ValueEnum};
use quiz_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Answers, recommendation, meal plan and risk chart
    Full,
    /// Score, risk level and advice only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Summary => OutputFormat::Summary,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for health-quiz
#[derive(Parser, Debug)]
#[command(name = "health-quiz")]
#[command(author, version, about = "Health risk self-assessment quiz")]
#[command(long_about = r#"
Health Quiz walks you through a short yes/no/unsure questionnaire and shows
your risk factors, a risk level, and lifestyle suggestions for that level.

Every answer of "Unsure" counts the same as a risk answer.

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./health-quiz.toml or ./.health-quiz.toml Project-level config
3. ~/.config/health-quiz/config.toml        Global config

Example:
  health-quiz
  health-quiz -Q digestion
  health-quiz --answers yes,no,unsure,no,... -o summary
  health-quiz --list

This quiz is for educational purposes only and does not provide medical advice.
"#)]
pub struct Cli {
    /// Questionnaire to take (see --list)
    #[arg(short = 'Q', long, value_name = "ID")]
    pub questionnaire: Option<String>,

    /// List available questionnaires and exit
    #[arg(long)]
    pub list: bool,

    /// Score a comma-separated answer list (yes,no,unsure,-) without prompting
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    pub answers: Option<String>,

    /// Output format (defaults to the configured format, then "full")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Additional questionnaire definition file (can be specified multiple times)
    #[arg(short, long, value_name = "PATH")]
    pub file: Vec<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip global and project configuration files (--config is still read)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
