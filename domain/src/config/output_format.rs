//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for quiz results
///
/// This is a domain concept representing how an outcome should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Responses, recommendation, meal plan and chart (default)
    #[default]
    Full,
    /// Score, tier and advice only
    Summary,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Valid: full, summary, json",
                s
            )),
        }
    }
}
