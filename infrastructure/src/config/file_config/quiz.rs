//! Quiz selection configuration from TOML (`[quiz]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw quiz configuration from TOML
///
/// # Example
///
/// ```toml
/// [quiz]
/// default = "digestion"
/// questionnaire_dirs = ["./quizzes", "~/.config/health-quiz/quizzes"]
/// require_answer = true
/// auto_advance = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Questionnaire id used when none is given on the command line
    pub default: Option<String>,
    /// Directories scanned for `*.toml` questionnaire definitions
    pub questionnaire_dirs: Vec<String>,
    /// Refuse to advance until the current question is answered
    pub require_answer: bool,
    /// Move to the next question as soon as an answer is given
    pub auto_advance: bool,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            default: None,
            questionnaire_dirs: vec![],
            require_answer: true,
            auto_advance: true,
        }
    }
}

impl FileQuizConfig {
    /// Expand `~/` and drop blank entries, collecting issues for them
    pub fn resolved_dirs(&self) -> (Vec<PathBuf>, Vec<ConfigIssue>) {
        let mut dirs_out = Vec::new();
        let mut issues = Vec::new();

        for entry in &self.questionnaire_dirs {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyPath {
                        field: "quiz.questionnaire_dirs".to_string(),
                    },
                    "quiz.questionnaire_dirs: empty entry ignored",
                ));
                continue;
            }

            let path = expand_home(trimmed);
            if !path.is_dir() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::MissingDirectory {
                        path: path.display().to_string(),
                    },
                    format!(
                        "quiz.questionnaire_dirs: '{}' is not a directory",
                        path.display()
                    ),
                ));
                continue;
            }
            dirs_out.push(path);
        }

        (dirs_out, issues)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| Path::new(path).to_path_buf()),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileQuizConfig::default();
        assert!(config.default.is_none());
        assert!(config.questionnaire_dirs.is_empty());
        assert!(config.require_answer);
        assert!(config.auto_advance);
    }

    #[test]
    fn test_resolved_dirs_reports_blank_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileQuizConfig {
            questionnaire_dirs: vec![
                dir.path().display().to_string(),
                "  ".to_string(),
                dir.path().join("missing").display().to_string(),
            ],
            ..Default::default()
        };

        let (dirs, issues) = config.resolved_dirs();
        assert_eq!(dirs, vec![dir.path().to_path_buf()]);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0].code, ConfigIssueCode::EmptyPath { .. }));
        assert!(matches!(
            issues[1].code,
            ConfigIssueCode::MissingDirectory { .. }
        ));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("./quizzes"), PathBuf::from("./quizzes"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/quizzes"), home.join("quizzes"));
        }
    }
}
