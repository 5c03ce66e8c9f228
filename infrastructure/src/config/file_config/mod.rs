//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod quiz;
mod repl;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use quiz::FileQuizConfig;
pub use repl::FileReplConfig;

use quiz_application::{QuestionnaireRepository, QuizParams};
use quiz_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Questionnaire selection and flow
    pub quiz: FileQuizConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration against the questionnaires a repository
    /// can resolve, returning all detected issues.
    ///
    /// Checks:
    /// 1. The default questionnaire id (or alias) resolves
    /// 2. Questionnaire directories are non-blank and exist
    pub fn validate<R: QuestionnaireRepository + ?Sized>(
        &self,
        repository: &R,
    ) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(id) = &self.quiz.default
            && repository.get(id).is_err()
        {
            let available: Vec<String> =
                repository.list().into_iter().map(|q| q.id).collect();
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnknownQuestionnaire { id: id.clone() },
                format!(
                    "quiz.default: unknown questionnaire '{}' (available: {})",
                    id,
                    available.join(", ")
                ),
            ));
        }

        issues.extend(self.quiz.resolved_dirs().1);

        issues
    }

    /// Flow parameters for the quiz controller
    pub fn quiz_params(&self) -> QuizParams {
        QuizParams::default()
            .with_require_answer(self.quiz.require_answer)
            .with_auto_advance(self.quiz.auto_advance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionnaireCatalog;
    use quiz_domain::{OutputFormat, Severity};

    fn known() -> QuestionnaireCatalog {
        QuestionnaireCatalog::builtin().unwrap()
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[quiz]
default = "digestion"
auto_advance = false

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/health-quiz/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.default.as_deref(), Some("digestion"));
        assert!(!config.quiz.auto_advance);
        assert!(config.quiz.require_answer);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
format = "summary"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.quiz.default.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.quiz.default.is_none());
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate(&known()).is_empty());
    }

    #[test]
    fn test_validate_unknown_default() {
        let mut config = FileConfig::default();
        config.quiz.default = Some("sleep".to_string());
        let issues = config.validate(&known());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("cardio, digestion"));
    }

    #[test]
    fn test_validate_default_is_case_insensitive() {
        let mut config = FileConfig::default();
        config.quiz.default = Some("Cardio".to_string());
        assert!(config.validate(&known()).is_empty());
    }

    #[test]
    fn test_validate_default_alias() {
        let mut config = FileConfig::default();
        config.quiz.default = Some("heart".to_string());
        assert!(config.validate(&known()).is_empty());

        config.quiz.default = Some("metabolism".to_string());
        assert!(config.validate(&known()).is_empty());
    }

    #[test]
    fn test_quiz_params() {
        let mut config = FileConfig::default();
        config.quiz.require_answer = false;
        let params = config.quiz_params();
        assert!(!params.require_answer);
        assert!(params.auto_advance);
    }
}
