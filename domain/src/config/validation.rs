//! Structured configuration issues.
//!
//! Config sections report problems as [`ConfigIssue`] values instead of
//! failing on the first one, so every issue can be shown at startup.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// The configured default questionnaire does not exist.
    UnknownQuestionnaire { id: String },
    /// A questionnaire directory entry is blank.
    EmptyPath { field: String },
    /// A questionnaire directory does not exist.
    MissingDirectory { path: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::UnknownQuestionnaire {
                id: "sleep".to_string(),
            },
            "unknown",
        );
        assert!(issue.is_error());

        let issue = ConfigIssue::warning(
            ConfigIssueCode::EmptyPath {
                field: "quiz.questionnaire_dirs".to_string(),
            },
            "blank",
        );
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!issue.is_error());
    }
}
