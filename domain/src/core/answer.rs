//! Answer value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A respondent's reply to one question (Value Object)
///
/// An unanswered question is represented as `None` in an `Option<Answer>`,
/// never as a variant of this enum.
///
/// # Example
///
/// ```
/// use quiz_domain::Answer;
///
/// let answer: Answer = "y".parse().unwrap();
/// assert_eq!(answer, Answer::Yes);
/// assert_eq!(Answer::Unsure.to_string(), "Unsure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Unsure,
}

impl Answer {
    /// All answers in display order
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Unsure];

    /// Lowercase identifier used in input and serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Unsure => "unsure",
        }
    }

    /// Capitalised label for display
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::Unsure => "Unsure",
        }
    }

    /// Label for a possibly-missing answer
    pub fn label_or_missing(answer: Option<Answer>) -> &'static str {
        answer.map(|a| a.label()).unwrap_or("No answer")
    }

    /// Parse an optional answer, where `-` or an empty string means unanswered
    pub fn parse_optional(s: &str) -> Result<Option<Answer>, DomainError> {
        match s.trim() {
            "" | "-" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Answer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            "unsure" | "u" | "?" => Ok(Answer::Unsure),
            other => Err(DomainError::InvalidAnswer(format!(
                "'{}' (expected yes, no or unsure)",
                other
            ))),
        }
    }
}
