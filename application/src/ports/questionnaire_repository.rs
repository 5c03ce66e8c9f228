//! Questionnaire repository port
//!
//! Defines where questionnaires come from. The infrastructure layer provides
//! an adapter combining the built-in catalog with user-authored files.

use quiz_domain::{DomainError, Questionnaire};
use thiserror::Error;

/// Errors that can occur while looking up questionnaires
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Unknown questionnaire '{id}'. Available: {available}")]
    NotFound { id: String, available: String },

    #[error("Questionnaire '{id}' is invalid: {source}")]
    Invalid {
        id: String,
        #[source]
        source: DomainError,
    },
}

/// Short description of a questionnaire for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireInfo {
    pub id: String,
    pub title: String,
    pub question_count: usize,
    pub max_score: u32,
}

impl From<&Questionnaire> for QuestionnaireInfo {
    fn from(q: &Questionnaire) -> Self {
        Self {
            id: q.id().to_string(),
            title: q.title().to_string(),
            question_count: q.len(),
            max_score: q.max_score(),
        }
    }
}

/// Source of questionnaires
pub trait QuestionnaireRepository: Send + Sync {
    /// Look up a questionnaire by id
    fn get(&self, id: &str) -> Result<Questionnaire, RepositoryError>;

    /// All available questionnaires, in listing order
    fn list(&self) -> Vec<QuestionnaireInfo>;

    /// Id used when the caller does not pick one
    fn default_id(&self) -> &str;
}
