//! Infrastructure layer for health-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading and
//! questionnaire files.

pub mod config;
pub mod questionnaire;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileOutputConfig, FileOutputFormat, FileQuizConfig, FileReplConfig,
};
pub use questionnaire::{
    FileQuestionnaire, QuestionnaireCatalog, QuestionnaireFileError, QuestionnaireFileLoader,
};
