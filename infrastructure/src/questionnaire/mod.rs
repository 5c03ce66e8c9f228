//! Questionnaire sources: TOML files and the combined catalog

mod file_format;
mod loader;
mod repository;

pub use file_format::{FileQuestion, FileQuestionnaire, FileTier};
pub use loader::{QuestionnaireFileError, QuestionnaireFileLoader};
pub use repository::QuestionnaireCatalog;
