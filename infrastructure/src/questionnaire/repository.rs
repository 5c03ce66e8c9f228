//! Questionnaire repository adapter
//!
//! Combines the built-in catalog with questionnaires loaded from files.
//! A file whose id matches an existing questionnaire replaces it.

use super::loader::QuestionnaireFileLoader;
use quiz_application::{QuestionnaireInfo, QuestionnaireRepository, RepositoryError};
use quiz_domain::{DomainError, Questionnaire, catalog};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Questionnaires available to the application, in listing order
#[derive(Debug, Clone)]
pub struct QuestionnaireCatalog {
    questionnaires: Vec<Questionnaire>,
    default_id: String,
}

impl QuestionnaireCatalog {
    /// Catalog holding only the built-in questionnaires
    pub fn builtin() -> Result<Self, DomainError> {
        Ok(Self {
            questionnaires: catalog::builtin()?,
            default_id: catalog::DEFAULT_ID.to_string(),
        })
    }

    /// Add a questionnaire, replacing any with the same id
    pub fn with_questionnaire(mut self, questionnaire: Questionnaire) -> Self {
        self.insert(questionnaire);
        self
    }

    /// Load every questionnaire file found in `dirs`
    pub fn with_dirs(mut self, dirs: &[PathBuf]) -> Self {
        let loader = QuestionnaireFileLoader::new();
        for dir in dirs {
            for questionnaire in loader.load_dir(dir) {
                self.insert(questionnaire);
            }
        }
        self
    }

    /// Select the default questionnaire
    pub fn with_default(mut self, id: &str) -> Result<Self, RepositoryError> {
        let resolved = self.get(id)?;
        self.default_id = resolved.id().to_string();
        Ok(self)
    }

    /// Ids in listing order
    pub fn ids(&self) -> Vec<String> {
        self.questionnaires
            .iter()
            .map(|q| q.id().to_string())
            .collect()
    }

    fn insert(&mut self, questionnaire: Questionnaire) {
        match self
            .questionnaires
            .iter_mut()
            .find(|q| q.id().eq_ignore_ascii_case(questionnaire.id()))
        {
            Some(existing) => {
                warn!(
                    "Questionnaire '{}' overridden by file definition",
                    existing.id()
                );
                *existing = questionnaire;
            }
            None => {
                debug!("Registered questionnaire '{}'", questionnaire.id());
                self.questionnaires.push(questionnaire);
            }
        }
    }

    fn find(&self, id: &str) -> Option<&Questionnaire> {
        self.questionnaires
            .iter()
            .find(|q| q.id().eq_ignore_ascii_case(id))
    }
}

impl QuestionnaireRepository for QuestionnaireCatalog {
    fn get(&self, id: &str) -> Result<Questionnaire, RepositoryError> {
        if let Some(questionnaire) = self.find(id) {
            return Ok(questionnaire.clone());
        }

        // Built-in aliases ("heart", "metabolism") resolve to the stored
        // entry so a file override still applies.
        catalog::find(id)
            .ok()
            .and_then(|builtin| self.find(builtin.id()).cloned())
            .ok_or_else(|| RepositoryError::NotFound {
                id: id.to_string(),
                available: self.ids().join(", "),
            })
    }

    fn list(&self) -> Vec<QuestionnaireInfo> {
        self.questionnaires
            .iter()
            .map(QuestionnaireInfo::from)
            .collect()
    }

    fn default_id(&self) -> &str {
        &self.default_id
    }
}
