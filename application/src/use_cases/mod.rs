//! Use cases (application services)
//!
//! - [`run_quiz`]: interactive, one command at a time
//! - [`score_answers`]: one-shot scoring of a prepared answer list

pub mod run_quiz;
pub mod score_answers;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ports::questionnaire_repository::{
        QuestionnaireInfo, QuestionnaireRepository, RepositoryError,
    };
    use quiz_domain::{Questionnaire, catalog};

    /// Repository backed by the built-in catalog only
    pub struct CatalogRepository;

    impl QuestionnaireRepository for CatalogRepository {
        fn get(&self, id: &str) -> Result<Questionnaire, RepositoryError> {
            catalog::find(id).map_err(|_| RepositoryError::NotFound {
                id: id.to_string(),
                available: "cardio, digestion".to_string(),
            })
        }

        fn list(&self) -> Vec<QuestionnaireInfo> {
            catalog::builtin()
                .unwrap()
                .iter()
                .map(QuestionnaireInfo::from)
                .collect()
        }

        fn default_id(&self) -> &str {
            catalog::DEFAULT_ID
        }
    }
}
