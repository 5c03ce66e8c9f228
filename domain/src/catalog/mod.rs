//! Built-in questionnaires
//!
//! Each module declares its questions, weights, thresholds and advice as
//! data. Adding a question set means adding a module here (or a TOML file
//! loaded by the infrastructure layer), never touching the engine.
//!
//! | id          | questions | max score | thresholds (low / moderate) |
//! |-------------|-----------|-----------|-----------------------------|
//! | `cardio`    | 20        | 20        | ≤3 / ≤8                     |
//! | `digestion` | 11        | 13        | ≤2 / ≤5                     |

pub mod cardio;
pub mod digestion;

use crate::core::error::DomainError;
use crate::questionnaire::Questionnaire;

/// Identifier of the questionnaire used when none is selected
pub const DEFAULT_ID: &str = cardio::ID;

/// All built-in questionnaires, default first
pub fn builtin() -> Result<Vec<Questionnaire>, DomainError> {
    Ok(vec![cardio::questionnaire()?, digestion::questionnaire()?])
}

/// Look up a built-in questionnaire by id (case-insensitive)
pub fn find(id: &str) -> Result<Questionnaire, DomainError> {
    match id.to_lowercase().as_str() {
        cardio::ID | "cardiovascular" | "heart" => cardio::questionnaire(),
        digestion::ID | "metabolism" => digestion::questionnaire(),
        _ => Err(DomainError::UnknownQuestionnaire(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let all = builtin().unwrap();
        assert_eq!(all[0].id(), DEFAULT_ID);
        let mut ids: Vec<_> = all.iter().map(|q| q.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("cardio").unwrap().id(), "cardio");
        assert_eq!(find("Heart").unwrap().id(), "cardio");
        assert_eq!(find("digestion").unwrap().id(), "digestion");
        assert_eq!(
            find("sleep").unwrap_err(),
            DomainError::UnknownQuestionnaire("sleep".to_string())
        );
    }

    #[test]
    fn test_scales_are_independent() {
        let cardio = cardio::questionnaire().unwrap();
        let digestion = digestion::questionnaire().unwrap();
        assert_ne!(cardio.thresholds(), digestion.thresholds());
        assert_eq!(cardio.thresholds().classify(4).rank(), 1);
        assert_eq!(digestion.thresholds().classify(4).rank(), 1);
        assert_eq!(cardio.thresholds().classify(6).rank(), 1);
        assert_eq!(digestion.thresholds().classify(6).rank(), 2);
    }
}
