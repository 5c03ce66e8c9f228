//! Questionnaire file loader
//!
//! Reads `*.toml` questionnaire definitions from disk. A directory scan
//! skips files that fail to load and logs them, so one broken file never
//! hides the others.

use super::file_format::FileQuestionnaire;
use quiz_domain::{DomainError, Questionnaire};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a single questionnaire file
#[derive(Error, Debug)]
pub enum QuestionnaireFileError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid questionnaire in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Loads questionnaires from TOML files
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireFileLoader;

impl QuestionnaireFileLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse and validate a single file
    pub fn load_file(&self, path: &Path) -> Result<Questionnaire, QuestionnaireFileError> {
        let content = fs::read_to_string(path).map_err(|source| QuestionnaireFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: FileQuestionnaire =
            toml::from_str(&content).map_err(|source| QuestionnaireFileError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        file.into_questionnaire()
            .map_err(|source| QuestionnaireFileError::Invalid {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load every `*.toml` file in a directory, sorted by file name
    pub fn load_dir(&self, dir: &Path) -> Vec<Questionnaire> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read questionnaire directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        paths
            .iter()
            .filter_map(|path| match self.load_file(path) {
                Ok(questionnaire) => {
                    debug!(
                        "Loaded questionnaire '{}' from {}",
                        questionnaire.id(),
                        path.display()
                    );
                    Some(questionnaire)
                }
                Err(e) => {
                    warn!("Skipping questionnaire file: {}", e);
                    None
                }
            })
            .collect()
    }
}
