//! Configuration file loading for health-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./health-quiz.toml` or `./.health-quiz.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/health-quiz/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileOutputConfig, FileOutputFormat, FileQuizConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
