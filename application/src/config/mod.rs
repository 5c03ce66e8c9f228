//! Application-level configuration.
//!
//! - [`QuizParams`]: interaction flow control (answer guard, auto-advance)

pub mod quiz_params;

pub use quiz_params::QuizParams;
