//! Core domain concepts shared across all subdomains.
//!
//! - [`answer::Answer`]: a yes/no/unsure reply
//! - [`answer_set::AnswerSet`]: one optional answer per question
//! - [`question::Question`]: a question together with its scoring rule
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod answer_set;
pub mod error;
pub mod question;
