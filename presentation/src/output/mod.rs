//! Output formatting for quiz outcomes

pub mod chart;
pub mod console;
pub mod formatter;
