//! Progress reporting for quiz sessions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quiz_application::QuizProgressNotifier;
use quiz_domain::{Answer, Questionnaire, QuizOutcome};
use std::sync::Mutex;

/// Reports progress with a bar redrawn above each question
///
/// Each step draws a fresh bar and abandons it, so the bar stays in the
/// scrollback above the question it belongs to and never redraws over
/// REPL output.
pub struct ProgressReporter {
    title: Mutex<String>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            title: Mutex::new(String::new()),
        }
    }

    fn step_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressNotifier for ProgressReporter {
    fn on_quiz_start(&self, questionnaire: &Questionnaire) {
        *self.title.lock().unwrap() = questionnaire.title().to_string();
    }

    fn on_step(&self, step: usize, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::step_style());
        pb.set_prefix(self.title.lock().unwrap().clone());
        pb.set_position(step as u64);
        pb.abandon_with_message(format!("{} answered", step));
    }

    fn on_complete(&self, outcome: &QuizOutcome) {
        let pb = ProgressBar::new(outcome.responses.len() as u64);
        pb.set_style(Self::step_style());
        pb.set_prefix(outcome.title.clone());
        pb.set_position(outcome.responses.len() as u64);
        pb.finish_with_message(format!("{}", "complete!".green()));
    }

    fn on_reset(&self) {
        println!("{} {}", "->".cyan(), "Starting over".bold());
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl QuizProgressNotifier for SimpleProgress {
    fn on_quiz_start(&self, questionnaire: &Questionnaire) {
        println!(
            "{} {} ({} questions)",
            "->".cyan(),
            questionnaire.title().bold(),
            questionnaire.len()
        );
    }

    fn on_step(&self, _step: usize, _total: usize) {}

    fn on_answer(&self, step: usize, answer: Answer) {
        println!("  {} [{}] {}", "v".green(), step + 1, answer);
    }

    fn on_complete(&self, outcome: &QuizOutcome) {
        println!(
            "{} {} complete ({} / {})",
            "->".cyan(),
            outcome.title.bold(),
            outcome.score,
            outcome.max_score
        );
    }

    fn on_reset(&self) {
        println!("{} {}", "->".cyan(), "Starting over".bold());
    }
}
