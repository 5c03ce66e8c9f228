//! REPL (Read-Eval-Print Loop) for taking a quiz interactively

use crate::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use quiz_application::{QuizController, QuizError, QuizEvent};
use quiz_domain::{Answer, OutputFormat};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::debug;

/// What the loop should do after a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive quiz REPL
pub struct QuizRepl {
    controller: QuizController,
    format: OutputFormat,
    history_path: Option<PathBuf>,
    /// Step whose question was last printed
    shown: Option<usize>,
}

impl QuizRepl {
    /// Create a new QuizRepl around a started quiz
    pub fn new(controller: QuizController) -> Self {
        Self {
            controller,
            format: OutputFormat::Full,
            history_path: None,
            shown: None,
        }
    }

    /// Set the format used for the result
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the history file
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.controller.begin();

        loop {
            let prompt = if self.controller.is_completed() {
                "done> "
            } else {
                self.show_question();
                "> "
            };

            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    let flow = if line.starts_with('/') {
                        self.handle_command(line)
                    } else {
                        self.handle_answer(line);
                        Flow::Continue
                    };
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        let questionnaire = self.controller.questionnaire();
        let title = format!("{:^45}", questionnaire.title());
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│{}│", title.bold());
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if !questionnaire.description().is_empty() {
            println!("{}", questionnaire.description());
            println!();
        }
        println!(
            "{} questions. Answer each with yes (y), no (n) or unsure (u).",
            questionnaire.len()
        );
        println!("{}", "Unsure answers count as risk factors.".dimmed());
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /next     - Go to the next question");
        println!("  /back     - Go to the previous question");
        println!("  /reset    - Clear all answers and start over");
        println!("  /retake   - Take the quiz again after finishing");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit");
        println!();
    }

    fn show_question(&mut self) {
        let Some((step, question)) = self.controller.current_question() else {
            return;
        };
        if self.shown == Some(step) {
            return;
        }

        println!();
        println!(
            "{} {}",
            format!("Question {}/{}", step + 1, self.controller.questionnaire().len())
                .cyan()
                .bold(),
            format!("({})", question.category().display_name()).dimmed()
        );
        println!("{}", question.text());
        if let Some(answer) = self.controller.session().current_answer() {
            println!("{} {}", "Current answer:".dimmed(), answer);
        }
        self.shown = Some(step);
    }

    /// Handle slash commands
    fn handle_command(&mut self, cmd: &str) -> Flow {
        debug!("REPL command: {}", cmd);
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                Flow::Quit
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_commands();
                Flow::Continue
            }
            "/next" | "/n" => {
                let event = self.controller.next();
                self.report(event);
                Flow::Continue
            }
            "/back" | "/b" if self.controller.is_completed() => {
                self.report(Err(QuizError::AlreadyCompleted));
                Flow::Continue
            }
            "/back" | "/b" => {
                let event = self.controller.previous();
                self.report(Ok(event));
                Flow::Continue
            }
            "/reset" | "/retake" => {
                let event = self.controller.reset();
                self.report(Ok(event));
                Flow::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                Flow::Continue
            }
        }
    }

    fn handle_answer(&mut self, line: &str) {
        if self.controller.is_completed() {
            println!("The quiz is finished. Type /retake to start again or /quit to exit.");
            return;
        }

        match line.parse::<Answer>() {
            Ok(answer) => {
                let event = self.controller.answer(answer);
                self.report(event);
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    fn report(&mut self, event: Result<QuizEvent, QuizError>) {
        match event {
            Ok(QuizEvent::Recorded { answer, .. }) => {
                println!("{} {}", "Recorded:".green(), answer);
            }
            Ok(QuizEvent::Moved { .. }) => {}
            Ok(QuizEvent::Stayed { .. }) => {
                println!("{}", "Already at the first question.".dimmed());
            }
            Ok(QuizEvent::Completed(outcome)) => {
                println!();
                println!("{}", ConsoleFormatter.render(&outcome, self.format));
                println!("Type /retake to start again or /quit to exit.");
            }
            Ok(QuizEvent::Reset) => {
                self.shown = None;
            }
            Err(QuizError::Unanswered { .. }) => {
                println!(
                    "{}",
                    "Please answer this question before moving on.".yellow()
                );
            }
            Err(QuizError::AlreadyCompleted) => {
                println!("The quiz is finished. Type /retake to start again or /quit to exit.");
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
