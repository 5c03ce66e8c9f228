//! Console output formatter for quiz outcomes

use crate::output::chart::RiskChart;
use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use quiz_domain::{Answer, MealPlan, QuizOutcome, TierColor};

/// Formats quiz outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &QuizOutcome) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header(&outcome.title));
        output.push('\n');

        output.push_str(&Self::score_line(outcome));
        output.push_str(&format!(
            "{} {} {}\n",
            "Risk level:".cyan().bold(),
            Self::paint(&outcome.recommendation.label, outcome.recommendation.color),
            format!("(scores {})", outcome.tier_range).dimmed()
        ));

        // Responses
        output.push_str(&Self::section_header("Your Answers"));
        for (i, response) in outcome.responses.iter().enumerate() {
            let answer = Answer::label_or_missing(response.answer);
            let answer = if response.answer.is_none() {
                answer.dimmed()
            } else if response.points > 0 {
                answer.yellow()
            } else {
                answer.normal()
            };
            output.push_str(&format!(
                "{:>3}. {}\n     {} {}\n",
                i + 1,
                response.question,
                "->".dimmed(),
                answer
            ));
        }
        if outcome.unanswered_count() > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!(
                    "{} unanswered question(s) were not scored.",
                    outcome.unanswered_count()
                )
                .yellow()
            ));
        }

        // Recommendation
        output.push_str(&Self::section_header("Recommendation"));
        output.push_str(&format!("\n{}\n", outcome.recommendation.advice));

        if !outcome.recommendation.workouts.is_empty() {
            output.push_str(&format!("\n{}\n", "Workouts:".green().bold()));
            for item in &outcome.recommendation.workouts {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        if !outcome.recommendation.diet.is_empty() {
            output.push_str(&format!("\n{}\n", "Diet:".green().bold()));
            for item in &outcome.recommendation.diet {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        output.push_str(&Self::section_header("Sample Meal Plan"));
        output.push_str(&Self::meal_card(&outcome.recommendation.meal_plan));

        output.push_str(&Self::section_header("Risk Chart"));
        output.push('\n');
        output.push_str(&RiskChart::new(&outcome.summary).render());
        output.push('\n');

        output.push_str(&format!("\n{}\n", outcome.disclaimer.dimmed().italic()));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &QuizOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format score, tier and advice only (concise output)
    pub fn format_summary(outcome: &QuizOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("=== {} ===", outcome.title).cyan().bold()
        ));
        output.push_str(&Self::score_line(outcome));
        output.push_str(&format!(
            "{}\n\n",
            Self::paint(&outcome.recommendation.label, outcome.recommendation.color)
        ));
        output.push_str(&outcome.recommendation.advice);
        output.push('\n');

        output
    }

    fn score_line(outcome: &QuizOutcome) -> String {
        format!(
            "{} {} / {}  ({} of {} answers are risk factors)\n",
            "Score:".cyan().bold(),
            outcome.score,
            outcome.max_score,
            outcome.summary.risk_count,
            outcome.summary.total
        )
    }

    fn paint(text: &str, color: TierColor) -> ColoredString {
        match color {
            TierColor::Green => text.green().bold(),
            TierColor::Yellow => text.yellow().bold(),
            TierColor::Red => text.red().bold(),
        }
    }

    fn meal_card(plan: &MealPlan) -> String {
        let meals = plan.meals();
        let name_width = meals.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let width = meals
            .iter()
            .map(|(_, meal)| meal.chars().count())
            .max()
            .unwrap_or(0)
            + name_width
            + 2;

        let mut card = format!("\n╭{}╮\n", "─".repeat(width + 2));
        for (name, meal) in meals {
            let line = format!("{:<name_width$}  {}", name, meal);
            let pad = width - line.chars().count();
            card.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
        }
        card.push_str(&format!("╰{}╯\n", "─".repeat(width + 2)));
        card
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &QuizOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &QuizOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_summary(&self, outcome: &QuizOutcome) -> String {
        Self::format_summary(outcome)
    }
}
