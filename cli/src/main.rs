//! CLI entrypoint for health-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quiz_application::{
    NoProgress, QuestionnaireRepository, QuizProgressNotifier, RunQuizInput, RunQuizUseCase,
    ScoreAnswersInput, ScoreAnswersUseCase,
};
use quiz_infrastructure::{ConfigLoader, FileConfig, QuestionnaireCatalog, QuestionnaireFileLoader};
use quiz_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, QuizRepl, ReplConfig,
    SimpleProgress,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting health-quiz");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config: FileConfig = match (cli.no_config, cli.config.as_ref()) {
        (true, None) => ConfigLoader::load_defaults(),
        (true, Some(path)) => ConfigLoader::load_file(path)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?,
        (false, explicit) => ConfigLoader::load(explicit)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?,
    };

    let output_config = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    if !output_config.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // Built-in questionnaires, then configured directories, then explicit files
    let (dirs, _) = config.quiz.resolved_dirs();
    let mut catalog = QuestionnaireCatalog::builtin()?.with_dirs(&dirs);
    let loader = QuestionnaireFileLoader::new();
    for path in &cli.file {
        let questionnaire = loader.load_file(path)?;
        catalog = catalog.with_questionnaire(questionnaire);
    }

    // Errors are fatal unless the command line makes them irrelevant
    let overridden = cli.questionnaire.is_some() || cli.list;
    let issues = config.validate(&catalog);
    let (errors, warnings): (Vec<_>, Vec<_>) = issues
        .iter()
        .partition(|issue| issue.is_error() && !overridden);
    for issue in &warnings {
        warn!("{}", issue.message);
    }
    if !errors.is_empty() {
        for issue in &errors {
            eprintln!("Config error: {}", issue.message);
        }
        bail!("Invalid configuration ({} error(s))", errors.len());
    }

    if let Some(id) = &config.quiz.default
        && warnings.iter().all(|issue| !issue.is_error())
    {
        catalog = catalog.with_default(id)?;
    }
    let catalog = Arc::new(catalog);

    if cli.list {
        println!("Available questionnaires:");
        for info in catalog.list() {
            let marker = if info.id == catalog.default_id() {
                " (default)"
            } else {
                ""
            };
            println!(
                "  {:<12} {} - {} questions, max score {}{}",
                info.id, info.title, info.question_count, info.max_score, marker
            );
        }
        return Ok(());
    }

    // Non-interactive scoring
    if let Some(list) = &cli.answers {
        let mut input = ScoreAnswersInput::parse(list).context("Invalid --answers list")?;
        if let Some(id) = &cli.questionnaire {
            input = input.with_questionnaire(id.clone());
        }

        let outcome = match ScoreAnswersUseCase::new(catalog).execute(input) {
            Ok(outcome) => outcome,
            Err(e) if e.is_contract_violation() => bail!(
                "{}\nGive one entry per question, using '-' for a skipped one (see --list).",
                e
            ),
            Err(e) => return Err(e.into()),
        };
        println!("{}", ConsoleFormatter.render(&outcome, output_config.format));
        return Ok(());
    }

    // Interactive mode
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config.repl.history_file.clone(),
    };

    let progress: Arc<dyn QuizProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else if repl_config.show_progress {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let input = RunQuizInput {
        questionnaire_id: cli.questionnaire.clone(),
        params: config.quiz_params(),
    };
    let controller = RunQuizUseCase::new(catalog).start_with_progress(input, progress)?;

    QuizRepl::new(controller)
        .with_format(output_config.format)
        .with_history(repl_config.history_path())
        .run()?;

    Ok(())
}
