use crate::demo::{run_demo, DemoArgs};
use crate::quiz::{run_quiz, QuizOutcome};
use crate::render::{render_catalog, render_results, write_results_json};
use career_fit::assessment::{AnswerImporter, AssessmentSession};
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use career_fit::telemetry;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Treasury Analyst Career Fit",
    about = "Take the Treasury Analyst career-fit assessment or score saved answers",
    version
)]
struct Cli {
    /// Override the configured log level/filter (stderr)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the assessment interactively (default command)
    Take(TakeArgs),
    /// Score a saved answer sheet (.csv or .json)
    Score(ScoreArgs),
    /// List every section, question, and option
    Catalog,
    /// Score a built-in answer profile
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Print the results as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer sheet: CSV with `question_id,answer` or a JSON array of answer records
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Reject JSON records that would silently score 0
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the results as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "career fit assessment starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Take(TakeArgs::default()));

    match command {
        Command::Take(args) => run_take(args),
        Command::Score(args) => run_score(args, &config),
        Command::Catalog => {
            let session = AssessmentSession::standard();
            let mut stdout = io::stdout().lock();
            render_catalog(session.catalog(), &mut stdout)?;
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}

fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let mut session = AssessmentSession::standard();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match run_quiz(&mut session, stdin, &mut stdout)? {
        QuizOutcome::Quit => {
            writeln!(stdout, "\nAssessment abandoned; no results were computed.")?;
            Ok(())
        }
        QuizOutcome::Completed => emit(&session, args.json, &mut stdout),
    }
}

fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let strict = args.strict || config.assessment.strict_records;
    let session = AnswerImporter::new(strict).import_path(&args.answers)?;
    info!(
        path = %args.answers.display(),
        answered = session.responses().len(),
        strict,
        "answer sheet imported"
    );

    let mut stdout = io::stdout().lock();
    emit(&session, args.json, &mut stdout)
}

pub(crate) fn emit<W: Write>(
    session: &AssessmentSession,
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let Some(results) = session.results() else {
        writeln!(out, "Assessment incomplete; no results available.")?;
        return Ok(());
    };

    if json {
        write_results_json(results, out)
    } else {
        render_results(results, out)?;
        Ok(())
    }
}
