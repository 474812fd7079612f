use crate::cli::emit;
use career_fit::assessment::{AssessmentSession, Category, Question, QuestionCatalog};
use career_fit::error::AppError;
use clap::{Args, ValueEnum};
use std::io;
use tracing::info;

/// Canned answer sheets, one per recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum Profile {
    #[default]
    Strong,
    Moderate,
    Poor,
}

impl Profile {
    /// Number of technical questions (in catalog order) answered correctly.
    fn correct_technical(self) -> usize {
        match self {
            Profile::Strong => 5,
            Profile::Moderate => 3,
            Profile::Poor => 1,
        }
    }

    fn pick(self, question: &Question, technical_index: usize, catalog: &QuestionCatalog) -> usize {
        match question.category {
            Category::Psychometric => match self {
                Profile::Strong => 4,
                Profile::Moderate => 3,
                Profile::Poor => 1,
            },
            Category::Wiscar => match self {
                Profile::Strong => 0,
                Profile::Moderate => 1,
                Profile::Poor => 3,
            },
            Category::Technical => {
                let correct = catalog.answer_key().correct_option(question.id).unwrap_or(0);
                if technical_index < self.correct_technical() {
                    correct
                } else {
                    (correct + 1) % question.option_count().max(1)
                }
            }
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answer profile to score
    #[arg(long, value_enum, default_value_t = Profile::Strong)]
    pub(crate) profile: Profile,
    /// Print the results as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let session = demo_session(args.profile)?;
    let mut stdout = io::stdout().lock();
    emit(&session, args.json, &mut stdout)
}

fn demo_session(profile: Profile) -> Result<AssessmentSession, AppError> {
    let mut session = AssessmentSession::standard();
    let answers: Vec<(&'static str, usize)> = {
        let catalog = session.catalog();
        let mut technical_index = 0;
        catalog
            .questions()
            .map(|question| {
                let answer = profile.pick(question, technical_index, catalog);
                if question.category == Category::Technical {
                    technical_index += 1;
                }
                (question.id, answer)
            })
            .collect()
    };

    for (question_id, answer) in answers {
        session.answer(question_id, answer)?;
    }
    let overall = session.finish()?.scores.overall;
    info!(?profile, overall, "demo profile scored");
    Ok(session)
}
