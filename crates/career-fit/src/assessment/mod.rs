mod catalog;
pub mod domain;
pub mod import;
pub mod report;
pub mod scoring;
mod session;

pub use catalog::{AnswerKey, AssessmentSection, QuestionCatalog};
pub use domain::{
    AnswerRecord, AssessmentError, Category, Question, QuestionKind, Recommendation,
    WiscarDimension, LIKERT_SCALE,
};
pub use import::{AnswerFormat, AnswerImportError, AnswerImporter};
pub use report::ResultsView;
pub use scoring::{AssessmentResults, ScoreBreakdown, Scorer, WiscarScores};
pub use session::{Advance, AssessmentSession, Progress};
