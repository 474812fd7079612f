mod parser;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerRecord, AssessmentError};
use super::session::AssessmentSession;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Csv,
    Json,
}

impl AnswerFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat(String),
    Assessment(AssessmentError),
    Rejected { question_id: String, reason: String },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answers: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answer JSON data: {}", err),
            AnswerImportError::UnsupportedFormat(path) => write!(
                f,
                "unsupported answer file '{}': expected a .csv or .json extension",
                path
            ),
            AnswerImportError::Assessment(err) => {
                write!(f, "could not apply answers to assessment: {}", err)
            }
            AnswerImportError::Rejected {
                question_id,
                reason,
            } => write!(f, "answer for {} rejected: {}", question_id, reason),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
            AnswerImportError::Assessment(err) => Some(err),
            AnswerImportError::UnsupportedFormat(_) | AnswerImportError::Rejected { .. } => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<AssessmentError> for AnswerImportError {
    fn from(err: AssessmentError) -> Self {
        Self::Assessment(err)
    }
}

/// Loads a saved set of answers and scores them as a completed assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerImporter {
    strict: bool,
}

impl AnswerImporter {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn import_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<AssessmentSession, AnswerImportError> {
        let path = path.as_ref();
        let format = AnswerFormat::from_path(path)
            .ok_or_else(|| AnswerImportError::UnsupportedFormat(path.display().to_string()))?;
        let file = File::open(path)?;
        self.import_reader(file, format)
    }

    pub fn import_reader<R: Read>(
        &self,
        reader: R,
        format: AnswerFormat,
    ) -> Result<AssessmentSession, AnswerImportError> {
        let mut session = AssessmentSession::standard();

        match format {
            AnswerFormat::Csv => {
                for row in parser::parse_csv(reader)? {
                    match row.answer {
                        Some(answer) => session.answer(&row.question_id, answer)?,
                        None => debug!(question_id = %row.question_id, "skipping blank answer"),
                    }
                }
            }
            AnswerFormat::Json => {
                for record in parser::parse_json(reader)? {
                    self.check_record(session.catalog(), &record)?;
                    session.record(record)?;
                }
            }
        }

        session.finish()?;
        Ok(session)
    }

    fn check_record(
        &self,
        catalog: &QuestionCatalog,
        record: &AnswerRecord,
    ) -> Result<(), AnswerImportError> {
        let reason = match catalog.question(&record.question_id) {
            None => Some("question is not part of the catalog".to_string()),
            Some(question) => parser::catalog_mismatch(question, record)
                .or_else(|| parser::unscorable_reason(record)),
        };

        match reason {
            Some(reason) if self.strict => Err(AnswerImportError::Rejected {
                question_id: record.question_id.clone(),
                reason,
            }),
            Some(reason) => {
                warn!(question_id = %record.question_id, %reason, "accepting answer record as-is");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::Category;
    use std::io::Cursor;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            AnswerFormat::from_path(Path::new("answers.CSV")),
            Some(AnswerFormat::Csv)
        );
        assert_eq!(
            AnswerFormat::from_path(Path::new("out/answers.json")),
            Some(AnswerFormat::Json)
        );
        assert_eq!(AnswerFormat::from_path(Path::new("answers.txt")), None);
        assert_eq!(AnswerFormat::from_path(Path::new("answers")), None);
    }

    #[test]
    fn question_ids_are_normalized() {
        assert_eq!(parser::normalize_question_id("\u{feff} Tech_1 "), "tech_1");
    }

    #[test]
    fn csv_rows_trim_and_keep_blank_answers_as_none() {
        let csv = "question_id,answer\n psyc_1 , 3 \nwiscar_2,\n";
        let rows = parser::parse_csv(Cursor::new(csv)).expect("parse csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].question_id, "psyc_1");
        assert_eq!(rows[0].answer, Some(3));
        assert_eq!(rows[1].answer, None);
    }

    #[test]
    fn csv_later_rows_replace_earlier_answers() {
        let csv = "question_id,answer\ntech_1,2\ntech_1,0\n";
        let session = AnswerImporter::default()
            .import_reader(Cursor::new(csv), AnswerFormat::Csv)
            .expect("import");

        assert_eq!(session.responses().len(), 1);
        assert_eq!(session.answer_for("tech_1"), Some(0));
        let results = session.results().expect("scored");
        assert!((results.scores.technical - 100.0).abs() < 1e-9);
    }

    #[test]
    fn csv_unknown_question_is_an_assessment_error() {
        let error = AnswerImporter::default()
            .import_reader(Cursor::new("question_id,answer\nnope,1\n"), AnswerFormat::Csv)
            .expect_err("unknown id");
        match error {
            AnswerImportError::Assessment(AssessmentError::QuestionNotFound(id)) => {
                assert_eq!(id, "nope")
            }
            other => panic!("expected missing question, got {other:?}"),
        }
    }

    #[test]
    fn unscorable_reason_flags_out_of_table_answers() {
        let mut record = AnswerRecord {
            question_id: "wiscar_4".to_string(),
            answer: 4,
            category: Category::Wiscar,
            subcategory: "skill".to_string(),
            weight: 5.0,
        };
        assert!(parser::unscorable_reason(&record).is_some());

        record.answer = 3;
        assert!(parser::unscorable_reason(&record).is_none());

        record.subcategory = "grit".to_string();
        assert!(parser::unscorable_reason(&record).is_some());

        record.category = Category::Technical;
        record.answer = 9;
        assert!(parser::unscorable_reason(&record).is_none());
    }

    #[test]
    fn catalog_mismatch_checks_weight_and_placement() {
        let catalog = QuestionCatalog::standard();
        let question = catalog.question("psyc_2").expect("psyc_2 present");
        let mut record = question.record_answer(0).expect("valid answer");
        assert!(parser::catalog_mismatch(question, &record).is_none());

        record.weight = -5.0;
        assert!(parser::catalog_mismatch(question, &record)
            .expect("negative weight")
            .contains("must be positive"));

        record.weight = f64::NAN;
        assert!(parser::catalog_mismatch(question, &record).is_some());

        record.weight = 10.0;
        assert!(parser::catalog_mismatch(question, &record)
            .expect("inflated weight")
            .contains("catalog weight 5"));

        record.weight = 5.0;
        record.subcategory = "interest".to_string();
        assert!(parser::catalog_mismatch(question, &record).is_some());

        record.subcategory = "confidence".to_string();
        record.category = Category::Wiscar;
        assert!(parser::catalog_mismatch(question, &record)
            .expect("wrong category")
            .contains("catalog category Psychometric"));
    }

    #[test]
    fn strict_mode_rejects_unknown_json_question() {
        let json = r#"[{"questionId":"tech_9","answer":0,"category":"technical","subcategory":"x","weight":8}]"#;

        let lenient = AnswerImporter::new(false)
            .import_reader(Cursor::new(json), AnswerFormat::Json)
            .expect("lenient import accepts");
        assert_eq!(lenient.responses().len(), 1);

        let error = AnswerImporter::new(true)
            .import_reader(Cursor::new(json), AnswerFormat::Json)
            .expect_err("strict import rejects");
        assert!(matches!(error, AnswerImportError::Rejected { .. }));
    }

    #[test]
    fn import_path_propagates_io_errors() {
        let error = AnswerImporter::default()
            .import_path("./does-not-exist.csv")
            .expect_err("expected io error");
        match error {
            AnswerImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn import_path_rejects_unknown_extensions() {
        let error = AnswerImporter::default()
            .import_path("answers.xml")
            .expect_err("unsupported");
        assert!(matches!(error, AnswerImportError::UnsupportedFormat(_)));
    }
}
