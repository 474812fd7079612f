use super::super::domain::{AnswerRecord, Category, Question};
use super::super::scoring::{normalize_likert, normalize_wiscar};
use serde::Deserialize;
use std::io::Read;

/// A `question_id,answer` row; blank answers are kept as `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRow {
    pub(crate) question_id: String,
    #[serde(default)]
    pub(crate) answer: Option<usize>,
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<AnswerRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for row in csv_reader.deserialize::<AnswerRow>() {
        let mut row: AnswerRow = row?;
        row.question_id = normalize_question_id(&row.question_id);
        rows.push(row);
    }

    Ok(rows)
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub(crate) fn normalize_question_id(value: &str) -> String {
    value.replace('\u{feff}', "").trim().to_ascii_lowercase()
}

/// Explains how `record` disagrees with the catalog entry it names, if it does.
pub(crate) fn catalog_mismatch(question: &Question, record: &AnswerRecord) -> Option<String> {
    if !(record.weight.is_finite() && record.weight > 0.0) {
        return Some(format!("weight {} must be positive", record.weight));
    }
    if record.category != question.category {
        return Some(format!(
            "category {} does not match catalog category {}",
            record.category.label(),
            question.category.label()
        ));
    }
    if record.subcategory != question.subcategory {
        return Some(format!(
            "subcategory '{}' does not match catalog subcategory '{}'",
            record.subcategory, question.subcategory
        ));
    }
    if record.weight != question.weight {
        return Some(format!(
            "weight {} does not match catalog weight {}",
            record.weight, question.weight
        ));
    }
    None
}

/// Explains why the scorer would silently give `record` no credit, if it would.
pub(crate) fn unscorable_reason(record: &AnswerRecord) -> Option<String> {
    match record.category {
        Category::Psychometric if normalize_likert(record.answer).is_none() => Some(format!(
            "likert answer {} is outside the five-point scale",
            record.answer
        )),
        Category::Wiscar if normalize_wiscar(&record.subcategory, record.answer).is_none() => {
            Some(format!(
                "no wiscar scoring entry for subcategory '{}' and answer {}",
                record.subcategory, record.answer
            ))
        }
        _ => None,
    }
}
