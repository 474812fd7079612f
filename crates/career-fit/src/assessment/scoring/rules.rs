use super::super::catalog::AnswerKey;
use super::super::domain::{AnswerRecord, Category, WiscarDimension};
use std::collections::HashMap;
use tracing::warn;

const LIKERT_MAX_INDEX: usize = 4;

const STANDARD_TABLE: [f64; 4] = [100.0, 75.0, 50.0, 25.0];
const SKILL_TABLE: [f64; 4] = [100.0, 80.0, 60.0, 30.0];
const COGNITIVE_TABLE: [f64; 4] = [100.0, 80.0, 70.0, 60.0];

/// Normalized value of a single response on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResponseScore {
    pub value: f64,
    /// Set only when the response counts toward a WISCAR sub-score.
    pub dimension: Option<WiscarDimension>,
}

impl ResponseScore {
    const fn plain(value: f64) -> Self {
        Self {
            value,
            dimension: None,
        }
    }
}

fn wiscar_table(dimension: WiscarDimension) -> &'static [f64; 4] {
    match dimension {
        WiscarDimension::Skill => &SKILL_TABLE,
        WiscarDimension::Cognitive => &COGNITIVE_TABLE,
        WiscarDimension::Will
        | WiscarDimension::Interest
        | WiscarDimension::AbilityToLearn
        | WiscarDimension::RealWorldAlignment => &STANDARD_TABLE,
    }
}

pub(crate) fn normalize_likert(answer: usize) -> Option<f64> {
    (answer <= LIKERT_MAX_INDEX).then(|| (answer as f64 / LIKERT_MAX_INDEX as f64) * 100.0)
}

pub(crate) fn normalize_wiscar(subcategory: &str, answer: usize) -> Option<(WiscarDimension, f64)> {
    let dimension = WiscarDimension::from_subcategory(subcategory)?;
    wiscar_table(dimension)
        .get(answer)
        .map(|value| (dimension, *value))
}

pub(crate) fn normalize(record: &AnswerRecord, answer_key: &AnswerKey) -> ResponseScore {
    match record.category {
        Category::Psychometric => match normalize_likert(record.answer) {
            Some(value) => ResponseScore::plain(value),
            None => {
                warn!(
                    question_id = %record.question_id,
                    answer = record.answer,
                    "likert answer outside the five-point scale scored as 0"
                );
                ResponseScore::plain(0.0)
            }
        },
        Category::Technical => {
            let value = if answer_key.is_correct(&record.question_id, record.answer) {
                100.0
            } else {
                0.0
            };
            ResponseScore::plain(value)
        }
        Category::Wiscar => match normalize_wiscar(&record.subcategory, record.answer) {
            Some((dimension, value)) => ResponseScore {
                value,
                dimension: Some(dimension),
            },
            None => {
                warn!(
                    question_id = %record.question_id,
                    subcategory = %record.subcategory,
                    answer = record.answer,
                    "wiscar answer has no scoring table entry; scored as 0"
                );
                ResponseScore::plain(0.0)
            }
        },
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct WeightedTotal {
    weighted_sum: f64,
    weight: f64,
}

/// Weighted average per top-level category.
#[derive(Debug, Default)]
pub(crate) struct CategoryReducer {
    totals: HashMap<Category, WeightedTotal>,
}

impl CategoryReducer {
    pub fn add(&mut self, category: Category, value: f64, weight: f64) {
        let entry = self.totals.entry(category).or_default();
        entry.weighted_sum += value * weight;
        entry.weight += weight;
    }

    pub fn average(&self, category: Category) -> f64 {
        match self.totals.get(&category) {
            Some(total) if total.weight > 0.0 => total.weighted_sum / total.weight,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct CountedTotal {
    sum: f64,
    count: usize,
}

/// Unweighted average per WISCAR dimension.
#[derive(Debug, Default)]
pub(crate) struct DimensionReducer {
    totals: HashMap<WiscarDimension, CountedTotal>,
}

impl DimensionReducer {
    pub fn add(&mut self, dimension: WiscarDimension, value: f64) {
        let entry = self.totals.entry(dimension).or_default();
        entry.sum += value;
        entry.count += 1;
    }

    pub fn average(&self, dimension: WiscarDimension) -> f64 {
        match self.totals.get(&dimension) {
            Some(total) if total.count > 0 => total.sum / total.count as f64,
            _ => 0.0,
        }
    }
}

/// Feeds every response through both reducers in a single pass.
pub(crate) fn reduce_responses(
    responses: &[AnswerRecord],
    answer_key: &AnswerKey,
) -> (CategoryReducer, DimensionReducer) {
    let mut categories = CategoryReducer::default();
    let mut dimensions = DimensionReducer::default();

    for record in responses {
        let score = normalize(record, answer_key);
        categories.add(record.category, score.value, record.weight);
        if let Some(dimension) = score.dimension {
            dimensions.add(dimension, score.value);
        }
    }

    (categories, dimensions)
}
