mod policy;
mod rules;

use super::catalog::AnswerKey;
use super::domain::{AnswerRecord, Category, Recommendation, WiscarDimension};
use super::report::insights;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub(crate) use rules::{normalize_likert, normalize_wiscar};

/// Stateless scorer that turns the collected answers into an assessment outcome.
#[derive(Debug, Clone)]
pub struct Scorer {
    answer_key: AnswerKey,
}

impl Scorer {
    pub fn new(answer_key: AnswerKey) -> Self {
        Self { answer_key }
    }

    pub fn standard() -> Self {
        Self::new(AnswerKey::standard())
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    /// Scores every response once. Missing answers contribute nothing and empty
    /// categories score 0.
    pub fn score(&self, responses: &[AnswerRecord]) -> AssessmentResults {
        let (categories, dimensions) = rules::reduce_responses(responses, &self.answer_key);

        let psychometric = categories.average(Category::Psychometric);
        let technical = categories.average(Category::Technical);
        let wiscar = categories.average(Category::Wiscar);
        let scores = ScoreBreakdown {
            psychometric,
            technical,
            wiscar,
            overall: policy::overall_score(psychometric, technical, wiscar),
        };

        let wiscar_scores = WiscarScores {
            will: dimensions.average(WiscarDimension::Will),
            interest: dimensions.average(WiscarDimension::Interest),
            skill: dimensions.average(WiscarDimension::Skill),
            cognitive: dimensions.average(WiscarDimension::Cognitive),
            ability_to_learn: dimensions.average(WiscarDimension::AbilityToLearn),
            real_world_alignment: dimensions.average(WiscarDimension::RealWorldAlignment),
        };

        let recommendation = policy::recommend(scores.overall);
        let confidence_score = policy::confidence(&scores);

        debug!(
            responses = responses.len(),
            psychometric,
            technical,
            wiscar,
            overall = scores.overall,
            recommendation = recommendation.tag(),
            confidence_score,
            "scored assessment"
        );

        AssessmentResults {
            personalized_insights: insights::personalized_insights(&scores, &wiscar_scores),
            next_steps: insights::next_steps(recommendation, &scores),
            alternative_roles: insights::alternative_roles(recommendation),
            scores,
            wiscar_scores,
            recommendation,
            confidence_score,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub psychometric: f64,
    pub technical: f64,
    pub wiscar: f64,
    pub overall: f64,
}

impl ScoreBreakdown {
    pub fn category(&self, category: Category) -> f64 {
        match category {
            Category::Psychometric => self.psychometric,
            Category::Technical => self.technical,
            Category::Wiscar => self.wiscar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    pub ability_to_learn: f64,
    pub real_world_alignment: f64,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> f64 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => self.real_world_alignment,
        }
    }

    pub fn entries(&self) -> [(WiscarDimension, f64); 6] {
        WiscarDimension::ordered().map(|dimension| (dimension, self.get(dimension)))
    }
}

/// Final outcome of an assessment, read-only once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub scores: ScoreBreakdown,
    pub wiscar_scores: WiscarScores,
    pub recommendation: Recommendation,
    pub personalized_insights: Vec<String>,
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_roles: Option<Vec<String>>,
    pub confidence_score: f64,
}
