use super::super::domain::{Category, Recommendation};
use super::super::scoring::AssessmentResults;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreLine {
    pub label: &'static str,
    pub percent: u8,
}

/// Display-ready rendering of [`AssessmentResults`].
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub recommendation: Recommendation,
    pub badge: &'static str,
    pub message: &'static str,
    pub match_percent: u8,
    pub confidence_percent: u8,
    pub breakdown: Vec<ScoreLine>,
    pub wiscar: Vec<ScoreLine>,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_roles: Option<Vec<String>>,
}

impl ResultsView {
    pub fn from_results(results: &AssessmentResults) -> Self {
        let breakdown = [
            (Category::Technical, "Technical Readiness"),
            (Category::Psychometric, "Psychological Fit"),
            (Category::Wiscar, "WISCAR Alignment"),
        ]
        .into_iter()
        .map(|(category, label)| ScoreLine {
            label,
            percent: as_percent(results.scores.category(category)),
        })
        .collect();

        let wiscar = results
            .wiscar_scores
            .entries()
            .into_iter()
            .map(|(dimension, value)| ScoreLine {
                label: dimension.label(),
                percent: as_percent(value),
            })
            .collect();

        Self {
            recommendation: results.recommendation,
            badge: results.recommendation.label(),
            message: recommendation_message(results.recommendation),
            match_percent: as_percent(results.scores.overall),
            confidence_percent: as_percent(results.confidence_score),
            breakdown,
            wiscar,
            insights: results.personalized_insights.clone(),
            next_steps: results.next_steps.clone(),
            alternative_roles: results.alternative_roles.clone(),
        }
    }
}

impl From<&AssessmentResults> for ResultsView {
    fn from(results: &AssessmentResults) -> Self {
        Self::from_results(results)
    }
}

fn recommendation_message(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::StrongFit => "Excellent! You show strong alignment with Treasury Analyst roles. This career path is highly recommended for you.",
        Recommendation::ModerateFit => "Good potential! With some targeted skill development, you could succeed as a Treasury Analyst.",
        Recommendation::PoorFit => "Treasury Analysis may not be the best fit. Consider the alternative career paths suggested below.",
    }
}

fn as_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
