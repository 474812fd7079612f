use super::super::domain::Recommendation;
use super::ScoreBreakdown;

pub(crate) const PSYCHOMETRIC_WEIGHT: f64 = 0.3;
pub(crate) const TECHNICAL_WEIGHT: f64 = 0.4;
pub(crate) const WISCAR_WEIGHT: f64 = 0.3;

pub(crate) const STRONG_FIT_THRESHOLD: f64 = 75.0;
pub(crate) const MODERATE_FIT_THRESHOLD: f64 = 60.0;

const NEUTRAL_SCORE: f64 = 50.0;

pub(crate) fn overall_score(psychometric: f64, technical: f64, wiscar: f64) -> f64 {
    psychometric * PSYCHOMETRIC_WEIGHT + technical * TECHNICAL_WEIGHT + wiscar * WISCAR_WEIGHT
}

pub(crate) fn recommend(overall: f64) -> Recommendation {
    if overall >= STRONG_FIT_THRESHOLD {
        Recommendation::StrongFit
    } else if overall >= MODERATE_FIT_THRESHOLD {
        Recommendation::ModerateFit
    } else {
        Recommendation::PoorFit
    }
}

/// Blends agreement between the category scores with distance from the neutral midpoint.
pub(crate) fn confidence(scores: &ScoreBreakdown) -> f64 {
    let variance = [scores.psychometric, scores.technical, scores.wiscar]
        .iter()
        .map(|score| (score - scores.overall).powi(2))
        .sum::<f64>();

    let consistency = (100.0 - variance / 100.0).max(0.0);
    let strength = (scores.overall - NEUTRAL_SCORE).abs() * 2.0;

    ((consistency + strength) / 2.0).clamp(0.0, 100.0)
}
