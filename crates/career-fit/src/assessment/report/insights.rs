use super::super::domain::Recommendation;
use super::super::scoring::{ScoreBreakdown, WiscarScores};

const STRONG_SIGNAL: f64 = 80.0;
const SOLID_TECHNICAL: f64 = 60.0;
const FOUNDATION_GAP: f64 = 70.0;

pub(crate) fn personalized_insights(
    scores: &ScoreBreakdown,
    wiscar_scores: &WiscarScores,
) -> Vec<String> {
    let mut insights = Vec::new();

    let technical = if scores.technical >= STRONG_SIGNAL {
        "You demonstrate strong technical proficiency in financial analysis and treasury concepts."
    } else if scores.technical >= SOLID_TECHNICAL {
        "Your technical foundation is solid but could benefit from reinforcement in specific treasury areas."
    } else {
        "Building core financial and technical skills should be your immediate priority."
    };
    insights.push(technical.to_string());

    if scores.psychometric >= STRONG_SIGNAL {
        insights.push(
            "Your personality profile strongly aligns with successful Treasury Analysts - you show excellent analytical thinking and attention to detail."
                .to_string(),
        );
    }

    if wiscar_scores.ability_to_learn >= STRONG_SIGNAL {
        insights.push(
            "Your learning agility is excellent, which will serve you well in this evolving field."
                .to_string(),
        );
    }

    if wiscar_scores.interest >= STRONG_SIGNAL {
        insights.push(
            "Your genuine interest in financial markets and economic trends is a strong indicator of long-term success."
                .to_string(),
        );
    }

    insights
}

pub(crate) fn next_steps(recommendation: Recommendation, scores: &ScoreBreakdown) -> Vec<String> {
    let steps: &[&str] = match recommendation {
        Recommendation::StrongFit => &[
            "Enroll in 'Corporate Treasury Foundations' course",
            "Learn Treasury Management Systems (TMS) like Kyriba or SAP",
            "Explore FX hedging tools and strategies",
            "Apply for entry-level Treasury Analyst positions",
        ],
        Recommendation::ModerateFit => &[
            "Take 'Corporate Treasury Basics' course",
            "Practice cash flow forecasting exercises",
            "Consider internship or entry-level finance roles first",
        ],
        Recommendation::PoorFit => &[
            "Take fundamental finance and accounting courses",
            "Build Excel and analytical skills",
            "Explore related fields like Financial Planning & Analysis",
            "Consider whether finance is the right career path",
        ],
    };

    let mut next = Vec::with_capacity(steps.len() + 1);
    if recommendation == Recommendation::ModerateFit && scores.technical < FOUNDATION_GAP {
        next.push(
            "Strengthen your foundation with 'Finance 101' and 'Excel for Financial Modeling'"
                .to_string(),
        );
    }
    next.extend(steps.iter().map(|step| step.to_string()));
    next
}

pub(crate) fn alternative_roles(recommendation: Recommendation) -> Option<Vec<String>> {
    if recommendation != Recommendation::PoorFit {
        return None;
    }

    Some(
        [
            "Financial Planning & Analysis (FP&A) - More forecasting, less risk management",
            "Risk Analyst - Stronger emphasis on modeling and analytics",
            "Operations Analyst - Structure and process focus with less financial complexity",
            "Business Analyst - Analytical skills applied to broader business problems",
        ]
        .iter()
        .map(|role| role.to_string())
        .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(psychometric: f64, technical: f64, wiscar: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            psychometric,
            technical,
            wiscar,
            overall: 0.3 * psychometric + 0.4 * technical + 0.3 * wiscar,
        }
    }

    #[test]
    fn exactly_one_technical_insight_is_emitted() {
        for (technical, fragment) in [
            (80.0, "strong technical proficiency"),
            (60.0, "foundation is solid"),
            (59.9, "immediate priority"),
        ] {
            let insights =
                personalized_insights(&scores(0.0, technical, 0.0), &WiscarScores::default());
            assert_eq!(insights.len(), 1);
            assert!(insights[0].contains(fragment), "{technical}: {insights:?}");
        }
    }

    #[test]
    fn strong_signals_add_insights_in_order() {
        let wiscar = WiscarScores {
            ability_to_learn: 80.0,
            interest: 100.0,
            ..WiscarScores::default()
        };
        let insights = personalized_insights(&scores(80.0, 100.0, 90.0), &wiscar);

        assert_eq!(insights.len(), 4);
        assert!(insights[1].contains("personality profile"));
        assert!(insights[2].contains("learning agility"));
        assert!(insights[3].contains("genuine interest"));
    }

    #[test]
    fn moderate_fit_with_weak_technical_gets_foundation_step_first() {
        let steps = next_steps(Recommendation::ModerateFit, &scores(90.0, 60.0, 80.0));
        assert_eq!(steps.len(), 4);
        assert!(steps[0].contains("Finance 101"));

        let steps = next_steps(Recommendation::ModerateFit, &scores(50.0, 70.0, 60.0));
        assert_eq!(steps.len(), 3);
        assert!(steps[0].contains("Corporate Treasury Basics"));
    }

    #[test]
    fn strong_and_poor_fit_steps_ignore_technical_gap() {
        let strong = next_steps(Recommendation::StrongFit, &scores(100.0, 0.0, 100.0));
        assert_eq!(strong.len(), 4);
        assert!(strong.iter().all(|step| !step.contains("Finance 101")));

        let poor = next_steps(Recommendation::PoorFit, &scores(0.0, 0.0, 0.0));
        assert_eq!(poor.len(), 4);
        assert!(poor[3].contains("right career path"));
    }

    #[test]
    fn alternative_roles_only_for_poor_fit() {
        assert_eq!(
            alternative_roles(Recommendation::PoorFit).map(|roles| roles.len()),
            Some(4)
        );
        assert!(alternative_roles(Recommendation::ModerateFit).is_none());
        assert!(alternative_roles(Recommendation::StrongFit).is_none());
    }
}
