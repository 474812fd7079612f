use super::domain::{Category, Question, QuestionKind};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct AssessmentSection {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub total_weight: u8,
    pub questions: Vec<Question>,
}

#[derive(Debug)]
pub struct QuestionCatalog {
    sections: Vec<AssessmentSection>,
    answer_key: AnswerKey,
}

impl QuestionCatalog {
    pub fn new(sections: Vec<AssessmentSection>, answer_key: AnswerKey) -> Self {
        Self {
            sections,
            answer_key,
        }
    }

    pub fn standard() -> Self {
        Self::new(standard_sections(), AnswerKey::standard())
    }

    pub fn sections(&self) -> &[AssessmentSection] {
        &self.sections
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id == id)
    }

    pub fn total_questions(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }
}

/// Correct option index per technical question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    entries: HashMap<String, usize>,
}

impl AnswerKey {
    pub fn standard() -> Self {
        [
            ("tech_1", 0),
            ("tech_2", 1),
            ("tech_3", 0),
            ("tech_4", 0),
            ("tech_5", 0),
        ]
        .into_iter()
        .collect()
    }

    pub fn correct_option(&self, question_id: &str) -> Option<usize> {
        self.entries.get(question_id).copied()
    }

    pub fn is_correct(&self, question_id: &str, answer: usize) -> bool {
        self.correct_option(question_id) == Some(answer)
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, option)| (id.into(), option))
                .collect(),
        }
    }
}

fn likert(id: &'static str, text: &'static str, subcategory: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Likert,
        category: Category::Psychometric,
        subcategory,
        weight: 5.0,
    }
}

fn choice(
    id: &'static str,
    text: &'static str,
    options: [&'static str; 4],
    category: Category,
    subcategory: &'static str,
    weight: f64,
) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::MultipleChoice {
            options: options.to_vec(),
        },
        category,
        subcategory,
        weight,
    }
}

fn standard_sections() -> Vec<AssessmentSection> {
    vec![
        AssessmentSection {
            category: Category::Psychometric,
            title: "Psychometric Assessment",
            description: "Assess your personality traits, interests, and work style compatibility with Treasury Analyst roles.",
            total_weight: 30,
            questions: vec![
                likert(
                    "psyc_1",
                    "I enjoy creating spreadsheets to solve real-world problems.",
                    "interest",
                ),
                likert(
                    "psyc_2",
                    "In uncertain economic conditions, I feel confident making data-driven decisions.",
                    "confidence",
                ),
                likert(
                    "psyc_3",
                    "I often double-check my work for accuracy.",
                    "conscientiousness",
                ),
                likert(
                    "psyc_4",
                    "I prefer structured, process-oriented work environments.",
                    "work-style",
                ),
                likert(
                    "psyc_5",
                    "I find financial markets and economic trends fascinating.",
                    "interest",
                ),
                likert(
                    "psyc_6",
                    "When facing complex problems, I break them down into manageable parts.",
                    "analytical-thinking",
                ),
            ],
        },
        AssessmentSection {
            category: Category::Technical,
            title: "Technical & Aptitude Assessment",
            description: "Evaluate your numerical reasoning, financial knowledge, and domain-specific readiness.",
            total_weight: 40,
            questions: vec![
                choice(
                    "tech_1",
                    "If a company expects an inflow of $5M in 30 days and outflows of $4M, what is the projected net cash position?",
                    ["$1M positive", "$1M negative", "$9M positive", "Cannot be determined"],
                    Category::Technical,
                    "cash-flow",
                    8.0,
                ),
                choice(
                    "tech_2",
                    "A 10% increase in interest rates will most significantly affect which treasury function?",
                    [
                        "Cash positioning",
                        "Investment portfolio valuation",
                        "Bank reconciliation",
                        "Expense reporting",
                    ],
                    Category::Technical,
                    "interest-rates",
                    8.0,
                ),
                choice(
                    "tech_3",
                    "What is the Net Present Value (NPV) of receiving $1,000 in one year with a 5% discount rate?",
                    ["$952.38", "$1,050.00", "$950.00", "$1,000.00"],
                    Category::Technical,
                    "time-value",
                    8.0,
                ),
                choice(
                    "tech_4",
                    "Foreign exchange risk is primarily managed through:",
                    [
                        "Hedging instruments",
                        "Cash hoarding",
                        "Expense reduction",
                        "Revenue diversification",
                    ],
                    Category::Technical,
                    "fx-risk",
                    8.0,
                ),
                choice(
                    "tech_5",
                    "If EUR/USD moves from 1.1000 to 1.1100, the EUR has:",
                    [
                        "Appreciated against USD",
                        "Depreciated against USD",
                        "Remained stable",
                        "Cannot be determined",
                    ],
                    Category::Technical,
                    "fx-analysis",
                    8.0,
                ),
            ],
        },
        AssessmentSection {
            category: Category::Wiscar,
            title: "WISCAR Framework Analysis",
            description: "Multi-dimensional assessment of your readiness across Will, Interest, Skill, Cognitive ability, Ability to learn, and Real-world alignment.",
            total_weight: 30,
            questions: vec![
                choice(
                    "wiscar_1",
                    "When facing a skills gap in financial analysis, what is your typical approach?",
                    [
                        "Immediately seek out online courses or resources to learn",
                        "Ask colleagues for help and guidance",
                        "Try to work around the gap using existing skills",
                        "Wait for formal training opportunities",
                    ],
                    Category::Wiscar,
                    "ability-to-learn",
                    5.0,
                ),
                choice(
                    "wiscar_2",
                    "How often do you analyze financial headlines and think about their broader economic impact?",
                    ["Daily", "Weekly", "Monthly", "Rarely"],
                    Category::Wiscar,
                    "interest",
                    5.0,
                ),
                choice(
                    "wiscar_3",
                    "Describe your consistency when working under pressure.",
                    [
                        "I maintain high performance and stay organized",
                        "I perform well but may need occasional support",
                        "I struggle initially but adapt quickly",
                        "Pressure significantly impacts my performance",
                    ],
                    Category::Wiscar,
                    "will",
                    5.0,
                ),
                choice(
                    "wiscar_4",
                    "Rate your current proficiency with financial modeling and Excel.",
                    ["Expert level", "Advanced", "Intermediate", "Beginner"],
                    Category::Wiscar,
                    "skill",
                    5.0,
                ),
                choice(
                    "wiscar_5",
                    "When solving complex financial problems, you typically:",
                    [
                        "Break them into logical steps and work systematically",
                        "Look for patterns from similar past problems",
                        "Collaborate with others to find solutions",
                        "Use intuition and experience to guide decisions",
                    ],
                    Category::Wiscar,
                    "cognitive",
                    5.0,
                ),
                choice(
                    "wiscar_6",
                    "How well does treasury work align with your long-term career goals?",
                    [
                        "Perfect alignment - this is exactly what I want to do",
                        "Good fit - aligns with most of my goals",
                        "Partial fit - some aspects appeal to me",
                        "Poor fit - not really aligned with my goals",
                    ],
                    Category::Wiscar,
                    "real-world-alignment",
                    5.0,
                ),
            ],
        },
    ]
}
