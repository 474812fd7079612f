use serde::{Deserialize, Serialize};

/// Labels for the implicit five-point Likert scale, lowest agreement first.
pub const LIKERT_SCALE: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical",
            Self::Wiscar => "WISCAR",
        }
    }
}

/// The six readiness dimensions of the WISCAR framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorldAlignment,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::AbilityToLearn,
            Self::RealWorldAlignment,
        ]
    }

    pub fn from_subcategory(value: &str) -> Option<Self> {
        match value {
            "will" => Some(Self::Will),
            "interest" => Some(Self::Interest),
            "skill" => Some(Self::Skill),
            "cognitive" => Some(Self::Cognitive),
            "ability-to-learn" => Some(Self::AbilityToLearn),
            "real-world-alignment" => Some(Self::RealWorldAlignment),
            _ => None,
        }
    }

    pub const fn subcategory(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Cognitive => "cognitive",
            Self::AbilityToLearn => "ability-to-learn",
            Self::RealWorldAlignment => "real-world-alignment",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::AbilityToLearn => "Ability To Learn",
            Self::RealWorldAlignment => "Real World Alignment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Likert,
    MultipleChoice { options: Vec<&'static str> },
}

#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub category: Category,
    pub subcategory: &'static str,
    pub weight: f64,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.option_labels().len()
    }

    pub fn option_labels(&self) -> &[&'static str] {
        match &self.kind {
            QuestionKind::Likert => &LIKERT_SCALE,
            QuestionKind::MultipleChoice { options } => options,
        }
    }

    /// Builds the denormalized record for selecting `answer` on this question.
    pub fn record_answer(&self, answer: usize) -> Result<AnswerRecord, AssessmentError> {
        let option_count = self.option_count();
        if answer >= option_count {
            return Err(AssessmentError::OptionOutOfRange {
                question_id: self.id.to_string(),
                answer,
                option_count,
            });
        }

        Ok(AnswerRecord {
            question_id: self.id.to_string(),
            answer,
            category: self.category,
            subcategory: self.subcategory.to_string(),
            weight: self.weight,
        })
    }
}

/// One selected option, carrying copies of the question's scoring fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    pub answer: usize,
    pub category: Category,
    pub subcategory: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    StrongFit,
    ModerateFit,
    PoorFit,
}

impl Recommendation {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::StrongFit => "strong-fit",
            Self::ModerateFit => "moderate-fit",
            Self::PoorFit => "poor-fit",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongFit => "Strong Fit",
            Self::ModerateFit => "Moderate Fit",
            Self::PoorFit => "Consider Alternatives",
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("question {0} not found in catalog")]
    QuestionNotFound(String),
    #[error("answer {answer} is out of range for question {question_id} ({option_count} options)")]
    OptionOutOfRange {
        question_id: String,
        answer: usize,
        option_count: usize,
    },
    #[error("question {0} must be answered before continuing")]
    Unanswered(String),
    #[error("assessment is already complete")]
    AlreadyComplete,
}
