use super::catalog::{AssessmentSection, QuestionCatalog};
use super::domain::{AnswerRecord, AssessmentError, Question};
use super::scoring::{AssessmentResults, Scorer};
use serde::Serialize;
use tracing::{debug, info};

/// Where the navigator landed after a successful [`AssessmentSession::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Question { section: usize, question: usize },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    /// One-based position shown to the user, capped at `total`.
    pub position: usize,
    pub percent: f64,
}

/// Walks the catalog one question at a time and owns the answers given so far.
#[derive(Debug)]
pub struct AssessmentSession {
    catalog: QuestionCatalog,
    scorer: Scorer,
    section: usize,
    question: usize,
    responses: Vec<AnswerRecord>,
    results: Option<AssessmentResults>,
}

impl AssessmentSession {
    pub fn new(catalog: QuestionCatalog) -> Self {
        let scorer = Scorer::new(catalog.answer_key().clone());
        let mut session = Self {
            catalog,
            scorer,
            section: 0,
            question: 0,
            responses: Vec::new(),
            results: None,
        };
        session.skip_empty_sections_forward();
        session
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn current_section(&self) -> Option<&AssessmentSection> {
        if self.is_complete() {
            return None;
        }
        self.catalog.sections().get(self.section)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_section()
            .and_then(|section| section.questions.get(self.question))
    }

    /// Zero-based (section, question) indices of the navigator.
    pub fn position(&self) -> (usize, usize) {
        (self.section, self.question)
    }

    pub fn current_answer(&self) -> Option<usize> {
        let question = self.current_question()?;
        self.answer_for(question.id)
    }

    pub fn answer_for(&self, question_id: &str) -> Option<usize> {
        self.responses
            .iter()
            .find(|record| record.question_id == question_id)
            .map(|record| record.answer)
    }

    pub fn can_proceed(&self) -> bool {
        self.current_answer().is_some()
    }

    pub fn is_first_question(&self) -> bool {
        self.first_position() == Some((self.section, self.question))
    }

    pub fn is_last_question(&self) -> bool {
        self.last_position() == Some((self.section, self.question))
    }

    pub fn is_complete(&self) -> bool {
        self.results.is_some()
    }

    pub fn responses(&self) -> &[AnswerRecord] {
        &self.responses
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    pub fn into_results(self) -> Option<AssessmentResults> {
        self.results
    }

    pub fn progress(&self) -> Progress {
        let answered = self
            .responses
            .iter()
            .filter(|record| self.catalog.question(&record.question_id).is_some())
            .count();
        let total = self.catalog.total_questions();
        let position = (answered + 1).min(total);
        let percent = if total > 0 {
            position as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Progress {
            answered,
            total,
            position,
            percent,
        }
    }

    /// Records `answer` for the question under the cursor.
    pub fn select_answer(&mut self, answer: usize) -> Result<(), AssessmentError> {
        self.ensure_open()?;
        let record = self
            .current_question()
            .ok_or(AssessmentError::AlreadyComplete)?
            .record_answer(answer)?;
        self.upsert(record);
        Ok(())
    }

    /// Records `answer` for any question in the catalog, independent of the cursor.
    pub fn answer(&mut self, question_id: &str, answer: usize) -> Result<(), AssessmentError> {
        self.ensure_open()?;
        let record = self
            .catalog
            .question(question_id)
            .ok_or_else(|| AssessmentError::QuestionNotFound(question_id.to_string()))?
            .record_answer(answer)?;
        self.upsert(record);
        Ok(())
    }

    /// Stores an externally built record as-is, replacing any prior answer to the
    /// same question.
    pub fn record(&mut self, record: AnswerRecord) -> Result<(), AssessmentError> {
        self.ensure_open()?;
        self.upsert(record);
        Ok(())
    }

    pub fn next(&mut self) -> Result<Advance, AssessmentError> {
        self.ensure_open()?;

        if let Some(question) = self.current_question() {
            if self.answer_for(question.id).is_none() {
                return Err(AssessmentError::Unanswered(question.id.to_string()));
            }
        }

        self.question += 1;
        self.skip_empty_sections_forward();

        if self.section >= self.catalog.sections().len() {
            self.complete();
            return Ok(Advance::Completed);
        }

        Ok(Advance::Question {
            section: self.section,
            question: self.question,
        })
    }

    /// Steps back one question; stays put on the first question.
    pub fn previous(&mut self) -> Result<(), AssessmentError> {
        self.ensure_open()?;

        let sections = self.catalog.sections();
        if self.question > 0 {
            self.question -= 1;
            return Ok(());
        }

        if let Some(section) = (0..self.section)
            .rev()
            .find(|&index| !sections[index].questions.is_empty())
        {
            self.section = section;
            self.question = sections[section].questions.len() - 1;
        }

        Ok(())
    }

    /// Scores whatever has been answered and closes the session.
    pub fn finish(&mut self) -> Result<&AssessmentResults, AssessmentError> {
        self.ensure_open()?;
        self.section = self.catalog.sections().len();
        self.question = 0;
        Ok(self.complete())
    }

    fn complete(&mut self) -> &AssessmentResults {
        let results = self.scorer.score(&self.responses);
        info!(
            answered = self.responses.len(),
            total = self.catalog.total_questions(),
            overall = results.scores.overall,
            recommendation = results.recommendation.tag(),
            "assessment complete"
        );
        self.results.insert(results)
    }

    fn upsert(&mut self, record: AnswerRecord) {
        debug!(question_id = %record.question_id, answer = record.answer, "answer recorded");
        match self
            .responses
            .iter()
            .position(|existing| existing.question_id == record.question_id)
        {
            Some(index) => self.responses[index] = record,
            None => self.responses.push(record),
        }
    }

    fn ensure_open(&self) -> Result<(), AssessmentError> {
        if self.is_complete() {
            Err(AssessmentError::AlreadyComplete)
        } else {
            Ok(())
        }
    }

    fn skip_empty_sections_forward(&mut self) {
        let sections = self.catalog.sections();
        while self.section < sections.len()
            && self.question >= sections[self.section].questions.len()
        {
            self.section += 1;
            self.question = 0;
        }
    }

    fn first_position(&self) -> Option<(usize, usize)> {
        self.catalog
            .sections()
            .iter()
            .position(|section| !section.questions.is_empty())
            .map(|section| (section, 0))
    }

    fn last_position(&self) -> Option<(usize, usize)> {
        self.catalog
            .sections()
            .iter()
            .rposition(|section| !section.questions.is_empty())
            .map(|section| (section, self.catalog.sections()[section].questions.len() - 1))
    }
}
