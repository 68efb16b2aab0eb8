use std::fmt;

use induct_core::model::{PASS_MARK, Question, QuestionId, QuizOutcome, Score, SessionId};

use crate::error::QuizError;

/// One answered question within a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAnswer {
    pub question_id: QuestionId,
    pub selected: usize,
    pub correct: bool,
}

/// Final quiz result, ready to be carried to the result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: Score,
    pub outcome: QuizOutcome,
}

/// In-memory stepping through a session's question set.
///
/// Questions are answered sequentially; the quiz completes when the last one
/// has been answered and the score is the percentage of correct answers.
pub struct QuizService {
    session_id: SessionId,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<QuizAnswer>,
}

impl QuizService {
    #[must_use]
    pub fn new(session_id: SessionId, questions: Vec<Question>) -> Self {
        Self {
            session_id,
            questions,
            current: 0,
            answers: Vec::new(),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Total number of questions in this quiz.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions already answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.answers
            .iter()
            .filter(|answer| answer.correct)
            .count() as u32
    }

    /// Record the selected option for the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if every question has been answered and
    /// `QuizError::InvalidOption` if `selected` is not a valid option index.
    pub fn answer_current(&mut self, selected: usize) -> Result<&QuizAnswer, QuizError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(QuizError::Completed);
        };
        if selected >= question.options().len() {
            return Err(QuizError::InvalidOption { index: selected });
        }

        self.answers.push(QuizAnswer {
            question_id: question.id(),
            selected,
            correct: question.is_correct(selected),
        });
        self.current += 1;

        self.answers.last().ok_or(QuizError::Completed)
    }

    /// Score of the answers recorded so far; final once `is_complete`.
    #[must_use]
    pub fn result(&self) -> QuizResult {
        let total = self.questions.len() as u32;
        let score = Score::from_counts(self.correct_count(), total);
        let outcome = if score.value() >= PASS_MARK {
            QuizOutcome::Passed
        } else {
            QuizOutcome::Failed
        };
        QuizResult { score, outcome }
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("session_id", &self.session_id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .finish_non_exhaustive()
    }
}
