use induct_services::{QuizResult, QuizService};

use crate::views::ViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Continue,
    Completed(QuizResult),
}

/// View model over the in-memory quiz stepping.
pub struct QuizVm {
    quiz: QuizService,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizService) -> Self {
        Self { quiz }
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.quiz.current_question().map(|q| q.text())
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        self.quiz
            .current_question()
            .map_or(&[], |q| q.options())
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Question {} of {}",
            (self.quiz.answered_count() + 1).min(self.quiz.total_questions()),
            self.quiz.total_questions()
        )
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.quiz.is_complete()
    }

    #[must_use]
    pub fn result(&self) -> QuizResult {
        self.quiz.result()
    }

    /// Record an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the quiz is already complete or the
    /// option index is invalid.
    pub fn answer(&mut self, selected: usize) -> Result<QuizStep, ViewError> {
        self.quiz
            .answer_current(selected)
            .map_err(|_| ViewError::Unknown)?;
        if self.quiz.is_complete() {
            Ok(QuizStep::Completed(self.quiz.result()))
        } else {
            Ok(QuizStep::Continue)
        }
    }
}
