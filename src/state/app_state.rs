//! Application state definitions

use super::forms::QuizEditor;
use super::quiz::{validation, QuizDocument, QuizForm, Violation};
use crate::submit::SubmissionReceipt;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Compose,
    /// Summary of the last accepted submission
    Submitted,
}

/// The last submission that made it through the guard and the sink
#[derive(Debug, Clone)]
pub struct AcceptedSubmission {
    pub receipt: SubmissionReceipt,
    pub document: QuizDocument,
    pub body: String,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub editor: QuizEditor,
    /// Validation messages of the last rejected submit; empty means hidden
    pub violations: Vec<String>,
    /// First message shown when the panel cannot hold them all
    pub violation_scroll: usize,
    /// Modal errors (sink, clipboard), shown one at a time
    errors: VecDeque<String>,
    pub last_submission: Option<AcceptedSubmission>,
    /// Language pre-filled into every fresh session
    pub default_language: String,
}

impl AppState {
    pub fn new(default_language: impl Into<String>) -> Self {
        let default_language = default_language.into();
        Self {
            editor: QuizEditor::new(QuizForm::new(&default_language)),
            default_language,
            ..Default::default()
        }
    }

    /// Start over with an empty form; counters restart at 1
    pub fn reset_session(&mut self) {
        self.editor = QuizEditor::new(QuizForm::new(&self.default_language));
        self.violations.clear();
        self.current_view = View::Compose;
    }

    pub fn show_violations(&mut self, violations: &[Violation]) {
        self.violations = validation::messages(violations);
        self.violation_scroll = 0;
    }

    pub fn clear_violations(&mut self) {
        self.violations.clear();
        self.violation_scroll = 0;
    }

    pub fn scroll_violations_down(&mut self) {
        if self.violation_scroll + 1 < self.violations.len() {
            self.violation_scroll += 1;
        }
    }

    pub fn scroll_violations_up(&mut self) {
        self.violation_scroll = self.violation_scroll.saturating_sub(1);
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Errors queued behind the one currently shown
    pub fn pending_errors(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::quiz::QuestionId;

    #[test]
    fn test_new_state_uses_language() {
        let state = AppState::new("fr");
        assert_eq!(state.editor.form().language.as_text(), "fr");
        assert_eq!(state.current_view, View::Compose);
        assert!(state.violations.is_empty());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        assert_eq!(state.pending_errors(), 1);
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_violations_rendered_as_messages() {
        let mut state = AppState::default();
        state.show_violations(&[Violation::MissingTitle, Violation::TooFewOptions(QuestionId(3))]);
        assert_eq!(
            state.violations,
            vec![
                "Quiz title is required.".to_string(),
                "Question 3 must have at least two options.".to_string()
            ]
        );
        state.clear_violations();
        assert!(state.violations.is_empty());
    }

    #[test]
    fn test_violation_scroll_stays_in_range() {
        let mut state = AppState::default();
        state.show_violations(&[Violation::MissingTitle, Violation::NoQuestions]);
        state.scroll_violations_up();
        assert_eq!(state.violation_scroll, 0);
        state.scroll_violations_down();
        state.scroll_violations_down();
        assert_eq!(state.violation_scroll, 1);

        state.show_violations(&[Violation::MissingTitle]);
        assert_eq!(state.violation_scroll, 0);
    }

    #[test]
    fn test_reset_session_restarts_counters() {
        let mut state = AppState::new("en");
        state.editor.add_question();
        state.editor.add_question();
        state.current_view = View::Submitted;
        state.reset_session();
        assert_eq!(state.editor.form().question_count(), 0);
        assert_eq!(state.editor.add_question(), QuestionId(1));
        assert_eq!(state.current_view, View::Compose);
    }
}
