//! Application state and core logic

use crate::config::ComposerConfig;
use crate::state::quiz::{validation, QuizDocument, Submission};
use crate::state::{AcceptedSubmission, AppState, Form, View};
use crate::submit::SubmissionSink;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receiver of accepted submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    copy_on_submit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ComposerConfig, sink: Box<dyn SubmissionSink>) -> Self {
        tracing::info!(destination = %sink.describe(), "authoring session started");
        Self {
            state: AppState::new(config.language()),
            sink,
            quit: false,
            status_message: None,
            copy_on_submit: config.copy_on_submit(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Where accepted submissions go
    pub fn destination(&self) -> String {
        self.sink.describe()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Compose => self.handle_compose_key(key).await?,
            View::Submitted => self.handle_submitted_key(key),
        }

        Ok(())
    }

    /// Handle keys while authoring. The focused field tells every command
    /// which question or option it applies to.
    async fn handle_compose_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.editor.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.editor.prev_field(),
            KeyCode::PageDown => self.state.scroll_violations_down(),
            KeyCode::PageUp => self.state.scroll_violations_up(),
            KeyCode::Char('n') if ctrl => {
                self.state.editor.add_question();
            }
            KeyCode::Char('o') if ctrl => self.add_option_to_focused(),
            KeyCode::Char('t') if ctrl => self.toggle_focused(),
            KeyCode::Char('x') if ctrl => self.delete_focused(),
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_submission()
            }
            KeyCode::Char(c) if !ctrl => self.state.editor.input_char(c),
            KeyCode::Backspace => self.state.editor.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the submitted view
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.state.reset_session();
                self.status_message = Some("New quiz started".to_string());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_submission()
            }
            _ => {}
        }
    }

    fn add_option_to_focused(&mut self) {
        let Some(question) = self.state.editor.focused_question() else {
            self.status_message = Some("Focus a question to add an option".to_string());
            return;
        };
        if let Err(err) = self.state.editor.add_option(question) {
            tracing::warn!(%err, "add option rejected");
            self.status_message = Some(format!("Cannot add option: {err}"));
        }
    }

    fn toggle_focused(&mut self) {
        let Some((question, option)) = self.state.editor.focused_option() else {
            self.status_message = Some("Focus an option to mark it correct".to_string());
            return;
        };
        let result = self.state.editor.toggle_correct(question, option);
        let name = self
            .state
            .editor
            .form()
            .question(question)
            .and_then(|q| q.option(option))
            .map(|o| o.text.as_text().trim())
            .filter(|text| !text.is_empty())
            .map_or_else(|| format!("Option {option}"), |text| format!("\"{text}\""));
        match result {
            Ok(true) => self.status_message = Some(format!("{name} marked correct")),
            Ok(false) => self.status_message = Some(format!("{name} unmarked")),
            Err(err) => {
                tracing::warn!(%err, "toggle rejected");
                self.status_message = Some(format!("Cannot toggle: {err}"));
            }
        }
    }

    fn delete_focused(&mut self) {
        let editor = &mut self.state.editor;
        let result = if let Some((question, option)) = editor.focused_option() {
            editor
                .delete_option(question, option)
                .map(|()| format!("Option {option} deleted"))
        } else if let Some(question) = editor.focused_question() {
            editor
                .delete_question(question)
                .map(|()| format!("Question {question} deleted"))
        } else {
            Ok("Nothing to delete here".to_string())
        };

        match result {
            Ok(message) => self.status_message = Some(message),
            Err(err) => {
                tracing::warn!(%err, "delete rejected");
                self.status_message = Some(format!("Cannot delete: {err}"));
            }
        }
    }

    /// Run the submission guard and hand an accepted payload to the sink
    pub async fn submit(&mut self) {
        self.state.clear_violations();

        let payload = match validation::submit(self.state.editor.form()) {
            Submission::Rejected(violations) => {
                self.status_message = Some(format!(
                    "Submission blocked: {} problem(s) to fix",
                    violations.len()
                ));
                self.state.show_violations(&violations);
                return;
            }
            Submission::Accepted(payload) => payload,
        };

        match self.sink.submit(&payload).await {
            Ok(receipt) => {
                let body = payload.to_urlencoded();
                self.status_message = Some(format!("Quiz saved to {}", receipt.location.display()));
                self.state.last_submission = Some(AcceptedSubmission {
                    receipt,
                    document: QuizDocument::from_payload(&payload),
                    body,
                });
                self.state.current_view = View::Submitted;
                if self.copy_on_submit {
                    self.copy_last_submission();
                }
            }
            Err(err) => self.push_error(format!("Failed to submit quiz: {err:#}")),
        }
    }

    fn copy_last_submission(&mut self) {
        let Some(body) = self.state.last_submission.as_ref().map(|s| s.body.clone()) else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return;
        };
        match self.copy_to_clipboard(&body) {
            Ok(()) => self.status_message = Some("Form body copied".to_string()),
            Err(err) => self.push_error(format!("Failed to copy: {err:#}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::quiz::{FieldRef, Locale, OptionId, QuestionId};
    use crate::submit::{MockSubmissionSink, SubmissionReceipt};
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tokio_test::block_on;
    use uuid::Uuid;

    fn app_with(sink: MockSubmissionSink) -> App {
        App::new(&ComposerConfig::default(), Box::new(sink))
    }

    fn quiet_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_describe().return_const("mock".to_string());
        sink
    }

    fn press(app: &mut App, code: KeyCode) {
        block_on(app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        block_on(app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill(app: &mut App, field: FieldRef, text: &str) {
        assert!(app.state.editor.focus(field));
        type_text(app, text);
    }

    /// Author a complete quiz through key presses only
    fn author_valid_quiz(app: &mut App) {
        type_text(app, "Signs");
        ctrl(app, 'n');
        type_text(app, "Stop colour?");
        ctrl(app, 'o');
        type_text(app, "Red");
        ctrl(app, 't');
        ctrl(app, 'o');
        type_text(app, "Blue");

        let q = QuestionId(1);
        fill(app, FieldRef::QuestionTranslation(q, Locale::Fr), "Couleur ?");
        fill(app, FieldRef::QuestionTranslation(q, Locale::Ar), "لون؟");
        for o in [OptionId(1), OptionId(2)] {
            fill(app, FieldRef::OptionTranslation(q, o, Locale::Fr), "fr");
            fill(app, FieldRef::OptionTranslation(q, o, Locale::Ar), "ar");
        }
    }

    #[test]
    fn test_rejected_submit_never_reaches_sink() {
        let mut sink = quiet_sink();
        sink.expect_submit().never();
        let mut app = app_with(sink);

        ctrl(&mut app, 's');

        assert_eq!(
            app.state.violations,
            vec![
                "Quiz title is required.",
                "The quiz must have at least one question.",
            ]
        );
        assert_eq!(app.state.current_view, View::Compose);
    }

    #[test]
    fn test_accepted_submit_calls_sink_once() {
        let mut sink = quiet_sink();
        sink.expect_submit()
            .times(1)
            .withf(|payload| {
                payload.get("questions[1][options][1][is_correct]") == Some("true")
                    && payload.get("questions[1][options][2][is_correct]") == Some("false")
            })
            .returning(|payload| {
                Ok(SubmissionReceipt {
                    id: Uuid::new_v4(),
                    location: PathBuf::from("out/quiz.form"),
                    bytes: payload.to_urlencoded().len(),
                    submitted_at: Utc::now(),
                })
            });
        let mut app = app_with(sink);

        author_valid_quiz(&mut app);
        ctrl(&mut app, 's');

        assert!(app.state.violations.is_empty());
        assert_eq!(app.state.current_view, View::Submitted);
        let submission = app.state.last_submission.as_ref().unwrap();
        assert_eq!(submission.document.title, "Signs");
        assert_eq!(submission.document.questions[0].options[0].text, "Red");
    }

    #[test]
    fn test_violations_cleared_on_next_attempt() {
        let mut sink = quiet_sink();
        sink.expect_submit().returning(|_| {
            Ok(SubmissionReceipt {
                id: Uuid::new_v4(),
                location: PathBuf::from("out/quiz.form"),
                bytes: 0,
                submitted_at: Utc::now(),
            })
        });
        let mut app = app_with(sink);

        ctrl(&mut app, 's');
        assert!(!app.state.violations.is_empty());
        author_valid_quiz(&mut app);
        ctrl(&mut app, 's');
        assert!(app.state.violations.is_empty());
    }

    #[test]
    fn test_sink_failure_shows_error_and_keeps_form() {
        let mut sink = quiet_sink();
        sink.expect_submit()
            .returning(|_| Err(anyhow::anyhow!("disk full")));
        let mut app = app_with(sink);

        author_valid_quiz(&mut app);
        ctrl(&mut app, 's');

        assert!(app.state.current_error().unwrap().contains("disk full"));
        assert_eq!(app.state.current_view, View::Compose);
        assert_eq!(app.state.editor.form().question_count(), 1);

        // Any other key is swallowed by the modal dialog
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.state.editor.form().title.as_text(), "Signs");
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.has_errors());
    }

    #[test]
    fn test_toggle_follows_focus() {
        let mut app = app_with(quiet_sink());
        ctrl(&mut app, 'n');
        ctrl(&mut app, 'o');
        ctrl(&mut app, 'o');
        ctrl(&mut app, 'o');

        // Focus is on option 3; the toggle must not touch options 1 or 2
        ctrl(&mut app, 't');
        let form = app.state.editor.form();
        let flags: Vec<_> = form
            .question(QuestionId(1))
            .unwrap()
            .options()
            .map(|o| o.is_correct())
            .collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_toggle_twice_restores_false() {
        let mut app = app_with(quiet_sink());
        ctrl(&mut app, 'n');
        ctrl(&mut app, 'o');
        ctrl(&mut app, 't');
        ctrl(&mut app, 't');
        let option = app
            .state
            .editor
            .form()
            .question(QuestionId(1))
            .unwrap()
            .option(OptionId(1))
            .unwrap()
            .is_correct
            .wire_value();
        assert_eq!(option, "false");
    }

    #[test]
    fn test_add_option_needs_focused_question() {
        let mut app = app_with(quiet_sink());
        ctrl(&mut app, 'o');
        assert_eq!(
            app.status_message.as_deref(),
            Some("Focus a question to add an option")
        );
    }

    #[test]
    fn test_delete_from_translation_removes_owner() {
        let mut app = app_with(quiet_sink());
        ctrl(&mut app, 'n');
        ctrl(&mut app, 'o');
        let q = QuestionId(1);

        assert!(app
            .state
            .editor
            .focus(FieldRef::OptionTranslation(q, OptionId(1), Locale::Ar)));
        ctrl(&mut app, 'x');
        let form = app.state.editor.form();
        assert_eq!(form.question(q).unwrap().option_count(), 0);
        assert_eq!(form.translations().section(Locale::Fr).option_count(), 0);
        assert_eq!(form.translations().section(Locale::Fr).question_count(), 1);

        assert!(app
            .state
            .editor
            .focus(FieldRef::QuestionTranslation(q, Locale::Fr)));
        ctrl(&mut app, 'x');
        assert_eq!(app.state.editor.form().question_count(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Question 1 deleted"));
    }

    #[test]
    fn test_submitted_view_starts_fresh_session() {
        let mut app = app_with(quiet_sink());
        ctrl(&mut app, 'n');
        ctrl(&mut app, 'n');
        app.state.current_view = View::Submitted;

        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state.current_view, View::Compose);
        assert_eq!(app.state.editor.form().question_count(), 0);
        ctrl(&mut app, 'n');
        assert_eq!(app.state.editor.focused_question(), Some(QuestionId(1)));
    }

    #[test]
    fn test_quit_flag() {
        let mut app = app_with(quiet_sink());
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
        assert_eq!(app.destination(), "mock");
    }
}
