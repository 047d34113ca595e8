//! UI module for rendering the TUI

mod components;
mod error_panel;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area(), &app.state.violations);

    match &app.state.current_view {
        View::Compose => {
            let (authoring, translations) = layout::split_compose(screen.main);
            forms::draw_quiz_form(frame, authoring, &app.state.editor);
            forms::draw_translations(frame, translations, &app.state.editor);
        }
        View::Submitted => submitted::draw(frame, screen.main, app),
    }

    if let Some(area) = screen.errors {
        error_panel::draw(frame, area, &app.state.violations, app.state.violation_scroll);
    }

    layout::draw_status_bar(frame, screen.status, app);

    // Modal errors render last so they sit on top
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.pending_errors());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComposerConfig;
    use crate::submit::MockSubmissionSink;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tokio_test::block_on;

    fn test_app() -> App {
        let mut sink = MockSubmissionSink::new();
        sink.expect_describe().return_const("submissions".to_string());
        sink.expect_submit().never();
        App::new(&ComposerConfig::default(), Box::new(sink))
    }

    fn ctrl(app: &mut App, c: char) {
        block_on(app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))).unwrap();
    }

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_form_shows_hint_and_sections() {
        let text = screen_text(&render(&test_app()));
        assert!(text.contains("No questions yet"));
        assert!(text.contains("French translations"));
        assert!(text.contains("Arabic translations"));
        assert!(!text.contains("Cannot submit"));
    }

    #[test]
    fn test_added_question_is_mirrored_in_both_sections() {
        let mut app = test_app();
        ctrl(&mut app, 'n');
        ctrl(&mut app, 'o');

        let text = screen_text(&render(&app));
        assert!(text.contains("Q1"));
        assert!(text.contains("O1"));
        assert!(text.contains("Traduction (Fr) Q1"));
        assert!(text.contains("Traduction (Ar) Q1"));
        assert!(text.contains("Option (Fr) O1"));
        assert!(text.contains("Option (Ar) O1"));
    }

    #[test]
    fn test_rejected_submit_shows_error_panel() {
        let mut app = test_app();
        ctrl(&mut app, 's');

        let text = screen_text(&render(&app));
        assert!(text.contains("Cannot submit"));
        assert!(text.contains("Quiz title is required."));
        assert!(text.contains("The quiz must have at least one question."));
    }

    fn press(app: &mut App, code: KeyCode) {
        block_on(app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    /// Three questions with one option each and no translations
    fn submit_broken_quiz(app: &mut App) {
        for c in "Quiz".chars() {
            press(app, KeyCode::Char(c));
        }
        for _ in 0..3 {
            ctrl(app, 'n');
            ctrl(app, 'o');
        }
        ctrl(app, 's');
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn test_every_violation_is_on_screen() {
        let mut app = test_app();
        submit_broken_quiz(&mut app);
        assert_eq!(app.state.violations.len(), 12);

        let text = screen_text(&render(&app));
        let missing: Vec<_> = app
            .state
            .violations
            .iter()
            .filter(|m| !text.contains(m.as_str()))
            .collect();
        assert!(missing.is_empty(), "not rendered: {missing:?}");
    }

    #[test]
    fn test_small_screen_points_at_hidden_violations() {
        let mut app = test_app();
        submit_broken_quiz(&mut app);

        let text = render_sized(&app, 80, 20);
        assert!(text.contains(app.state.violations[0].as_str()));
        assert!(text.contains("… and 5 more"));
        assert!(!text.contains(app.state.violations[11].as_str()));

        for _ in 0..11 {
            press(&mut app, KeyCode::PageDown);
        }
        let text = render_sized(&app, 80, 20);
        assert!(text.contains(app.state.violations[11].as_str()));
        assert!(text.contains("… 11 above"));
    }

    #[test]
    fn test_error_dialog_overlays_form() {
        let mut app = test_app();
        app.push_error("Failed to submit quiz: disk full");

        let text = screen_text(&render(&app));
        assert!(text.contains("disk full"));
    }
}
