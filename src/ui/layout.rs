//! Layout components (content area, error panel, status bar)

use super::error_panel;
use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};


/// Areas of one frame
pub struct ScreenLayout {
    pub main: Rect,
    /// Present only while there are validation messages to show
    pub errors: Option<Rect>,
    pub status: Rect,
}

/// Split the screen into content, an optional error panel and the status row.
/// The panel grows with its messages up to half the screen.
pub fn create_layout(area: Rect, violations: &[String]) -> ScreenLayout {
    let panel_height = error_panel::panel_height(violations, area.width, area.height / 2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),               // Content
            Constraint::Length(panel_height), // Error panel
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    ScreenLayout {
        main: chunks[0],
        errors: (panel_height > 0).then_some(chunks[1]),
        status: chunks[2],
    }
}

/// Split the compose view into the authoring and translation columns
pub fn split_compose(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(&app.state.current_view)),
        Style::default().fg(Color::Gray),
    )];

    if app.state.current_view == View::Compose {
        if let Some(field) = app.state.editor.focused_field() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(&field.label, Style::default().fg(Color::Cyan)));
        }
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("→ {}", app.destination()),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Compose => format!(
            "Tab:next  ^N:question  ^O:option  ^T:correct  ^X:delete  {SUBMIT_SHORTCUT}:submit"
        ),
        View::Submitted => format!("Esc:new quiz  {COPY_SHORTCUT}:copy body"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(count: usize) -> Vec<String> {
        (1..=count)
            .map(|q| format!("All translations for question {q} must be filled."))
            .collect()
    }

    #[test]
    fn test_layout_without_violations_has_no_panel() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), &[]);
        assert!(layout.errors.is_none());
        assert_eq!(layout.main.height, 23);
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_layout_reserves_panel_rows() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), &messages(3));
        assert_eq!(layout.errors, Some(Rect::new(0, 18, 80, 5)));
        assert_eq!(layout.main.height, 18);
    }

    #[test]
    fn test_panel_grows_to_half_the_screen() {
        let layout = create_layout(Rect::new(0, 0, 120, 40), &messages(12));
        assert_eq!(layout.errors.map(|r| r.height), Some(14));

        let layout = create_layout(Rect::new(0, 0, 120, 24), &messages(30));
        assert_eq!(layout.errors.map(|r| r.height), Some(12));
    }

    #[test]
    fn test_hints_name_the_shortcuts() {
        assert!(get_view_hints(&View::Compose).contains(SUBMIT_SHORTCUT));
        assert!(get_view_hints(&View::Submitted).contains(COPY_SHORTCUT));
    }
}
