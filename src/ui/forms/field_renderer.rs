//! Field rendering utilities for forms

use crate::state::quiz::FieldRef;
use crate::state::{FormField, QuizEditor};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Field height in rows (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Indentation applied per nesting level
const INDENT: u16 = 2;

/// One field in a rendered column
pub struct FieldRow<'a> {
    pub field_ref: FieldRef,
    pub field: &'a FormField,
    /// Nesting level (0 for top-level fields, 1 for options)
    pub depth: u16,
    /// Correctness marker state for option rows
    pub marker: Option<bool>,
}

impl<'a> FieldRow<'a> {
    pub fn new(field_ref: FieldRef, field: &'a FormField, depth: u16) -> Self {
        Self {
            field_ref,
            field,
            depth,
            marker: None,
        }
    }

    pub fn with_marker(mut self, checked: bool) -> Self {
        self.marker = Some(checked);
        self
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    draw_field_with_marker(frame, area, field, is_active, None);
}

fn draw_field_with_marker(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    marker: Option<bool>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut title = vec![Span::raw(format!(" {} ", field.label))];
    if let Some(checked) = marker {
        let (symbol, color) = if checked {
            ("[x] correct ", Color::Green)
        } else {
            ("[ ] ", Color::DarkGray)
        };
        title.push(Span::styled(
            symbol,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Rows to show so that `selected` stays visible, keeping it near the top
/// third when scrolling
pub fn visible_window(total: usize, selected: Option<usize>, capacity: usize) -> Range<usize> {
    if capacity == 0 {
        return 0..0;
    }
    if total <= capacity {
        return 0..total;
    }
    let selected = selected.unwrap_or(0).min(total - 1);
    let lead = capacity / 3;
    let start = selected.saturating_sub(lead).min(total - capacity);
    start..start + capacity
}

/// Draw a titled, scrolling column of fields. The focused row stays visible.
pub fn draw_field_column(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[FieldRow],
    editor: &QuizEditor,
) {
    let has_focus = rows.iter().any(|r| editor.is_focused(r.field_ref));
    let border_color = if has_focus {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if rows.is_empty() {
        let hint = Paragraph::new("No questions yet. Press Ctrl+N to add one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    let capacity = (inner.height / FIELD_HEIGHT) as usize;
    let selected = rows.iter().position(|r| editor.is_focused(r.field_ref));
    let window = visible_window(rows.len(), selected, capacity);

    for (slot, row) in rows[window].iter().enumerate() {
        let offset = (row.depth * INDENT).min(inner.width.saturating_sub(1));
        let row_area = Rect {
            x: inner.x + offset,
            y: inner.y + slot as u16 * FIELD_HEIGHT,
            width: inner.width.saturating_sub(offset),
            height: FIELD_HEIGHT,
        };
        draw_field_with_marker(
            frame,
            row_area,
            row.field,
            editor.is_focused(row.field_ref),
            row.marker,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_everything() {
        assert_eq!(visible_window(3, Some(2), 5), 0..3);
    }

    #[test]
    fn test_window_zero_capacity() {
        assert_eq!(visible_window(3, Some(1), 0), 0..0);
    }

    #[test]
    fn test_window_scrolls_to_selection() {
        assert_eq!(visible_window(10, Some(0), 3), 0..3);
        assert_eq!(visible_window(10, Some(5), 3), 4..7);
        assert_eq!(visible_window(10, Some(9), 3), 7..10);
    }

    #[test]
    fn test_window_without_selection_starts_at_top() {
        assert_eq!(visible_window(10, None, 4), 0..4);
    }
}
