//! Validation error panel shown below the form after a blocked submit

use super::components::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border rows (and columns) around the messages
const BORDER: u16 = 2;

fn wrap_messages(messages: &[String], width: usize) -> Vec<Vec<String>> {
    messages.iter().map(|m| wrap_text(m, width)).collect()
}

/// Rows the panel needs to show every message wrapped at `width` columns,
/// borders included, capped at `max`
pub fn panel_height(messages: &[String], width: u16, max: u16) -> u16 {
    if messages.is_empty() {
        return 0;
    }
    let inner = width.saturating_sub(BORDER) as usize;
    let lines: usize = wrap_messages(messages, inner).iter().map(Vec::len).sum();
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_add(BORDER)
        .min(max)
}

/// What fits in the panel for a given scroll position
#[derive(Debug, PartialEq, Eq)]
pub struct PanelView {
    pub lines: Vec<String>,
    /// Set when some messages are scrolled out of view
    pub overflow: Option<String>,
}

/// Lay out messages starting at message `scroll`. When they do not all fit,
/// the last row names how many are hidden above and below.
pub fn panel_view(messages: &[String], width: usize, capacity: usize, scroll: usize) -> PanelView {
    let wrapped = wrap_messages(messages, width);
    let total: usize = wrapped.iter().map(Vec::len).sum();
    if total <= capacity {
        return PanelView {
            lines: wrapped.into_iter().flatten().collect(),
            overflow: None,
        };
    }

    let start = scroll.min(messages.len().saturating_sub(1));
    let room = capacity.saturating_sub(1);
    let mut lines = Vec::new();
    let mut shown = 0;
    for message in &wrapped[start..] {
        if lines.len() + message.len() > room {
            if shown == 0 {
                // A message taller than the panel is cut, not skipped
                lines.extend(message.iter().take(room).cloned());
                shown = 1;
            }
            break;
        }
        lines.extend(message.iter().cloned());
        shown += 1;
    }

    let below = messages.len() - start - shown;
    let overflow = match (start, below) {
        (0, 0) => None,
        (0, below) => Some(format!("… and {below} more (PgDn to scroll)")),
        (above, 0) => Some(format!("… {above} above (PgUp to scroll)")),
        (above, below) => Some(format!("… {above} above, {below} more below (PgUp/PgDn)")),
    };
    PanelView { lines, overflow }
}

/// Draw the messages in the order they were collected, one or more rows each
pub fn draw(frame: &mut Frame, area: Rect, messages: &[String], scroll: usize) {
    let block = Block::default()
        .title(format!(" Cannot submit ({}) ", messages.len()))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = panel_view(messages, inner.width as usize, inner.height as usize, scroll);
    let mut lines: Vec<Line> = view.lines.into_iter().map(Line::from).collect();
    if let Some(overflow) = view.overflow {
        lines.push(Line::from(Span::styled(
            overflow,
            Style::default().fg(Color::Yellow),
        )));
    }

    let panel = Paragraph::new(lines).style(Style::default().fg(Color::Red));
    frame.render_widget(panel, inner);
}
