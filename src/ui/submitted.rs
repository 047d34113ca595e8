//! Summary of the last accepted submission

use crate::app::App;
use crate::state::quiz::{QuizDocument, CONTENT_TYPE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the submitted quiz: receipt on top, decoded questions below
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(submission) = app.state.last_submission.as_ref() else {
        let empty = Paragraph::new("Nothing submitted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let receipt = &submission.receipt;
    let label = Style::default().fg(Color::DarkGray);
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Saved to  ", label),
            Span::styled(
                receipt.location.display().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Size      ", label),
            Span::raw(format!("{} bytes, {CONTENT_TYPE}", receipt.bytes)),
        ]),
        Line::from(vec![
            Span::styled("At        ", label),
            Span::raw(receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]),
    ])
    .block(
        Block::default()
            .title(" Submitted ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(header, chunks[0]);

    let body = Paragraph::new(document_lines(&submission.document))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", submission.document.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(body, chunks[1]);
}

fn document_lines(document: &QuizDocument) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Language: {}  ·  {} question(s)  ·  {} option(s)",
            document.language,
            document.questions.len(),
            document.option_count()
        ),
        Style::default().fg(Color::DarkGray),
    ))];

    for question in &document.questions {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Q{}  {}", question.index, question.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for translation in &question.translations {
            lines.push(Line::from(Span::styled(
                format!("    {}: {}", translation.language.code(), translation.text),
                Style::default().fg(Color::Gray),
            )));
        }
        for option in &question.options {
            let (marker, color) = if option.is_correct {
                ("[x]", Color::Green)
            } else {
                ("[ ]", Color::DarkGray)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {marker} "), Style::default().fg(color)),
                Span::raw(format!("O{}  {}", option.index, option.text)),
            ]));
            let translated: Vec<String> = option
                .translations
                .iter()
                .map(|t| format!("{}: {}", t.language.code(), t.text))
                .collect();
            lines.push(Line::from(Span::styled(
                format!("        {}", translated.join("  ·  ")),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    lines
}
