//! Question and option authoring column

use super::field_renderer::{draw_field, draw_field_column, FieldRow, FIELD_HEIGHT};
use crate::state::quiz::{FieldRef, QuizForm};
use crate::state::QuizEditor;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Rows of the questions column in document order
pub fn question_rows(form: &QuizForm) -> Vec<FieldRow<'_>> {
    let mut rows = Vec::new();
    for question in form.questions() {
        rows.push(FieldRow::new(
            FieldRef::QuestionTitle(question.id),
            &question.title,
            0,
        ));
        for option in question.options() {
            rows.push(
                FieldRow::new(FieldRef::OptionText(question.id, option.id), &option.text, 1)
                    .with_marker(option.is_correct()),
            );
        }
    }
    rows
}

/// Draw quiz title, language and the questions column
pub fn draw_quiz_form(frame: &mut Frame, area: Rect, editor: &QuizEditor) {
    let form = editor.form();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Title + language
            Constraint::Min(0),               // Questions
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(chunks[0]);

    draw_field(
        frame,
        header[0],
        &form.title,
        editor.is_focused(FieldRef::QuizTitle),
    );
    draw_field(
        frame,
        header[1],
        &form.language,
        editor.is_focused(FieldRef::Language),
    );

    let rows = question_rows(form);
    let title = format!("Questions ({})", form.question_count());
    draw_field_column(frame, chunks[1], &title, &rows, editor);
}
