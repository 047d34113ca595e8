//! French and Arabic translation sections

use super::field_renderer::{draw_field_column, FieldRow};
use crate::state::quiz::{FieldRef, LocaleSection};
use crate::state::QuizEditor;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Rows of one locale section in document order
pub fn translation_rows(section: &LocaleSection) -> Vec<FieldRow<'_>> {
    let locale = section.locale;
    let mut rows = Vec::new();
    for entry in section.questions() {
        rows.push(FieldRow::new(
            FieldRef::QuestionTranslation(entry.question, locale),
            &entry.title,
            0,
        ));
        for (option, field) in entry.options() {
            rows.push(FieldRow::new(
                FieldRef::OptionTranslation(entry.question, option, locale),
                field,
                1,
            ));
        }
    }
    rows
}

/// Draw one section per locale, stacked vertically
pub fn draw_translations(frame: &mut Frame, area: Rect, editor: &QuizEditor) {
    let sections = editor.form().translations().sections();
    let constraints: Vec<Constraint> = sections
        .iter()
        .map(|_| Constraint::Ratio(1, sections.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (section, chunk) in sections.iter().zip(chunks.iter()) {
        let rows = translation_rows(section);
        let title = format!(
            "{} ({} questions, {} options)",
            section.locale.section_title(),
            section.question_count(),
            section.option_count()
        );
        draw_field_column(frame, *chunk, &title, &rows, editor);
    }
}
