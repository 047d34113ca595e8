//! Wire field names and display labels

use super::{Locale, OptionId, QuestionId};

pub const QUIZ_TITLE: &str = "title";
pub const LANGUAGE: &str = "language";

pub fn question_title(question: QuestionId) -> String {
    format!("questions[{question}][title]")
}

pub fn option_text(question: QuestionId, option: OptionId) -> String {
    format!("questions[{question}][options][{option}][text]")
}

pub fn option_is_correct(question: QuestionId, option: OptionId) -> String {
    format!("questions[{question}][options][{option}][is_correct]")
}

pub fn question_translation(question: QuestionId, locale: Locale) -> String {
    format!("translations[{question}][{}]", locale.code())
}

pub fn option_translation(question: QuestionId, option: OptionId, locale: Locale) -> String {
    format!("translations[{question}][options][{option}][{}]", locale.code())
}

pub fn question_label(question: QuestionId) -> String {
    format!("Q{question}")
}

pub fn option_label(option: OptionId) -> String {
    format!("O{option}")
}

pub fn question_translation_label(question: QuestionId, locale: Locale) -> String {
    format!("Traduction ({}) Q{question}", locale.label())
}

pub fn option_translation_label(option: OptionId, locale: Locale) -> String {
    format!("Option ({}) O{option}", locale.label())
}

/// Split `questions[3][options][7][text]` into `["questions", "3", "options", "7", "text"]`.
/// Returns None for names that are not bracket paths.
pub fn split_path(name: &str) -> Option<Vec<&str>> {
    let (head, mut rest) = name.split_once('[')?;
    let mut segments = vec![head];
    loop {
        let (segment, tail) = rest.split_once(']')?;
        segments.push(segment);
        if tail.is_empty() {
            return Some(segments);
        }
        rest = tail.strip_prefix('[')?;
    }
}
