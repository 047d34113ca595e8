//! Structured view of a submitted quiz, rebuilt from the form payload

use super::encoding::FormPayload;
use super::names::{self, split_path};
use super::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedText {
    pub language: Locale,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOption {
    pub index: u32,
    pub text: String,
    pub is_correct: bool,
    pub translations: Vec<TranslatedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentQuestion {
    pub index: u32,
    pub title: String,
    pub translations: Vec<TranslatedText>,
    pub options: Vec<DocumentOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub title: String,
    pub language: String,
    pub questions: Vec<DocumentQuestion>,
}

impl QuizDocument {
    /// Rebuild the quiz from submitted pairs.
    ///
    /// Questions are the indices that carry a `[title]` key, options the
    /// indices under a question that carry a `[text]` key, both sorted
    /// numerically. Missing values read as empty strings; a correctness
    /// flag is set only by the exact value `"true"`.
    pub fn from_payload(payload: &FormPayload) -> Self {
        let value = |name: &str| payload.get(name).unwrap_or_default().to_string();

        let question_indices: BTreeSet<u32> = payload
            .pairs()
            .iter()
            .filter_map(|(name, _)| match split_path(name)?.as_slice() {
                ["questions", index, "title"] => index.parse().ok(),
                _ => None,
            })
            .collect();

        let questions = question_indices
            .into_iter()
            .map(|q| {
                let option_indices: BTreeSet<u32> = payload
                    .pairs()
                    .iter()
                    .filter_map(|(name, _)| match split_path(name)?.as_slice() {
                        ["questions", index, "options", option, "text"]
                            if index.parse::<u32>().ok() == Some(q) =>
                        {
                            option.parse().ok()
                        }
                        _ => None,
                    })
                    .collect();

                let options = option_indices
                    .into_iter()
                    .map(|o| DocumentOption {
                        index: o,
                        text: value(&format!("questions[{q}][options][{o}][text]")),
                        is_correct: payload
                            .get(&format!("questions[{q}][options][{o}][is_correct]"))
                            == Some("true"),
                        translations: Locale::ALL
                            .iter()
                            .map(|locale| TranslatedText {
                                language: *locale,
                                text: value(&format!(
                                    "translations[{q}][options][{o}][{}]",
                                    locale.code()
                                )),
                            })
                            .collect(),
                    })
                    .collect();

                DocumentQuestion {
                    index: q,
                    title: value(&format!("questions[{q}][title]")),
                    translations: Locale::ALL
                        .iter()
                        .map(|locale| TranslatedText {
                            language: *locale,
                            text: value(&format!("translations[{q}][{}]", locale.code())),
                        })
                        .collect(),
                    options,
                }
            })
            .collect();

        Self {
            title: value(names::QUIZ_TITLE),
            language: value(names::LANGUAGE),
            questions,
        }
    }

    pub fn option_count(&self) -> usize {
        self.questions.iter().map(|q| q.options.len()).sum()
    }
}
