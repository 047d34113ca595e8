//! The quiz authoring form: questions, options and their translations

use super::ids::IdCounter;
use super::names;
use super::translations::TranslationMirror;
use super::{Locale, OptionId, QuestionId};
use crate::state::FormField;
use std::collections::BTreeMap;
use thiserror::Error;

/// Structural misuse of the form, e.g. addressing a deleted question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("question {0} does not exist")]
    UnknownQuestion(QuestionId),
    #[error("option {option} does not exist in question {question}")]
    UnknownOption {
        question: QuestionId,
        option: OptionId,
    },
}

/// An answer option owned by one question
#[derive(Debug, Clone)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: FormField,
    pub is_correct: FormField,
}

impl AnswerOption {
    fn new(question: QuestionId, id: OptionId) -> Self {
        Self {
            id,
            text: FormField::text(names::option_text(question, id), names::option_label(id)),
            is_correct: FormField::flag(names::option_is_correct(question, id), "Correct"),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct.is_checked()
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub title: FormField,
    options: BTreeMap<OptionId, AnswerOption>,
}

impl Question {
    fn new(id: QuestionId) -> Self {
        Self {
            id,
            title: FormField::text(names::question_title(id), names::question_label(id)),
            options: BTreeMap::new(),
        }
    }

    /// Options in document order
    pub fn options(&self) -> impl Iterator<Item = &AnswerOption> {
        self.options.values()
    }

    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.get(&id)
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn has_correct_option(&self) -> bool {
        self.options.values().any(AnswerOption::is_correct)
    }
}

/// Address of one editable text input in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRef {
    QuizTitle,
    Language,
    QuestionTitle(QuestionId),
    OptionText(QuestionId, OptionId),
    QuestionTranslation(QuestionId, Locale),
    OptionTranslation(QuestionId, OptionId, Locale),
}

impl FieldRef {
    /// The question this field belongs to, if any
    pub fn question(&self) -> Option<QuestionId> {
        match self {
            Self::QuizTitle | Self::Language => None,
            Self::QuestionTitle(q)
            | Self::OptionText(q, _)
            | Self::QuestionTranslation(q, _)
            | Self::OptionTranslation(q, _, _) => Some(*q),
        }
    }

    /// The option this field belongs to, if any
    pub fn option(&self) -> Option<(QuestionId, OptionId)> {
        match self {
            Self::OptionText(q, o) | Self::OptionTranslation(q, o, _) => Some((*q, *o)),
            _ => None,
        }
    }
}

/// One authoring session. Counters live and die with the form.
#[derive(Debug, Clone)]
pub struct QuizForm {
    pub title: FormField,
    pub language: FormField,
    questions: BTreeMap<QuestionId, Question>,
    translations: TranslationMirror,
    question_ids: IdCounter,
    option_ids: IdCounter,
}

impl Default for QuizForm {
    fn default() -> Self {
        Self::new("en")
    }
}

impl QuizForm {
    pub fn new(language: &str) -> Self {
        Self {
            title: FormField::text(names::QUIZ_TITLE, "Quiz title"),
            language: FormField::text_with_value(names::LANGUAGE, "Language", language),
            questions: BTreeMap::new(),
            translations: TranslationMirror::default(),
            question_ids: IdCounter::default(),
            option_ids: IdCounter::default(),
        }
    }

    /// Questions in document order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn translations(&self) -> &TranslationMirror {
        &self.translations
    }

    /// Append a new empty question and its translation entries
    pub fn add_question(&mut self) -> QuestionId {
        let id = QuestionId(self.question_ids.next());
        self.questions.insert(id, Question::new(id));
        self.translations.add_question(id);
        tracing::debug!(question = %id, "question added");
        id
    }

    /// Append a new option to a live question.
    ///
    /// A question that was deleted (or never existed) is rejected and the
    /// option counter is left untouched.
    pub fn add_option(&mut self, question: QuestionId) -> Result<OptionId, FormError> {
        let entry = self
            .questions
            .get_mut(&question)
            .ok_or(FormError::UnknownQuestion(question))?;
        let id = OptionId(self.option_ids.next());
        entry.options.insert(id, AnswerOption::new(question, id));
        self.translations.add_option(question, id);
        tracing::debug!(question = %question, option = %id, "option added");
        Ok(id)
    }

    /// Remove a question, its options and every translation entry for them
    pub fn delete_question(&mut self, question: QuestionId) -> Result<(), FormError> {
        self.questions
            .remove(&question)
            .ok_or(FormError::UnknownQuestion(question))?;
        self.translations.remove_question(question);
        tracing::debug!(question = %question, "question deleted");
        Ok(())
    }

    /// Remove one option and its translation entries
    pub fn delete_option(&mut self, question: QuestionId, option: OptionId) -> Result<(), FormError> {
        let entry = self
            .questions
            .get_mut(&question)
            .ok_or(FormError::UnknownQuestion(question))?;
        entry
            .options
            .remove(&option)
            .ok_or(FormError::UnknownOption { question, option })?;
        self.translations.remove_option(question, option);
        tracing::debug!(question = %question, option = %option, "option deleted");
        Ok(())
    }

    /// Flip the correctness marker of exactly one option. Returns the new state.
    pub fn toggle_correct(&mut self, question: QuestionId, option: OptionId) -> Result<bool, FormError> {
        let entry = self
            .questions
            .get_mut(&question)
            .ok_or(FormError::UnknownQuestion(question))?
            .options
            .get_mut(&option)
            .ok_or(FormError::UnknownOption { question, option })?;
        let checked = entry.is_correct.toggle();
        tracing::debug!(question = %question, option = %option, checked, "correctness toggled");
        Ok(checked)
    }

    pub fn field(&self, field: FieldRef) -> Option<&FormField> {
        match field {
            FieldRef::QuizTitle => Some(&self.title),
            FieldRef::Language => Some(&self.language),
            FieldRef::QuestionTitle(q) => self.questions.get(&q).map(|q| &q.title),
            FieldRef::OptionText(q, o) => self
                .questions
                .get(&q)
                .and_then(|q| q.options.get(&o))
                .map(|o| &o.text),
            FieldRef::QuestionTranslation(q, locale) => self.translations.question_field(q, locale),
            FieldRef::OptionTranslation(q, o, locale) => {
                self.translations.option_field(q, o, locale)
            }
        }
    }

    pub fn field_mut(&mut self, field: FieldRef) -> Option<&mut FormField> {
        match field {
            FieldRef::QuizTitle => Some(&mut self.title),
            FieldRef::Language => Some(&mut self.language),
            FieldRef::QuestionTitle(q) => self.questions.get_mut(&q).map(|q| &mut q.title),
            FieldRef::OptionText(q, o) => self
                .questions
                .get_mut(&q)
                .and_then(|q| q.options.get_mut(&o))
                .map(|o| &mut o.text),
            FieldRef::QuestionTranslation(q, locale) => {
                self.translations.question_field_mut(q, locale)
            }
            FieldRef::OptionTranslation(q, o, locale) => {
                self.translations.option_field_mut(q, o, locale)
            }
        }
    }

    /// Every editable field in document order: title, language, the
    /// questions with their options, then one translation section per locale
    pub fn field_refs(&self) -> Vec<FieldRef> {
        let mut refs = vec![FieldRef::QuizTitle, FieldRef::Language];
        for question in self.questions.values() {
            refs.push(FieldRef::QuestionTitle(question.id));
            refs.extend(
                question
                    .options
                    .keys()
                    .map(|o| FieldRef::OptionText(question.id, *o)),
            );
        }
        for locale in Locale::ALL {
            for question in self.questions.values() {
                refs.push(FieldRef::QuestionTranslation(question.id, locale));
                refs.extend(
                    question
                        .options
                        .keys()
                        .map(|o| FieldRef::OptionTranslation(question.id, *o, locale)),
                );
            }
        }
        refs
    }
}
