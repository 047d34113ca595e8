//! Translation mirror
//!
//! Every question and option gets one entry per locale. Entries are created
//! and removed only through the owning [`QuizForm`](super::QuizForm), so they
//! never outlive the question or option they translate.
//!
//! Ids are handed out in increasing order and always appended, so iterating a
//! `BTreeMap` keyed by id yields document order.

use super::names;
use super::{Locale, OptionId, QuestionId};
use crate::state::FormField;
use std::collections::BTreeMap;

/// Translation inputs for one question in one locale
#[derive(Debug, Clone)]
pub struct MirrorQuestion {
    pub question: QuestionId,
    pub title: FormField,
    options: BTreeMap<OptionId, FormField>,
}

impl MirrorQuestion {
    fn new(question: QuestionId, locale: Locale) -> Self {
        Self {
            question,
            title: FormField::text(
                names::question_translation(question, locale),
                names::question_translation_label(question, locale),
            ),
            options: BTreeMap::new(),
        }
    }

    /// Option translation fields in document order
    pub fn options(&self) -> impl Iterator<Item = (OptionId, &FormField)> {
        self.options.iter().map(|(id, field)| (*id, field))
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// All translation inputs of one locale
#[derive(Debug, Clone)]
pub struct LocaleSection {
    pub locale: Locale,
    questions: BTreeMap<QuestionId, MirrorQuestion>,
}

impl LocaleSection {
    fn new(locale: Locale) -> Self {
        Self {
            locale,
            questions: BTreeMap::new(),
        }
    }

    /// Question entries in document order
    pub fn questions(&self) -> impl Iterator<Item = &MirrorQuestion> {
        self.questions.values()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn option_count(&self) -> usize {
        self.questions.values().map(MirrorQuestion::option_count).sum()
    }
}

/// French and Arabic sections kept in lockstep with the questions
#[derive(Debug, Clone)]
pub struct TranslationMirror {
    sections: [LocaleSection; 2],
}

impl Default for TranslationMirror {
    fn default() -> Self {
        Self {
            sections: Locale::ALL.map(LocaleSection::new),
        }
    }
}

impl TranslationMirror {
    fn section_mut(&mut self, locale: Locale) -> &mut LocaleSection {
        &mut self.sections[locale.index()]
    }

    pub fn section(&self, locale: Locale) -> &LocaleSection {
        &self.sections[locale.index()]
    }

    pub fn sections(&self) -> &[LocaleSection] {
        &self.sections
    }

    pub(super) fn add_question(&mut self, question: QuestionId) {
        for locale in Locale::ALL {
            self.section_mut(locale)
                .questions
                .insert(question, MirrorQuestion::new(question, locale));
        }
    }

    /// Returns false when the question has no mirror entries
    pub(super) fn add_option(&mut self, question: QuestionId, option: OptionId) -> bool {
        let mut added = true;
        for locale in Locale::ALL {
            match self.section_mut(locale).questions.get_mut(&question) {
                Some(entry) => {
                    entry.options.insert(
                        option,
                        FormField::text(
                            names::option_translation(question, option, locale),
                            names::option_translation_label(option, locale),
                        ),
                    );
                }
                None => added = false,
            }
        }
        added
    }

    /// Removes the question entry of every locale, nested option entries included
    pub(super) fn remove_question(&mut self, question: QuestionId) -> bool {
        let mut removed = false;
        for section in &mut self.sections {
            removed |= section.questions.remove(&question).is_some();
        }
        removed
    }

    /// Removes only the option entries, leaving the question entries in place
    pub(super) fn remove_option(&mut self, question: QuestionId, option: OptionId) -> bool {
        let mut removed = false;
        for section in &mut self.sections {
            if let Some(entry) = section.questions.get_mut(&question) {
                removed |= entry.options.remove(&option).is_some();
            }
        }
        removed
    }

    pub fn question_field(&self, question: QuestionId, locale: Locale) -> Option<&FormField> {
        self.section(locale).questions.get(&question).map(|q| &q.title)
    }

    pub(super) fn question_field_mut(
        &mut self,
        question: QuestionId,
        locale: Locale,
    ) -> Option<&mut FormField> {
        self.section_mut(locale)
            .questions
            .get_mut(&question)
            .map(|q| &mut q.title)
    }

    pub fn option_field(
        &self,
        question: QuestionId,
        option: OptionId,
        locale: Locale,
    ) -> Option<&FormField> {
        self.section(locale)
            .questions
            .get(&question)
            .and_then(|q| q.options.get(&option))
    }

    pub(super) fn option_field_mut(
        &mut self,
        question: QuestionId,
        option: OptionId,
        locale: Locale,
    ) -> Option<&mut FormField> {
        self.section_mut(locale)
            .questions
            .get_mut(&question)
            .and_then(|q| q.options.get_mut(&option))
    }

    /// True when every locale has a non-blank title translation
    pub fn question_complete(&self, question: QuestionId) -> bool {
        Locale::ALL.iter().all(|locale| {
            self.question_field(question, *locale)
                .is_some_and(|f| !f.is_blank())
        })
    }

    /// True when every locale has a non-blank option translation
    pub fn option_complete(&self, question: QuestionId, option: OptionId) -> bool {
        Locale::ALL.iter().all(|locale| {
            self.option_field(question, option, *locale)
                .is_some_and(|f| !f.is_blank())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_entries_per_locale() {
        let mut mirror = TranslationMirror::default();
        mirror.add_question(QuestionId(1));
        mirror.add_question(QuestionId(2));

        for locale in Locale::ALL {
            assert_eq!(mirror.section(locale).question_count(), 2);
        }
        assert_eq!(
            mirror.question_field(QuestionId(2), Locale::Ar).unwrap().name,
            "translations[2][ar]"
        );
    }

    #[test]
    fn test_option_needs_question_entry() {
        let mut mirror = TranslationMirror::default();
        assert!(!mirror.add_option(QuestionId(1), OptionId(1)));
        mirror.add_question(QuestionId(1));
        assert!(mirror.add_option(QuestionId(1), OptionId(1)));
        assert_eq!(mirror.section(Locale::Fr).option_count(), 1);
        assert_eq!(mirror.section(Locale::Ar).option_count(), 1);
    }

    #[test]
    fn test_remove_option_keeps_question_entry() {
        let mut mirror = TranslationMirror::default();
        mirror.add_question(QuestionId(1));
        mirror.add_option(QuestionId(1), OptionId(1));
        mirror.add_option(QuestionId(1), OptionId(2));

        assert!(mirror.remove_option(QuestionId(1), OptionId(1)));
        assert!(!mirror.remove_option(QuestionId(1), OptionId(1)));
        for locale in Locale::ALL {
            let section = mirror.section(locale);
            assert_eq!(section.question_count(), 1);
            assert_eq!(section.option_count(), 1);
            assert!(mirror.option_field(QuestionId(1), OptionId(2), locale).is_some());
        }
    }

    #[test]
    fn test_remove_question_cascades() {
        let mut mirror = TranslationMirror::default();
        mirror.add_question(QuestionId(1));
        mirror.add_question(QuestionId(2));
        mirror.add_option(QuestionId(1), OptionId(1));

        assert!(mirror.remove_question(QuestionId(1)));
        for locale in Locale::ALL {
            assert_eq!(mirror.section(locale).question_count(), 1);
            assert_eq!(mirror.section(locale).option_count(), 0);
        }
        assert!(mirror.question_field(QuestionId(2), Locale::Fr).is_some());
    }

    #[test]
    fn test_completeness_checks_both_locales() {
        let mut mirror = TranslationMirror::default();
        mirror.add_question(QuestionId(1));
        mirror
            .question_field_mut(QuestionId(1), Locale::Fr)
            .unwrap()
            .set_text("Bonjour");
        assert!(!mirror.question_complete(QuestionId(1)));
        mirror
            .question_field_mut(QuestionId(1), Locale::Ar)
            .unwrap()
            .set_text("مرحبا");
        assert!(mirror.question_complete(QuestionId(1)));
        assert!(!mirror.question_complete(QuestionId(9)));
    }
}
