//! Focus handling over the live quiz form

use super::field::FormField;
use crate::state::quiz::{FieldRef, FormError, OptionId, QuestionId, QuizForm};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// The quiz form plus a cursor over its fields in document order.
///
/// Structural edits go through the editor so the cursor always lands on a
/// field that still exists.
#[derive(Debug, Clone)]
pub struct QuizEditor {
    form: QuizForm,
    slots: Vec<FieldRef>,
    active_field_index: usize,
}

impl Default for QuizEditor {
    fn default() -> Self {
        Self::new(QuizForm::default())
    }
}

impl QuizEditor {
    pub fn new(form: QuizForm) -> Self {
        let slots = form.field_refs();
        Self {
            form,
            slots,
            active_field_index: 0,
        }
    }

    pub fn form(&self) -> &QuizForm {
        &self.form
    }

    pub fn focused(&self) -> Option<FieldRef> {
        self.slots.get(self.active_field_index).copied()
    }

    /// The field under the cursor
    pub fn focused_field(&self) -> Option<&FormField> {
        self.form.field(self.focused()?)
    }

    pub fn is_focused(&self, field: FieldRef) -> bool {
        self.focused() == Some(field)
    }

    /// Question owning the focused field (title, option or translation)
    pub fn focused_question(&self) -> Option<QuestionId> {
        self.focused().and_then(|f| f.question())
    }

    /// Option owning the focused field (option text or its translation)
    pub fn focused_option(&self) -> Option<(QuestionId, OptionId)> {
        self.focused().and_then(|f| f.option())
    }

    /// Move the cursor to a field. Returns false if it does not exist.
    pub fn focus(&mut self, field: FieldRef) -> bool {
        match self.slots.iter().position(|s| *s == field) {
            Some(index) => {
                self.active_field_index = index;
                true
            }
            None => false,
        }
    }

    pub fn add_question(&mut self) -> QuestionId {
        let id = self.form.add_question();
        self.slots = self.form.field_refs();
        self.focus(FieldRef::QuestionTitle(id));
        id
    }

    pub fn add_option(&mut self, question: QuestionId) -> Result<OptionId, FormError> {
        let id = self.form.add_option(question)?;
        self.slots = self.form.field_refs();
        self.focus(FieldRef::OptionText(question, id));
        Ok(id)
    }

    pub fn delete_question(&mut self, question: QuestionId) -> Result<(), FormError> {
        self.form.delete_question(question)?;
        self.reconcile();
        Ok(())
    }

    pub fn delete_option(&mut self, question: QuestionId, option: OptionId) -> Result<(), FormError> {
        self.form.delete_option(question, option)?;
        self.reconcile();
        Ok(())
    }

    pub fn toggle_correct(&mut self, question: QuestionId, option: OptionId) -> Result<bool, FormError> {
        self.form.toggle_correct(question, option)
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Rebuild the slot list after a removal and move the cursor to the
    /// nearest surviving field before the old position
    fn reconcile(&mut self) {
        let old_slots = std::mem::replace(&mut self.slots, self.form.field_refs());
        let old_index = self.active_field_index.min(old_slots.len());
        let survivor = old_slots
            .get(old_index)
            .into_iter()
            .chain(old_slots[..old_index].iter().rev())
            .find_map(|field| self.slots.iter().position(|s| s == field));
        self.active_field_index = survivor.unwrap_or(0);
    }
}

impl Form for QuizEditor {
    fn field_count(&self) -> usize {
        self.slots.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.slots.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let field = self.focused()?;
        self.form.field_mut(field)
    }
}
