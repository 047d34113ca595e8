//! Form-encoded submission payload

use super::{Locale, QuizForm};
use url::form_urlencoded;

/// Content type of [`FormPayload::to_urlencoded`]
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered `(name, value)` pairs exactly as a form submit would send them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    pairs: Vec<(String, String)>,
}

impl FormPayload {
    /// Collect every field of the form in document order
    pub fn from_form(form: &QuizForm) -> Self {
        let mut payload = Self::default();
        payload.push_field(&form.title);
        payload.push_field(&form.language);

        for question in form.questions() {
            payload.push_field(&question.title);
            for option in question.options() {
                payload.push_field(&option.text);
                payload.push_field(&option.is_correct);
            }
        }

        let translations = form.translations();
        for question in form.questions() {
            for locale in Locale::ALL {
                if let Some(field) = translations.question_field(question.id, locale) {
                    payload.push_field(field);
                }
            }
            for option in question.options() {
                for locale in Locale::ALL {
                    if let Some(field) = translations.option_field(question.id, option.id, locale)
                    {
                        payload.push_field(field);
                    }
                }
            }
        }

        payload
    }

    fn push_field(&mut self, field: &crate::state::FormField) {
        self.pairs.push((field.name.clone(), field.wire_value()));
    }

    /// Decode an `application/x-www-form-urlencoded` body
    pub fn from_urlencoded(body: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(body.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn to_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
