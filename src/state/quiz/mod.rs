//! Quiz authoring domain: form model, translations, validation and wire format

mod document;
mod encoding;
mod form;
mod ids;
mod locale;
mod names;
mod translations;
pub mod validation;

pub use document::QuizDocument;
pub use encoding::{FormPayload, CONTENT_TYPE};
pub use form::{FieldRef, FormError, QuizForm};
pub use ids::{OptionId, QuestionId};
pub use locale::Locale;
pub use translations::LocaleSection;
pub use validation::{Submission, Violation};
