//! Form domain layer
//!
//! Typed field values and focus navigation over the quiz form.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, QuizEditor};
