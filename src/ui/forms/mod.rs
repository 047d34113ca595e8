//! Form rendering module
//!
//! This module contains UI components for rendering the quiz form:
//! - `field_renderer`: Field rendering utilities
//! - `quiz_form`: Title, language, questions and options
//! - `translations_form`: One section per locale

mod field_renderer;
mod quiz_form;
mod translations_form;

pub use quiz_form::draw_quiz_form;
pub use translations_form::draw_translations;
