//! Submission guard
//!
//! Validation collects every violation in a fixed order instead of stopping
//! at the first one, so the author sees all problems after one attempt.

use super::encoding::FormPayload;
use super::{OptionId, QuestionId, QuizForm};
use std::fmt;

/// A completeness or structure rule the form breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingTitle,
    NoQuestions,
    TooFewOptions(QuestionId),
    NoCorrectOption(QuestionId),
    QuestionTranslationsMissing(QuestionId),
    OptionTranslationsMissing {
        question: QuestionId,
        option: OptionId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Quiz title is required."),
            Self::NoQuestions => write!(f, "The quiz must have at least one question."),
            Self::TooFewOptions(q) => write!(f, "Question {q} must have at least two options."),
            Self::NoCorrectOption(q) => write!(
                f,
                "Question {q} must have at least one option marked as correct."
            ),
            Self::QuestionTranslationsMissing(q) => {
                write!(f, "All translations for question {q} must be filled.")
            }
            Self::OptionTranslationsMissing { question, option } => write!(
                f,
                "All translations for option {option} in question {question} must be filled."
            ),
        }
    }
}

/// Minimum number of options a question needs
pub const MIN_OPTIONS: usize = 2;

/// Check every rule and return all violations in rule order
pub fn validate(form: &QuizForm) -> Vec<Violation> {
    let mut violations = Vec::new();

    if form.title.is_blank() {
        violations.push(Violation::MissingTitle);
    }

    if form.question_count() == 0 {
        violations.push(Violation::NoQuestions);
    }

    let translations = form.translations();
    for question in form.questions() {
        if question.option_count() < MIN_OPTIONS {
            violations.push(Violation::TooFewOptions(question.id));
        }
        if !question.has_correct_option() {
            violations.push(Violation::NoCorrectOption(question.id));
        }
        if !translations.question_complete(question.id) {
            violations.push(Violation::QuestionTranslationsMissing(question.id));
        }
        for option in question.options() {
            if !translations.option_complete(question.id, option.id) {
                violations.push(Violation::OptionTranslationsMissing {
                    question: question.id,
                    option: option.id,
                });
            }
        }
    }

    violations
}

/// Outcome of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Valid form; the payload may go to the sink
    Accepted(FormPayload),
    /// Submission is blocked; messages in collection order
    Rejected(Vec<Violation>),
}

/// Run the guard over the current form
pub fn submit(form: &QuizForm) -> Submission {
    let violations = validate(form);
    if violations.is_empty() {
        Submission::Accepted(FormPayload::from_form(form))
    } else {
        tracing::info!(count = violations.len(), "submission rejected");
        Submission::Rejected(violations)
    }
}

/// Render violations the way the error panel shows them, one per line
pub fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}
