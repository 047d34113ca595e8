//! Question and option identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a question, unique for the lifetime of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

/// Identifier of an option, unique across every question of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic counter. Values start at 1 and are never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct IdCounter {
    last: u32,
}

impl IdCounter {
    pub fn next(&mut self) -> u32 {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_one() {
        let mut counter = IdCounter::default();
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.next(), 3);
    }

    #[test]
    fn test_ids_display_as_numbers() {
        assert_eq!(QuestionId(7).to_string(), "7");
        assert_eq!(OptionId(12).to_string(), "12");
    }
}
