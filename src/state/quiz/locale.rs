//! Translation locales

use serde::{Deserialize, Serialize};

/// Locales every question and option is translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fr,
    Ar,
}

impl Locale {
    /// All locales, in the order their sections are rendered and submitted
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::Ar];

    /// Position in [`Locale::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Fr => 0,
            Self::Ar => 1,
        }
    }

    /// Code used in wire field names
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Short label used in field labels
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fr => "Fr",
            Self::Ar => "Ar",
        }
    }

    /// Section heading
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Fr => "French translations",
            Self::Ar => "Arabic translations",
        }
    }
}
