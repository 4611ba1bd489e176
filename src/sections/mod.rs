//! Heuristic scoring sections
//!
//! Each section inspects one aspect of a password and reports a finding:
//! an entropy penalty plus a feedback line.

mod common;
mod length;
mod pattern;
mod personal;
mod variety;

pub use common::common_word_section;
pub use length::length_section;
pub use pattern::{repeat_section, sequence_section};
pub use personal::personal_input_section;
pub use variety::character_variety_section;

use crate::common_words::CommonWords;

/// What a section sees of the password being scored.
pub struct SectionInput<'a> {
    pub chars: Vec<char>,
    /// Lowercased password.
    pub lowered: String,
    pub words: &'a CommonWords,
    pub user_inputs: &'a [&'a str],
}

impl<'a> SectionInput<'a> {
    pub fn new(password: &str, words: &'a CommonWords, user_inputs: &'a [&'a str]) -> Self {
        Self {
            chars: password.chars().collect(),
            lowered: password.to_lowercase(),
            words,
            user_inputs,
        }
    }
}

/// A triggered section.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Bits subtracted from the entropy estimate.
    pub penalty_bits: f64,
    pub feedback: String,
}

impl Finding {
    pub fn new(penalty_bits: f64, feedback: impl Into<String>) -> Self {
        Self {
            penalty_bits,
            feedback: feedback.into(),
        }
    }
}

/// Result type for section functions.
/// - `Some(finding)` - Section triggered
/// - `None` - Section passed
pub type SectionResult = Option<Finding>;
