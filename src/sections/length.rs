//! Length section - checks password minimum length.

use super::{Finding, SectionInput, SectionResult};

pub const MIN_LENGTH: usize = 8;

/// Flags passwords shorter than [`MIN_LENGTH`] characters.
///
/// Carries no penalty: a short password already has a small base estimate.
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    if input.chars.len() < MIN_LENGTH {
        return Some(Finding::new(
            0.0,
            format!("Too short, add length (at least {} characters)", MIN_LENGTH),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_words::CommonWords;

    fn run(pwd: &str) -> SectionResult {
        let words = CommonWords::builtin();
        length_section(&SectionInput::new(pwd, &words, &[]))
    }

    #[test]
    fn test_length_section_too_short() {
        let finding = run("Short1!").unwrap();
        assert!(finding.feedback.contains("Too short"));
        assert_eq!(finding.penalty_bits, 0.0);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(run("12345678"), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        assert!(run("ééééééé").is_some());
    }
}
