//! Character variety section - checks for uppercase, lowercase, numbers, symbols.

use super::{Finding, SectionInput, SectionResult};

/// Suggests more character types when fewer than three are present.
pub fn character_variety_section(input: &SectionInput<'_>) -> SectionResult {
    if input.chars.is_empty() {
        return None;
    }
    let has_upper = input.chars.iter().any(|c| c.is_uppercase());
    let has_lower = input.chars.iter().any(|c| c.is_lowercase());
    let has_digit = input.chars.iter().any(|c| c.is_ascii_digit());
    let has_special = input.chars.iter().any(|c| !c.is_alphanumeric());

    let missing: Vec<_> = vec![
        if !has_upper { Some("uppercase") } else { None },
        if !has_lower { Some("lowercase") } else { None },
        if !has_digit { Some("numbers") } else { None },
        if !has_special { Some("symbols") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    if missing.len() > 1 {
        return Some(Finding::new(
            0.0,
            format!("Add more character types (missing: {})", missing.join(", ")),
        ));
    }
    None
}
