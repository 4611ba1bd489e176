//! Personal-input section - checks for the user's own names, pets and dates.

use super::{Finding, SectionInput, SectionResult};

/// Bits subtracted for each distinct personal input found.
pub const PERSONAL_INPUT_PENALTY_BITS: f64 = 20.0;

/// Inputs shorter than this are ignored.
const MIN_INPUT_LEN: usize = 3;

pub fn personal_input_section(input: &SectionInput<'_>) -> SectionResult {
    let mut found: Vec<String> = Vec::new();
    for raw in input.user_inputs {
        let needle = raw.trim().to_lowercase();
        if needle.chars().count() < MIN_INPUT_LEN || found.contains(&needle) {
            continue;
        }
        if input.lowered.contains(&needle) {
            found.push(needle);
        }
    }

    if found.is_empty() {
        return None;
    }
    Some(Finding::new(
        found.len() as f64 * PERSONAL_INPUT_PENALTY_BITS,
        "Contains personal information (names, pets, dates)",
    ))
}
