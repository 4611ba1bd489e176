//! Pattern sections - detect repeated runs and monotonic sequences.

use super::{Finding, SectionInput, SectionResult};

/// Bits subtracted for each window of three identical characters.
pub const REPEAT_PENALTY_BITS: f64 = 8.0;
/// Bits subtracted for each window of four sequential characters.
pub const SEQUENCE_PENALTY_BITS: f64 = 8.0;

const REPEAT_WINDOW: usize = 3;
const SEQUENCE_WINDOW: usize = 4;

/// Detects runs of three or more identical consecutive characters (e.g. "aaa").
///
/// Every window of three identical characters counts as one detection, so
/// longer runs cost more.
pub fn repeat_section(input: &SectionInput<'_>) -> SectionResult {
    let detections = input
        .chars
        .windows(REPEAT_WINDOW)
        .filter(|w| w.iter().all(|c| *c == w[0]))
        .count();

    if detections == 0 {
        return None;
    }
    Some(Finding::new(
        detections as f64 * REPEAT_PENALTY_BITS,
        "Has a repeated run of characters",
    ))
}

/// Detects ascending or descending runs of letters or digits
/// (e.g. "abcd", "4321").
pub fn sequence_section(input: &SectionInput<'_>) -> SectionResult {
    let folded: Vec<char> = input
        .chars
        .iter()
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let detections = folded
        .windows(SEQUENCE_WINDOW)
        .filter(|w| is_sequential(w))
        .count();

    if detections == 0 {
        return None;
    }
    Some(Finding::new(
        detections as f64 * SEQUENCE_PENALTY_BITS,
        "Contains a sequence like abcd or 1234",
    ))
}

fn is_sequential(window: &[char]) -> bool {
    let same_class = window.iter().all(|c| c.is_ascii_lowercase())
        || window.iter().all(|c| c.is_ascii_digit());
    if !same_class {
        return false;
    }
    let steps: Vec<i32> = window
        .windows(2)
        .map(|pair| pair[1] as i32 - pair[0] as i32)
        .collect();
    steps.iter().all(|s| *s == 1) || steps.iter().all(|s| *s == -1)
}
