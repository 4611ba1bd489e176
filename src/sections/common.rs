//! Common-word section - checks for very common passwords and words.

use super::{Finding, SectionInput, SectionResult};

/// Bits subtracted for each distinct common word found.
pub const COMMON_WORD_PENALTY_BITS: f64 = 20.0;

/// Look-alike characters mapped back to the letters they usually stand for.
///
/// `1` is ambiguous and reads as either `i` or `l`.
const UNSUBSTITUTE: &[(char, &[char])] = &[
    ('@', &['a']),
    ('4', &['a']),
    ('8', &['b']),
    ('3', &['e']),
    ('9', &['g']),
    ('1', &['i', 'l']),
    ('!', &['i']),
    ('0', &['o']),
    ('5', &['s']),
    ('$', &['s']),
    ('7', &['t']),
    ('2', &['z']),
];

/// Longest reading list in [`UNSUBSTITUTE`].
const MAX_READINGS: usize = 2;

/// De-substituted forms of `lowered`: reading `n` takes the `n`-th letter
/// of every ambiguous look-alike, or its last letter when it has fewer.
fn plain_readings(lowered: &str) -> Vec<String> {
    let mut readings: Vec<String> = (0..MAX_READINGS)
        .map(|n| {
            lowered
                .chars()
                .map(|c| {
                    UNSUBSTITUTE
                        .iter()
                        .find(|(from, _)| *from == c)
                        .and_then(|(_, to)| to.get(n).or(to.last()))
                        .copied()
                        .unwrap_or(c)
                })
                .collect()
        })
        .collect();
    readings.dedup();
    readings
}

/// Checks whether the password contains entries of the common-word list,
/// either literally or after undoing look-alike substitutions.
pub fn common_word_section(input: &SectionInput<'_>) -> SectionResult {
    let mut found: Vec<&str> = input.words.found_in(&input.lowered).collect();
    for plain in plain_readings(&input.lowered) {
        for word in input.words.found_in(&plain) {
            if !found.contains(&word) {
                found.push(word);
            }
        }
    }
    // "123456" inside "123456789" is one detection, not two
    let distinct: Vec<&str> = found
        .iter()
        .copied()
        .filter(|w| !found.iter().any(|other| other != w && other.contains(w)))
        .collect();

    if distinct.is_empty() {
        return None;
    }
    Some(Finding::new(
        distinct.len() as f64 * COMMON_WORD_PENALTY_BITS,
        format!("Contains a common word ({})", distinct.join(", ")),
    ))
}
