//! Heuristic scorer - entropy estimate with pattern penalties.
//!
//! Used when the richer zxcvbn scorer is not available. Deterministic and
//! pure: the same password, word list and inputs always give the same report.

use secrecy::{ExposeSecret, SecretString};

use crate::common_words::CommonWords;
use crate::report::{CrackTimeLabel, Score, ScorerKind, StrengthReport};
use crate::sections::{
    SectionInput, SectionResult, character_variety_section, common_word_section, length_section,
    personal_input_section, repeat_section, sequence_section,
};

/// Lower bounds, in bits, of scores 1 to 4.
pub const SCORE_THRESHOLDS: [f64; 4] = [25.0, 40.0, 60.0, 80.0];

const LOWER_POOL: u32 = 26;
const UPPER_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 33;
const OTHER_POOL: u32 = 100;

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
    pub other: bool,
}

impl CharClasses {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut classes, c| {
            match c {
                'a'..='z' => classes.lower = true,
                'A'..='Z' => classes.upper = true,
                '0'..='9' => classes.digit = true,
                c if c.is_ascii_punctuation() || c == ' ' => classes.symbol = true,
                _ => classes.other = true,
            }
            classes
        })
    }

    /// Size of the alphabet an attacker would have to search.
    pub fn pool_size(&self) -> u32 {
        [
            (self.lower, LOWER_POOL),
            (self.upper, UPPER_POOL),
            (self.digit, DIGIT_POOL),
            (self.symbol, SYMBOL_POOL),
            (self.other, OTHER_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
    }
}

/// Maps penalized entropy to a score bucket.
pub fn score_for_bits(bits: f64) -> Score {
    match SCORE_THRESHOLDS.iter().filter(|t| bits >= **t).count() {
        0 => Score::VeryWeak,
        1 => Score::Weak,
        2 => Score::Fair,
        3 => Score::Strong,
        _ => Score::VeryStrong,
    }
}

/// Approximate scorer holding its common-word list.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    words: CommonWords,
}

impl HeuristicScorer {
    pub fn new(words: CommonWords) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &CommonWords {
        &self.words
    }

    /// Evaluates password strength and returns a detailed report.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate
    /// * `user_inputs` - Personal terms the password should not contain
    pub fn analyze(&self, password: &SecretString, user_inputs: &[&str]) -> StrengthReport {
        let pwd = password.expose_secret();
        let input = SectionInput::new(pwd, &self.words, user_inputs);

        let pool = CharClasses::of(pwd).pool_size();
        let base_bits = if pool == 0 {
            0.0
        } else {
            input.chars.len() as f64 * f64::from(pool).log2()
        };

        // Orchestrator: execute sections in sequence
        let sections: [(&str, fn(&SectionInput<'_>) -> SectionResult); 6] = [
            ("common", common_word_section),
            ("personal", personal_input_section),
            ("length", length_section),
            ("variety", character_variety_section),
            ("repeat", repeat_section),
            ("sequence", sequence_section),
        ];

        let mut penalty_bits = 0.0;
        let mut feedback = Vec::new();
        for (_section_name, section_fn) in sections {
            if let Some(finding) = section_fn(&input) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Section {} triggered: -{} bits",
                    _section_name,
                    finding.penalty_bits
                );
                penalty_bits += finding.penalty_bits;
                feedback.push(finding.feedback);
            }
        }

        let entropy_bits = (base_bits - penalty_bits).max(0.0);
        let score = score_for_bits(entropy_bits);
        if feedback.is_empty() && score < Score::Strong {
            feedback.push("Add more length or less predictable characters".to_string());
        }

        StrengthReport {
            score,
            entropy_bits,
            crack_time: CrackTimeLabel::from(score).to_string(),
            feedback,
            scorer: ScorerKind::Heuristic,
        }
    }
}
