//! Strength report types shared by both scorers.

use std::fmt;

/// Discrete strength score, 0 (weakest) to 4 (strongest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    VeryWeak = 0,
    Weak = 1,
    Fair = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl Score {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Score::VeryWeak => "very weak",
            Score::Weak => "weak",
            Score::Fair => "fair",
            Score::Strong => "strong",
            Score::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/4 ({})", self.value(), self.label())
    }
}

/// Coarse order-of-magnitude crack time, one per score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackTimeLabel {
    Instant,
    Minutes,
    Hours,
    Days,
    MonthsOrMore,
}

impl From<Score> for CrackTimeLabel {
    fn from(score: Score) -> Self {
        match score {
            Score::VeryWeak => CrackTimeLabel::Instant,
            Score::Weak => CrackTimeLabel::Minutes,
            Score::Fair => CrackTimeLabel::Hours,
            Score::Strong => CrackTimeLabel::Days,
            Score::VeryStrong => CrackTimeLabel::MonthsOrMore,
        }
    }
}

impl fmt::Display for CrackTimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CrackTimeLabel::Instant => "instant",
            CrackTimeLabel::Minutes => "minutes",
            CrackTimeLabel::Hours => "hours",
            CrackTimeLabel::Days => "days",
            CrackTimeLabel::MonthsOrMore => "months or more",
        })
    }
}

/// Which scorer produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    Rich,
    Heuristic,
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScorerKind::Rich => "zxcvbn",
            ScorerKind::Heuristic => "heuristic",
        })
    }
}

/// Result of analyzing one password.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    pub score: Score,
    /// Estimated guessing difficulty in bits.
    pub entropy_bits: f64,
    /// Human-readable crack-time estimate.
    pub crack_time: String,
    /// Warnings first, then suggestions.
    pub feedback: Vec<String>,
    pub scorer: ScorerKind,
}
