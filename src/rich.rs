//! Rich scorer backed by zxcvbn.
//!
//! Feedback and crack-time estimates are passed through as zxcvbn reports
//! them.

use secrecy::{ExposeSecret, SecretString};
use zxcvbn::zxcvbn;

use crate::report::{Score, ScorerKind, StrengthReport};

/// Bits per decimal order of magnitude.
const LOG2_10: f64 = std::f64::consts::LOG2_10;

#[derive(Debug, Clone, Copy, Default)]
pub struct RichScorer;

impl RichScorer {
    pub fn analyze(&self, password: &SecretString, user_inputs: &[&str]) -> StrengthReport {
        let entropy = zxcvbn(password.expose_secret(), user_inputs);

        let score = match entropy.score() {
            zxcvbn::Score::Zero => Score::VeryWeak,
            zxcvbn::Score::One => Score::Weak,
            zxcvbn::Score::Two => Score::Fair,
            zxcvbn::Score::Three => Score::Strong,
            zxcvbn::Score::Four => Score::VeryStrong,
            _ => Score::VeryWeak,
        };

        let mut feedback = Vec::new();
        if let Some(f) = entropy.feedback() {
            if let Some(warning) = f.warning() {
                feedback.push(warning.to_string());
            }
            feedback.extend(f.suggestions().iter().map(|s| s.to_string()));
        }

        StrengthReport {
            score,
            entropy_bits: entropy.guesses_log10() * LOG2_10,
            crack_time: entropy
                .crack_times()
                .offline_slow_hashing_1e4_per_second()
                .to_string(),
            feedback,
            scorer: ScorerKind::Rich,
        }
    }
}
