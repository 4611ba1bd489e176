//! Scorer selection - a one-time capability probe at startup.
//!
//! The probe decides between the zxcvbn-backed [`RichScorer`] (compiled in
//! with the `zxcvbn` feature) and the [`HeuristicScorer`]. The resulting
//! [`Scorer`] is fixed for its lifetime; calls never re-probe.

use std::str::FromStr;

use secrecy::SecretString;

use crate::common_words::CommonWords;
use crate::config::SCORER_ENV;
use crate::heuristic::HeuristicScorer;
use crate::report::{ScorerKind, StrengthReport};

#[cfg(feature = "zxcvbn")]
use crate::rich::RichScorer;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Delay before an `analyze_tx` evaluation starts, so a front-end can cancel
/// it while the user is still typing.
#[cfg(feature = "async")]
pub const ANALYZE_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Which scorer the caller would like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerPreference {
    /// The rich scorer when available, the heuristic one otherwise.
    #[default]
    Auto,
    /// Always the heuristic scorer.
    Heuristic,
}

impl FromStr for ScorerPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "heuristic" => Ok(Self::Heuristic),
            other => Err(format!("unknown scorer '{}', expected auto or heuristic", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScorerSelector {
    preference: ScorerPreference,
}

impl ScorerSelector {
    pub fn new(preference: ScorerPreference) -> Self {
        Self { preference }
    }

    /// Reads the preference from `PWD_AUDIT_SCORER`; unknown values fall
    /// back to `auto`.
    pub fn from_env() -> Self {
        let preference = match std::env::var(SCORER_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|_e: String| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring {}: {}", SCORER_ENV, _e);
                ScorerPreference::Auto
            }),
            Err(_) => ScorerPreference::Auto,
        };
        Self { preference }
    }

    pub fn preference(&self) -> ScorerPreference {
        self.preference
    }

    /// Whether the rich scorer is compiled into this build.
    pub fn rich_available() -> bool {
        cfg!(feature = "zxcvbn")
    }

    /// Resolves the scorer. `words` is used only by the heuristic scorer.
    pub fn select(self, words: CommonWords) -> Scorer {
        let scorer = match self.preference {
            #[cfg(feature = "zxcvbn")]
            ScorerPreference::Auto => Scorer::Rich(RichScorer),
            _ => Scorer::Heuristic(HeuristicScorer::new(words)),
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Password scorer selected: {}", scorer.kind());

        scorer
    }
}

/// The scorer chosen at startup.
#[derive(Debug, Clone)]
pub enum Scorer {
    #[cfg(feature = "zxcvbn")]
    Rich(RichScorer),
    Heuristic(HeuristicScorer),
}

impl Scorer {
    pub fn kind(&self) -> ScorerKind {
        match self {
            #[cfg(feature = "zxcvbn")]
            Scorer::Rich(_) => ScorerKind::Rich,
            Scorer::Heuristic(_) => ScorerKind::Heuristic,
        }
    }

    pub fn analyze(&self, password: &SecretString) -> StrengthReport {
        self.analyze_with_inputs(password, &[])
    }

    /// Like [`Scorer::analyze`], also penalizing passwords built from the
    /// user's own personal terms.
    pub fn analyze_with_inputs(&self, password: &SecretString, user_inputs: &[&str]) -> StrengthReport {
        match self {
            #[cfg(feature = "zxcvbn")]
            Scorer::Rich(rich) => rich.analyze(password, user_inputs),
            Scorer::Heuristic(heuristic) => heuristic.analyze(password, user_inputs),
        }
    }

    /// Async version that sends the report via channel.
    ///
    /// Waits [`ANALYZE_DEBOUNCE`] first; nothing is sent if `token` is
    /// cancelled by then.
    #[cfg(feature = "async")]
    pub async fn analyze_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<StrengthReport>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("analysis is about to start...");

        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password analysis cancelled");
                return;
            }
            _ = tokio::time::sleep(ANALYZE_DEBOUNCE) => {}
        }

        let report = self.analyze(password);

        if let Err(_e) = tx.send(report).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis result: {}", _e);
        }
    }
}
