//! Password strength analysis and targeted wordlist generation
//!
//! This library scores a password's resistance to guessing and, separately,
//! builds a small, priority-ordered list of guessable strings from personal
//! facts (names, pets, dates) for password-hygiene audits.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based analysis and generation with
//!   cancellation support
//! - `zxcvbn` (default): Compiles the richer zxcvbn-backed scorer
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-audit` command line front-end
//!
//! # Environment Variables
//!
//! - `PWD_AUDIT_WORDS_PATH`: Extra common-word file for the heuristic scorer
//! - `PWD_AUDIT_SCORER`: `auto` (default) or `heuristic`
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{CommonWords, ScorerSelector, generate_wordlist};
//! use secrecy::SecretString;
//!
//! // Resolve the scorer once at startup
//! let words = CommonWords::load().expect("Failed to load common words");
//! let scorer = ScorerSelector::from_env().select(words);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = scorer.analyze(&password);
//! println!("Score: {}", report.score);
//!
//! let wordlist = generate_wordlist(&["alice", "rex"], Some("1990-1996"), &["", "_"], true, 1000)
//!     .expect("Invalid configuration");
//! println!("{} candidates", wordlist.len());
//! ```

// Internal modules
mod capper;
mod combiner;
mod common_words;
mod config;
mod error;
mod generator;
mod heuristic;
mod report;
#[cfg(feature = "zxcvbn")]
mod rich;
mod sections;
mod selector;
mod tokens;
mod wordlist;
mod years;

// Public API
pub use capper::{Capper, Offer};
pub use combiner::Combiner;
pub use common_words::{CommonWords, CommonWordsError};
pub use config::{
    DEFAULT_MAX_SIZE, DEFAULT_SEPARATORS, GenerationPlan, SCORER_ENV, WORDS_PATH_ENV,
    WordlistRequest, YearsSource,
};
pub use error::{GenerateError, InvalidConfigError, SpecParseError, SpecParseErrorKind};
pub use generator::{generate, generate_wordlist};
pub use heuristic::{CharClasses, HeuristicScorer, SCORE_THRESHOLDS, score_for_bits};
pub use report::{CrackTimeLabel, Score, ScorerKind, StrengthReport};
pub use selector::{Scorer, ScorerPreference, ScorerSelector};
pub use tokens::{MAX_VARIANTS_PER_TOKEN, SUBSTITUTIONS, expand_token};
pub use wordlist::{Wordlist, WriteError};
pub use years::{YearRange, default_years, parse_years};

#[cfg(feature = "zxcvbn")]
pub use rich::RichScorer;

#[cfg(feature = "async")]
pub use generator::generate_wordlist_tx;

#[cfg(feature = "async")]
pub use selector::ANALYZE_DEBOUNCE;
