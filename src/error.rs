//! Error kinds reported by wordlist generation.

use thiserror::Error;

/// Why a fragment of a years or separators specification was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecParseErrorKind {
    #[error("not a number")]
    NotNumeric,
    #[error("range start is after range end")]
    ReversedRange,
    #[error("year outside {min}-{max}")]
    OutOfRange { min: u16, max: u16 },
    #[error("contains a control character")]
    ControlCharacter,
}

/// A malformed years or separators specification.
///
/// Carries the offending fragment so the caller can point at it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid specification fragment '{fragment}': {kind}")]
pub struct SpecParseError {
    pub fragment: String,
    pub kind: SpecParseErrorKind,
}

impl SpecParseError {
    pub(crate) fn new(fragment: impl Into<String>, kind: SpecParseErrorKind) -> Self {
        Self {
            fragment: fragment.into(),
            kind,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfigError {
    #[error("maximum wordlist size must be at least 1")]
    MaxSizeZero,
    #[error("no usable input tokens were supplied")]
    NoTokens,
    #[error("at least one separator is required")]
    NoSeparators,
}

/// Error returned by [`crate::generate_wordlist`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    SpecParse(#[from] SpecParseError),
    #[error(transparent)]
    InvalidConfig(#[from] InvalidConfigError),
    #[error("wordlist generation cancelled")]
    Cancelled,
}
