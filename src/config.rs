//! Wordlist generation configuration and its validation.
//!
//! # Environment Variables
//!
//! - `PWD_AUDIT_WORDS_PATH`: extra common-word file merged into the
//!   built-in list (see [`crate::CommonWords::load`])
//! - `PWD_AUDIT_SCORER`: `auto` (default) or `heuristic`
//!   (see [`crate::ScorerSelector::from_env`])

use indexmap::IndexSet;

use crate::error::{InvalidConfigError, SpecParseError, SpecParseErrorKind};
use crate::tokens::normalize_token;
use crate::years::{YearRange, default_years, parse_years};

pub const WORDS_PATH_ENV: &str = "PWD_AUDIT_WORDS_PATH";
pub const SCORER_ENV: &str = "PWD_AUDIT_SCORER";

pub const DEFAULT_MAX_SIZE: usize = 50_000;
pub const DEFAULT_SEPARATORS: [&str; 4] = ["", "_", "-", "."];

/// Where the year list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearsSource {
    /// Current year plus and minus one.
    #[default]
    Default,
    /// A `1990-1996,2024` style specification. Blank means no years.
    Spec(String),
}

impl From<Option<&str>> for YearsSource {
    fn from(spec: Option<&str>) -> Self {
        match spec {
            Some(spec) => Self::Spec(spec.to_string()),
            None => Self::Default,
        }
    }
}

/// Everything one wordlist generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistRequest {
    pub tokens: Vec<String>,
    pub years: YearsSource,
    pub separators: Vec<String>,
    pub leet: bool,
    pub max_size: usize,
    pub year_range: YearRange,
}

impl Default for WordlistRequest {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            years: YearsSource::Default,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            leet: true,
            max_size: DEFAULT_MAX_SIZE,
            year_range: YearRange::default(),
        }
    }
}

/// A validated request: every input is usable and immutable from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub tokens: Vec<String>,
    pub years: Vec<String>,
    pub separators: Vec<String>,
    pub leet: bool,
    pub max_size: usize,
}

impl WordlistRequest {
    pub fn new<T: AsRef<str>>(tokens: &[T]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
            ..Default::default()
        }
    }

    /// Validates the request, failing fast on the first problem found.
    ///
    /// Unusable tokens (blank or containing control characters) are
    /// discarded and duplicates collapse to their first occurrence.
    /// Duplicate separators are collapsed the same way.
    pub fn validate(&self) -> Result<GenerationPlan, crate::GenerateError> {
        if self.max_size < 1 {
            return Err(InvalidConfigError::MaxSizeZero.into());
        }

        let years = match &self.years {
            YearsSource::Default => default_years(self.year_range),
            YearsSource::Spec(spec) => parse_years(spec, self.year_range)?,
        };

        let mut separators = IndexSet::new();
        for sep in &self.separators {
            if sep.chars().any(char::is_control) {
                return Err(SpecParseError::new(sep.as_str(), SpecParseErrorKind::ControlCharacter).into());
            }
            separators.insert(sep.clone());
        }
        if separators.is_empty() {
            return Err(InvalidConfigError::NoSeparators.into());
        }

        let mut tokens = IndexSet::new();
        for raw in &self.tokens {
            match normalize_token(raw) {
                Some(token) => {
                    tokens.insert(token.to_string());
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Discarding unusable token {:?}", raw);
                }
            }
        }
        if tokens.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Wordlist requested without usable tokens");
            return Err(InvalidConfigError::NoTokens.into());
        }

        Ok(GenerationPlan {
            tokens: tokens.into_iter().collect(),
            years,
            separators: separators.into_iter().collect(),
            leet: self.leet,
            max_size: self.max_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerateError;

    #[test]
    fn test_defaults() {
        let request = WordlistRequest::default();
        assert_eq!(request.separators, vec!["", "_", "-", "."]);
        assert_eq!(request.max_size, 50_000);
        assert!(request.leet);
        assert_eq!(request.years, YearsSource::Default);
    }

    #[test]
    fn test_validate_zero_max_size() {
        let request = WordlistRequest {
            max_size: 0,
            ..WordlistRequest::new(&["rex"])
        };
        assert_eq!(
            request.validate().unwrap_err(),
            GenerateError::InvalidConfig(InvalidConfigError::MaxSizeZero)
        );
    }

    #[test]
    fn test_validate_no_tokens() {
        let request = WordlistRequest::new(&["  ", ""]);
        assert_eq!(
            request.validate().unwrap_err(),
            GenerateError::InvalidConfig(InvalidConfigError::NoTokens)
        );
    }

    #[test]
    fn test_validate_no_separators() {
        let request = WordlistRequest {
            separators: Vec::new(),
            ..WordlistRequest::new(&["rex"])
        };
        assert_eq!(
            request.validate().unwrap_err(),
            GenerateError::InvalidConfig(InvalidConfigError::NoSeparators)
        );
    }

    #[test]
    fn test_validate_bad_separator() {
        let request = WordlistRequest {
            separators: vec!["\n".to_string()],
            ..WordlistRequest::new(&["rex"])
        };
        assert!(matches!(
            request.validate(),
            Err(GenerateError::SpecParse(SpecParseError {
                kind: SpecParseErrorKind::ControlCharacter,
                ..
            }))
        ));
    }

    #[test]
    fn test_validate_bad_years_before_tokens() {
        let request = WordlistRequest {
            years: YearsSource::Spec("2005-2001".to_string()),
            ..WordlistRequest::new(&[""])
        };
        assert!(matches!(request.validate(), Err(GenerateError::SpecParse(_))));
    }

    #[test]
    fn test_validate_dedups_tokens_and_separators() {
        let request = WordlistRequest {
            years: YearsSource::Spec(String::new()),
            separators: vec!["-".to_string(), "".to_string(), "-".to_string()],
            ..WordlistRequest::new(&[" rex", "rex ", "luna", "\t"])
        };
        let plan = request.validate().unwrap();
        assert_eq!(plan.tokens, vec!["rex", "luna"]);
        assert_eq!(plan.separators, vec!["-", ""]);
        assert!(plan.years.is_empty());
    }

    #[test]
    fn test_years_source_from_option() {
        assert_eq!(YearsSource::from(None), YearsSource::Default);
        assert_eq!(
            YearsSource::from(Some("2024")),
            YearsSource::Spec("2024".to_string())
        );
    }
}
