//! Year expansion - parses year specifications such as `1990-1996,2024`.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::error::{SpecParseError, SpecParseErrorKind};

/// Inclusive range of years accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: u16,
    pub max: u16,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 1900,
            max: 2099,
        }
    }
}

impl YearRange {
    fn contains(&self, year: u16) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// Parses a comma-separated list of years and `start-end` ranges.
///
/// Items are trimmed and empty items are skipped, so a blank specification
/// yields an empty list. The result is sorted and deduplicated.
pub fn parse_years(spec: &str, range: YearRange) -> Result<Vec<String>, SpecParseError> {
    let mut years = BTreeSet::new();

    for item in spec.split(',').map(str::trim).filter(|i| !i.is_empty()) {
        match item.split_once('-') {
            Some((start, end)) => {
                let start = parse_year(start.trim(), item, range)?;
                let end = parse_year(end.trim(), item, range)?;
                if start > end {
                    return Err(SpecParseError::new(item, SpecParseErrorKind::ReversedRange));
                }
                years.extend(start..=end);
            }
            None => {
                years.insert(parse_year(item, item, range)?);
            }
        }
    }

    Ok(years.into_iter().map(|y| y.to_string()).collect())
}

fn parse_year(text: &str, item: &str, range: YearRange) -> Result<u16, SpecParseError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(SpecParseError::new(item, SpecParseErrorKind::NotNumeric));
    }
    let out_of_range = || {
        SpecParseError::new(
            item,
            SpecParseErrorKind::OutOfRange {
                min: range.min,
                max: range.max,
            },
        )
    };
    if text.len() != 4 {
        return Err(out_of_range());
    }
    let year: u16 = text.parse().map_err(|_| out_of_range())?;
    if !range.contains(year) {
        return Err(out_of_range());
    }
    Ok(year)
}

/// The year before, the year of, and the year after `current`,
/// limited to `range`.
pub fn years_around(current: i32, range: YearRange) -> Vec<String> {
    (current - 1..=current + 1)
        .filter_map(|y| u16::try_from(y).ok())
        .filter(|y| range.contains(*y))
        .map(|y| y.to_string())
        .collect()
}

/// Default year list: current local year plus and minus one.
pub fn default_years(range: YearRange) -> Vec<String> {
    years_around(chrono::Local::now().year(), range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(spec: &str) -> Result<Vec<String>, SpecParseError> {
        parse_years(spec, YearRange::default())
    }

    #[test]
    fn test_parse_range_and_single() {
        let years = parse("1990-1996,2024").unwrap();
        assert_eq!(
            years,
            vec!["1990", "1991", "1992", "1993", "1994", "1995", "1996", "2024"]
        );
    }

    #[test]
    fn test_parse_sorts_and_dedups() {
        let years = parse("2024, 2001 ,2000-2002,2024").unwrap();
        assert_eq!(years, vec!["2000", "2001", "2002", "2024"]);
    }

    #[test]
    fn test_parse_reversed_range() {
        let err = parse("2005-2001").unwrap_err();
        assert_eq!(err.kind, SpecParseErrorKind::ReversedRange);
        assert_eq!(err.fragment, "2005-2001");
    }

    #[test]
    fn test_parse_not_numeric() {
        let err = parse("1999,abc").unwrap_err();
        assert_eq!(err.kind, SpecParseErrorKind::NotNumeric);
        assert_eq!(err.fragment, "abc");

        let err = parse("1990-").unwrap_err();
        assert_eq!(err.kind, SpecParseErrorKind::NotNumeric);
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = parse("1850").unwrap_err();
        assert!(matches!(err.kind, SpecParseErrorKind::OutOfRange { min: 1900, max: 2099 }));
        assert!(parse("2100").is_err());
        assert!(parse("99").is_err());
    }

    #[test]
    fn test_blank_spec_is_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_custom_range() {
        let range = YearRange { min: 2000, max: 2010 };
        assert!(parse_years("1999", range).is_err());
        assert_eq!(parse_years("2010", range).unwrap(), vec!["2010"]);
    }

    #[test]
    fn test_years_around() {
        assert_eq!(
            years_around(2026, YearRange::default()),
            vec!["2025", "2026", "2027"]
        );
        assert_eq!(years_around(2099, YearRange::default()), vec!["2098", "2099"]);
    }

    #[test]
    fn test_default_years_has_three_consecutive() {
        let years = default_years(YearRange::default());
        assert_eq!(years.len(), 3);
        let numbers: Vec<u16> = years.iter().map(|y| y.parse().unwrap()).collect();
        assert_eq!(numbers[1], numbers[0] + 1);
        assert_eq!(numbers[2], numbers[1] + 1);
    }
}
