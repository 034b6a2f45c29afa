//! Free-form delta string parsing
//!
//! A delta string is a sequence of `<digits?><whitespace?><unit token>`
//! occurrences separated by anything else, e.g. `"3D"`, `"1 month, 2 weeks"`
//! or `"2W 3D"`. Characters that do not form an occurrence are skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::unit::Unit;

/// Error type for delta construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeltaParseError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Recognised unit spellings, tried in order.
///
/// Plural words come before singular words, which come before the one-letter
/// abbreviations: with the abbreviations first, `"years"` would match as `y`
/// and `"minutes"` as `m`. Case separates `M` (months) from `m` (minutes).
pub const UNIT_TOKENS: &[(&str, Unit)] = &[
    ("years", Unit::Year),
    ("months", Unit::Month),
    ("weeks", Unit::Week),
    ("days", Unit::Day),
    ("hours", Unit::Hour),
    ("minutes", Unit::Minute),
    ("seconds", Unit::Second),
    ("year", Unit::Year),
    ("month", Unit::Month),
    ("week", Unit::Week),
    ("day", Unit::Day),
    ("hour", Unit::Hour),
    ("minute", Unit::Minute),
    ("second", Unit::Second),
    ("Y", Unit::Year),
    ("M", Unit::Month),
    ("W", Unit::Week),
    ("D", Unit::Day),
    ("h", Unit::Hour),
    ("m", Unit::Minute),
    ("s", Unit::Second),
];

/// Alternation over [`UNIT_TOKENS`] in table order. The regex engine picks
/// the leftmost-first alternative, so the table order decides ambiguities.
static UNIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation =
        UNIT_TOKENS.iter().map(|(token, _)| regex::escape(token)).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"([0-9]*)\s*({alternation})"))
        .expect("UNIT_REGEX should compile - this is a bug")
});

/// Resolve a matched spelling to its unit
///
/// Returns the first table entry whose spelling equals `token`.
pub fn lookup_token(token: &str) -> Option<Unit> {
    UNIT_TOKENS.iter().find(|(spelling, _)| *spelling == token).map(|(_, unit)| *unit)
}

/// Extract every `(unit, count)` occurrence from `input`, in input order
///
/// A missing digit group counts as 1. The same unit may appear several
/// times; callers that fold the result keep the last one.
///
/// # Examples
///
/// ```
/// use drako_common::time::parse::parse_occurrences;
/// use drako_common::time::Unit;
///
/// assert_eq!(
///     parse_occurrences("1 month, 2 weeks").unwrap(),
///     vec![(Unit::Month, 1), (Unit::Week, 2)]
/// );
/// assert_eq!(parse_occurrences("D").unwrap(), vec![(Unit::Day, 1)]);
/// assert!(parse_occurrences("").unwrap().is_empty());
/// ```
pub fn parse_occurrences(input: &str) -> Result<Vec<(Unit, i64)>, DeltaParseError> {
    UNIT_REGEX
        .captures_iter(input)
        .map(|caps| {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            let token = caps.get(2).map_or("", |m| m.as_str());

            let unit =
                lookup_token(token).ok_or_else(|| DeltaParseError::UnknownUnit(token.to_string()))?;
            let count = if digits.is_empty() {
                1
            } else {
                digits.parse::<i64>().map_err(|_| DeltaParseError::InvalidNumber(digits.to_string()))?
            };

            Ok((unit, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::parse.
    use super::*;

    #[test]
    fn test_table_covers_every_unit_three_ways() {
        for unit in Unit::ALL {
            let spellings = UNIT_TOKENS.iter().filter(|(_, u)| *u == unit).count();
            assert_eq!(spellings, 3, "{unit} should have plural, singular and abbreviation");
        }
    }

    #[test]
    fn test_table_orders_longer_spellings_first() {
        // no spelling may be shadowed by an earlier prefix of itself
        for (i, (later, _)) in UNIT_TOKENS.iter().enumerate() {
            for (earlier, _) in &UNIT_TOKENS[..i] {
                assert!(
                    !later.starts_with(earlier),
                    "{earlier:?} is tried before {later:?} and would shadow it"
                );
            }
        }
    }

    #[test]
    fn test_parse_abbreviations() {
        assert_eq!(parse_occurrences("3D").unwrap(), vec![(Unit::Day, 3)]);
        assert_eq!(parse_occurrences("3 D").unwrap(), vec![(Unit::Day, 3)]);
        assert_eq!(parse_occurrences("1Y").unwrap(), vec![(Unit::Year, 1)]);
        assert_eq!(parse_occurrences("10 Y").unwrap(), vec![(Unit::Year, 10)]);
        assert_eq!(parse_occurrences("2W 3D").unwrap(), vec![(Unit::Week, 2), (Unit::Day, 3)]);
    }

    #[test]
    fn test_parse_implicit_count() {
        assert_eq!(parse_occurrences("D").unwrap(), vec![(Unit::Day, 1)]);
        assert_eq!(parse_occurrences("month").unwrap(), vec![(Unit::Month, 1)]);
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(
            parse_occurrences("1 month, 2 weeks").unwrap(),
            vec![(Unit::Month, 1), (Unit::Week, 2)]
        );
        assert_eq!(
            parse_occurrences("2 years 1 day").unwrap(),
            vec![(Unit::Year, 2), (Unit::Day, 1)]
        );
    }

    #[test]
    fn test_plural_is_not_split() {
        assert_eq!(parse_occurrences("2 months").unwrap(), vec![(Unit::Month, 2)]);
        assert_eq!(parse_occurrences("5 minutes").unwrap(), vec![(Unit::Minute, 5)]);
        assert_eq!(parse_occurrences("3 seconds").unwrap(), vec![(Unit::Second, 3)]);
    }

    #[test]
    fn test_case_separates_months_from_minutes() {
        assert_eq!(parse_occurrences("M").unwrap(), vec![(Unit::Month, 1)]);
        assert_eq!(parse_occurrences("m").unwrap(), vec![(Unit::Minute, 1)]);
        assert_eq!(parse_occurrences("1M 1m").unwrap(), vec![(Unit::Month, 1), (Unit::Minute, 1)]);
    }

    #[test]
    fn test_unmatched_text_is_skipped() {
        assert_eq!(parse_occurrences("every 3D!").unwrap(), vec![(Unit::Day, 3)]);
        assert!(parse_occurrences("42").unwrap().is_empty());
        assert!(parse_occurrences("   ").unwrap().is_empty());
    }

    #[test]
    fn test_repeated_units_are_all_reported() {
        assert_eq!(parse_occurrences("1D 4D").unwrap(), vec![(Unit::Day, 1), (Unit::Day, 4)]);
    }

    #[test]
    fn test_oversized_count_is_rejected() {
        let result = parse_occurrences("99999999999999999999D");
        assert_eq!(result, Err(DeltaParseError::InvalidNumber("99999999999999999999".to_string())));
    }

    #[test]
    fn test_lookup_token() {
        assert_eq!(lookup_token("weeks"), Some(Unit::Week));
        assert_eq!(lookup_token("W"), Some(Unit::Week));
        assert_eq!(lookup_token("w"), None);
    }
}
