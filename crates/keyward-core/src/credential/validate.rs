//! Key/value pair validation for single edition input

use thiserror::Error;

/// Separator between key and value in a single edition input line
pub const PAIR_SEPARATOR: char = '=';

/// Reason a `key=value` line was rejected
///
/// Never fatal: the prompter shows the message and asks for the pair again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPair {
    /// No separator in the line
    #[error("Invalid key value credential")]
    MissingSeparator,
    /// Key is empty or whitespace
    #[error("The key must not be empty.")]
    EmptyKey,
    /// Value is empty or whitespace
    #[error("The value must not be empty.")]
    EmptyValue,
    /// More than one line was entered for a single pair
    #[error("Enter one key=value pair per line.")]
    MultipleLines,
}

/// Split a line on the first separator.
///
/// Everything after the first `=` belongs to the value, so values such as
/// `url=https://host/?a=b` survive intact.
#[must_use]
pub fn split_pair(line: &str) -> Vec<&str> {
    line.splitn(2, PAIR_SEPARATOR).collect()
}

/// Check a split pair.
///
/// Well-formed when there are at least two parts, both the first and the
/// last part are non-empty after trimming, and no part spans a line break.
pub fn validate(pair: &[&str]) -> Result<(), InvalidPair> {
    let (key, value) = match pair {
        [key, .., value] => (key, value),
        _ => return Err(InvalidPair::MissingSeparator),
    };

    if key.trim().is_empty() {
        return Err(InvalidPair::EmptyKey);
    }

    if value.trim().is_empty() {
        return Err(InvalidPair::EmptyValue);
    }

    if pair.iter().any(|part| part.contains(['\n', '\r'])) {
        return Err(InvalidPair::MultipleLines);
    }

    Ok(())
}

/// Split and validate a line, returning the trimmed key and value
pub fn parse_pair(line: &str) -> Result<(String, String), InvalidPair> {
    let pair = split_pair(line);
    validate(&pair)?;

    let key = pair[0].trim().to_string();
    let value = pair[pair.len() - 1].trim().to_string();
    Ok((key, value))
}
