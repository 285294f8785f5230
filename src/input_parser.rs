// WHY: Turns raw comma-separated text into the integer sequence the detectors consume
// Strict parsing is the core contract; lenient formatting is an optional pre-pass for CLI input

use thiserror::Error;

/// Validation failures for raw input text
/// Positions are 1-based token positions, matching what a user sees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid input string (comma-separated numbers)")]
    Empty,

    #[error("Empty value at position {position}")]
    EmptyValue { position: usize },

    #[error("Invalid integer \"{token}\" at position {position}")]
    InvalidInteger { token: String, position: usize },
}

/// Parse comma-separated integers into an ordered sequence
///
/// Tokens are trimmed before parsing. Only whole-number literals with an optional
/// leading `+` or `-` are accepted: `"2.5"` and `"1e3"` are rejected, negative
/// values and zero are fine, and anything outside the `i64` range is reported as
/// an invalid integer.
///
/// # Example
/// ```
/// use detect_sums::input_parser::parse_sequence;
/// assert_eq!(parse_sequence(" 1 , 2 , 3 ").unwrap(), vec![1, 2, 3]);
/// ```
pub fn parse_sequence(raw: &str) -> Result<Vec<i64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(index, token)| parse_token(token.trim(), index + 1))
        .collect()
}

fn parse_token(token: &str, position: usize) -> Result<i64, ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::EmptyValue { position });
    }

    token
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInteger {
            token: token.to_string(),
            position,
        })
}

/// Tidy loosely typed input before strict parsing
///
/// Collapses whitespace runs, trims around commas, drops empty tokens and strips
/// leading/trailing commas. Never validates: `"1, x"` stays `"1,x"` and the strict
/// parser reports it.
pub fn format_input(raw: &str) -> String {
    raw.split(',')
        .map(|token| token.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Number of comma-separated tokens, used by callers that cap input size
/// before handing text to the analyzer
pub fn token_count(raw: &str) -> usize {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split(',').count()
    }
}
