//! One-shot pattern and length queries

use crate::core::{Pattern, PatternError};
use crate::matcher::{LengthRule, Suggester};
use std::time::{Duration, Instant};

/// Result of a single pattern query
pub struct QueryResult {
    pub pattern: Pattern,
    pub rule: LengthRule,
    pub words: Vec<String>,
    pub duration: Duration,
}

/// Result of a length-range query
pub struct LengthResult {
    pub min_len: usize,
    pub max_len: Option<usize>,
    pub words: Vec<String>,
    pub duration: Duration,
}

/// Match one pattern against the dictionary
///
/// # Errors
///
/// Returns an error if the pattern contains characters other than letters and `*`.
pub fn run_query(
    suggester: &Suggester,
    pattern: &str,
    rule: LengthRule,
) -> Result<QueryResult, PatternError> {
    let start = Instant::now();
    let pattern = Pattern::parse(pattern)?;
    let words = suggester
        .match_parsed(&pattern, rule)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(QueryResult {
        pattern,
        rule,
        words,
        duration: start.elapsed(),
    })
}

/// List every word with length in `[min_len, max_len]`
///
/// `None` for `max_len` leaves the range open above.
#[must_use]
pub fn run_length(suggester: &Suggester, min_len: usize, max_len: Option<usize>) -> LengthResult {
    let start = Instant::now();
    let words = suggester
        .match_length(min_len, max_len.unwrap_or(usize::MAX))
        .into_iter()
        .map(str::to_string)
        .collect();

    LengthResult {
        min_len,
        max_len,
        words,
        duration: start.elapsed(),
    }
}
