//! Non-fatal problems reported while building or querying a dictionary

use crate::core::{PatternError, WordError};
use std::fmt;

/// A skipped dictionary word or a rejected query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Dictionary entry contained a character outside A-Z
    InvalidCharacter { word: String },
    /// Dictionary entry longer than [`MAX_LEN`](crate::core::MAX_LEN)
    TooLong { word: String, len: usize },
    /// Query pattern contained a character other than a letter or `*`
    InvalidPattern { pattern: String, character: char },
}

impl Diagnostic {
    /// True for diagnostics produced while ingesting the word list
    #[must_use]
    pub const fn is_ingestion(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. } | Self::TooLong { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { word } => {
                let err = WordError::InvalidCharacter { word: word.clone() };
                fmt::Display::fmt(&err, f)
            }
            Self::TooLong { word, len } => {
                let err = WordError::TooLong {
                    word: word.clone(),
                    len: *len,
                };
                fmt::Display::fmt(&err, f)
            }
            Self::InvalidPattern { pattern, character } => {
                let err = PatternError::InvalidCharacter {
                    pattern: pattern.clone(),
                    character: *character,
                };
                fmt::Display::fmt(&err, f)
            }
        }
    }
}

impl From<PatternError> for Diagnostic {
    fn from(err: PatternError) -> Self {
        match err {
            PatternError::InvalidCharacter { pattern, character } => {
                Self::InvalidPattern { pattern, character }
            }
        }
    }
}

/// Convert a rejected word into its diagnostic
///
/// Returns `None` for errors that are dropped silently (empty entries).
pub(crate) fn from_word_error(err: WordError) -> Option<Diagnostic> {
    match err {
        WordError::Empty => None,
        WordError::InvalidCharacter { word } => Some(Diagnostic::InvalidCharacter { word }),
        WordError::TooLong { word, len } => Some(Diagnostic::TooLong { word, len }),
    }
}
