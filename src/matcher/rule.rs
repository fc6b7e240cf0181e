//! Length constraint applied to pattern queries

use std::fmt;

/// How a match's length relates to the pattern's length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthRule {
    /// Matches are exactly as long as the pattern
    #[default]
    Exact,
    /// Matches are at least as long as the pattern
    AtLeast,
}

impl LengthRule {
    /// Check a word length against a pattern length
    #[inline]
    #[must_use]
    pub const fn accepts(self, word_len: usize, pattern_len: usize) -> bool {
        match self {
            Self::Exact => word_len == pattern_len,
            Self::AtLeast => word_len >= pattern_len,
        }
    }

    /// Inclusive length range matched by an all-wildcard pattern of `pattern_len`
    ///
    /// `AtLeast` has no upper bound.
    #[must_use]
    pub const fn range(self, pattern_len: usize) -> (usize, usize) {
        match self {
            Self::Exact => (pattern_len, pattern_len),
            Self::AtLeast => (pattern_len, usize::MAX),
        }
    }

    /// The other rule
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Exact => Self::AtLeast,
            Self::AtLeast => Self::Exact,
        }
    }
}

impl From<bool> for LengthRule {
    /// `true` enforces exact length
    fn from(enforce_length: bool) -> Self {
        if enforce_length {
            Self::Exact
        } else {
            Self::AtLeast
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::AtLeast => write!(f, "at-least"),
        }
    }
}
