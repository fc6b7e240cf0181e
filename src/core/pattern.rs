//! Query pattern parsing
//!
//! A pattern is a sequence of letters and `*` wildcards. Each wildcard matches
//! exactly one letter; fixed letters must appear at the same position.

use std::fmt;

/// Wildcard marker matching any single letter
pub const WILDCARD: char = '*';

/// A parsed query pattern
///
/// Stores the pattern length and its fixed letters in ascending position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    len: usize,
    fixed: Vec<(usize, u8)>,
}

/// Error type for invalid patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidCharacter { pattern: String, character: char },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { pattern, character } => write!(
                f,
                "Invalid character '{character}' in pattern '{pattern}' -- use letters and '{WILDCARD}'"
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Parse a pattern such as `"c*t"` or `"**ATS"`
    ///
    /// Letters are case-insensitive and stored uppercase.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidCharacter` for the first character that is
    /// neither an ASCII letter nor `*`.
    ///
    /// # Examples
    /// ```
    /// use word_suggester::core::Pattern;
    ///
    /// let pattern = Pattern::parse("c*t").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.fixed(), &[(0, b'C'), (2, b'T')]);
    ///
    /// assert!(Pattern::parse("c4t").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut fixed = Vec::new();
        let mut len = 0;

        for (position, ch) in text.chars().enumerate() {
            match ch {
                WILDCARD => {}
                c if c.is_ascii_alphabetic() => {
                    fixed.push((position, c.to_ascii_uppercase() as u8));
                }
                c => {
                    return Err(PatternError::InvalidCharacter {
                        pattern: text.to_string(),
                        character: c,
                    });
                }
            }
            len = position + 1;
        }

        Ok(Self { len, fixed })
    }

    /// Number of positions (letters plus wildcards)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for the empty pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed `(position, letter)` pairs in ascending position order
    #[inline]
    #[must_use]
    pub fn fixed(&self) -> &[(usize, u8)] {
        &self.fixed
    }

    /// True if the pattern has no fixed letter
    #[inline]
    #[must_use]
    pub fn is_all_wildcards(&self) -> bool {
        self.fixed.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fixed = self.fixed.iter().peekable();
        for position in 0..self.len {
            match fixed.peek() {
                Some(&&(p, letter)) if p == position => {
                    write!(f, "{}", char::from(letter))?;
                    fixed.next();
                }
                _ => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
