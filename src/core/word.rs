//! Dictionary word representation
//!
//! A Word is an uppercase ASCII string of 1 to [`MAX_LEN`] letters.

use std::fmt;

/// Longest word accepted into a dictionary
pub const MAX_LEN: usize = 31;

/// A validated, uppercase dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter { word: String },
    TooLong { word: String, len: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty"),
            Self::InvalidCharacter { word } => {
                write!(f, "Invalid character in '{word}' -- ignoring this word")
            }
            Self::TooLong { word, len } => write!(
                f,
                "Word is too long ({len} letters, max {MAX_LEN}), will be ignored: {word}"
            ),
        }
    }
}

impl std::error::Error for WordError {}

/// Uppercase `raw`, failing on the first non-alphabetic character
///
/// Length is not checked here so callers can deduplicate before rejecting
/// oversized words.
///
/// # Errors
/// Returns `WordError::InvalidCharacter` if any character is not an ASCII letter.
pub fn normalize(raw: &str) -> Result<String, WordError> {
    if raw.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(raw.to_ascii_uppercase())
    } else {
        Err(WordError::InvalidCharacter {
            word: raw.to_string(),
        })
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains anything other than ASCII letters
    /// - Is longer than [`MAX_LEN`]
    ///
    /// # Examples
    /// ```
    /// use word_suggester::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref())?;
        Self::from_normalized(text)
    }

    /// Wrap an already-uppercased word, checking only its length
    pub(crate) fn from_normalized(text: String) -> Result<Self, WordError> {
        match text.len() {
            0 => Err(WordError::Empty),
            len if len > MAX_LEN => Err(WordError::TooLong { word: text, len }),
            _ => Ok(Self { text }),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter at `position` as an uppercase ASCII byte
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Iterate over `(position, letter)` pairs
    pub fn letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.text.bytes().enumerate()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
