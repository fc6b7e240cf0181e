//! Word list loading utilities
//!
//! Turns dictionary files into raw entries, one per line. Validation is left
//! to [`DictionaryStore::build`](crate::dictionary::DictionaryStore::build).

use std::fs;
use std::io;
use std::path::Path;

/// Load raw dictionary entries from a file
///
/// Handles both LF and CRLF line endings and skips blank lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_suggester::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(lines_from_str(&content))
}

/// Split in-memory text into raw dictionary entries
///
/// # Examples
/// ```
/// use word_suggester::wordlists::loader::lines_from_str;
///
/// let words = lines_from_str("cat\r\ndog\r\n\r\nbird");
/// assert_eq!(words, vec!["cat", "dog", "bird"]);
/// ```
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    // str::lines already drops a "\r" before each "\n"; the final line may
    // still carry one when the file has no trailing newline
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
