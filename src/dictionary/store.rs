//! Deduplicated, append-only word storage
//!
//! Every accepted word gets a [`WordId`] equal to its insertion order.

use super::diagnostic::{Diagnostic, from_word_error};
use crate::core::{Word, normalize};
use rustc_hash::FxHashSet;
use std::fmt;

/// Stable handle for a stored word (0-based insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Validated dictionary words indexed by [`WordId`]
///
/// Built once from a raw word list; there is no insert or remove afterwards.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    words: Vec<Word>,
}

impl DictionaryStore {
    /// Build a store from raw dictionary entries, in order
    ///
    /// Entries are uppercased. Entries with non-letter characters or longer than
    /// [`MAX_LEN`](crate::core::MAX_LEN) are skipped with a diagnostic. Repeats
    /// (case-insensitive) and empty entries are skipped silently; the first
    /// occurrence keeps its id.
    ///
    /// # Examples
    /// ```
    /// use word_suggester::dictionary::DictionaryStore;
    ///
    /// let (store, diagnostics) = DictionaryStore::build(["cat", "CAT", "Dog", "c4t"]);
    /// assert_eq!(store.count(), 2);
    /// assert_eq!(diagnostics.len(), 1);
    /// ```
    pub fn build<I, S>(raw_words: I) -> (Self, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut diagnostics = Vec::new();
        let mut reject = |err| {
            if let Some(diag) = from_word_error(err) {
                log::warn!("{diag}");
                diagnostics.push(diag);
            }
        };

        for raw in raw_words {
            let text = match normalize(raw.as_ref()) {
                Ok(text) => text,
                Err(err) => {
                    reject(err);
                    continue;
                }
            };

            // Duplicate check runs before the length check, so an oversized
            // word is reported once no matter how often it repeats
            if !seen.insert(text.clone()) {
                log::debug!("Skipping duplicate word: {text}");
                continue;
            }

            match Word::from_normalized(text) {
                Ok(word) => words.push(word),
                Err(err) => reject(err),
            }
        }

        log::info!(
            "Initialized dictionary with {} words ({} skipped)",
            words.len(),
            diagnostics.len()
        );

        (Self { words }, diagnostics)
    }

    /// Word text for `id`
    ///
    /// # Panics
    /// Panics if `id` was not produced by this store
    #[inline]
    #[must_use]
    pub fn get(&self, id: WordId) -> &str {
        self.words[id.index()].text()
    }

    /// Length of the word for `id`
    ///
    /// # Panics
    /// Panics if `id` was not produced by this store
    #[inline]
    #[must_use]
    pub fn length(&self, id: WordId) -> usize {
        self.words[id.index()].len()
    }

    /// Number of stored words
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All stored words with their ids, in id order
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(idx, word)| (WordId(idx as u32), word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_LEN;

    fn texts(store: &DictionaryStore) -> Vec<&str> {
        store.iter().map(|(_, w)| w.text()).collect()
    }

    #[test]
    fn build_folds_case_duplicates() {
        let (store, diagnostics) = DictionaryStore::build(["cat", "CAT", "Dog"]);

        assert_eq!(store.count(), 2);
        assert_eq!(texts(&store), vec!["CAT", "DOG"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn build_assigns_sequential_ids() {
        let (store, _) = DictionaryStore::build(["one", "two", "one", "three"]);

        let ids: Vec<usize> = store.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        let (id, _) = store.iter().nth(2).unwrap();
        assert_eq!(store.get(id), "THREE");
        assert_eq!(store.length(id), 5);
    }

    #[test]
    fn build_reports_invalid_characters() {
        let (store, diagnostics) = DictionaryStore::build(["cat", "c4t", "it's", "dog"]);

        assert_eq!(texts(&store), vec!["CAT", "DOG"]);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::InvalidCharacter {
                    word: "c4t".to_string()
                },
                Diagnostic::InvalidCharacter {
                    word: "it's".to_string()
                },
            ]
        );
    }

    #[test]
    fn build_reports_oversized_words_once() {
        let long = "a".repeat(MAX_LEN + 1);
        let (store, diagnostics) = DictionaryStore::build([long.as_str(), "ok", long.as_str()]);

        assert_eq!(texts(&store), vec!["OK"]);
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics[0],
            Diagnostic::TooLong { len, .. } if *len == MAX_LEN + 1
        ));
    }

    #[test]
    fn build_accepts_max_length() {
        let longest = "b".repeat(MAX_LEN);
        let (store, diagnostics) = DictionaryStore::build([longest]);

        assert_eq!(store.count(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn build_skips_empty_entries_silently() {
        let (store, diagnostics) = DictionaryStore::build(["", "a", ""]);

        assert_eq!(texts(&store), vec!["A"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn stored_words_are_unique_uppercase() {
        let raw = ["Apple", "apple", "APPLE", "banana", "Banana", "cherry"];
        let (store, _) = DictionaryStore::build(raw);

        let words = texts(&store);
        let unique: FxHashSet<&str> = words.iter().copied().collect();
        assert_eq!(unique.len(), words.len());
        assert!(
            words
                .iter()
                .all(|w| w.bytes().all(|b| b.is_ascii_uppercase()))
        );
    }

    #[test]
    fn empty_store() {
        let (store, diagnostics) = DictionaryStore::build(Vec::<String>::new());
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
        assert!(diagnostics.is_empty());
    }
}
