//! Per-letter, per-position word index
//!
//! `index[letter][position]` holds the ids of every word with `letter` at
//! `position`, sorted ascending. Buckets are filled in id order, so sorting
//! comes for free.

use super::store::{DictionaryStore, WordId};
use crate::core::MAX_LEN;

const ALPHABET_SIZE: usize = 26;

/// Map from `(letter, position)` to the sorted ids of matching words
///
/// Holds ids only; word text stays in the [`DictionaryStore`].
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    buckets: [Vec<Vec<WordId>>; ALPHABET_SIZE],
}

impl PositionIndex {
    /// Index every word of `store`
    #[must_use]
    pub fn build(store: &DictionaryStore) -> Self {
        let mut buckets: [Vec<Vec<WordId>>; ALPHABET_SIZE] = Default::default();

        for (id, word) in store.iter() {
            for (position, letter) in word.letters() {
                let positions = &mut buckets[usize::from(letter - b'A')];
                if positions.len() <= position {
                    positions.resize_with(position + 1, Vec::new);
                }
                positions[position].push(id);
            }
        }

        log::debug!(
            "Indexed {} words across {} letter/position buckets",
            store.count(),
            buckets
                .iter()
                .flatten()
                .filter(|ids| !ids.is_empty())
                .count()
        );

        Self { buckets }
    }

    /// Ids of words with `letter` at `position`, ascending
    ///
    /// `letter` is case-insensitive. Returns an empty slice for non-letters,
    /// positions past [`MAX_LEN`], and pairs no word populates.
    #[must_use]
    pub fn candidates_at(&self, letter: u8, position: usize) -> &[WordId] {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() || position >= MAX_LEN {
            return &[];
        }

        self.buckets[usize::from(letter - b'A')]
            .get(position)
            .map_or(&[], Vec::as_slice)
    }
}
