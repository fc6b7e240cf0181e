//! Dictionary statistics

use crate::dictionary::Diagnostic;
use crate::matcher::Suggester;
use std::collections::BTreeMap;

/// Summary of a loaded dictionary
#[derive(Debug)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub invalid_character: usize,
    pub too_long: usize,
    pub by_length: BTreeMap<usize, usize>,
    pub longest: Option<String>,
}

impl DictionaryStats {
    /// Entries skipped with a diagnostic
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.invalid_character + self.too_long
    }
}

/// Count words per length and tally construction diagnostics
#[must_use]
pub fn collect_stats(suggester: &Suggester, diagnostics: &[Diagnostic]) -> DictionaryStats {
    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    let mut longest: Option<&str> = None;

    for (_, word) in suggester.store().iter() {
        *by_length.entry(word.len()).or_insert(0) += 1;
        if longest.is_none_or(|current| word.len() > current.len()) {
            longest = Some(word.text());
        }
    }

    let (mut invalid_character, mut too_long) = (0, 0);
    for diagnostic in diagnostics {
        match diagnostic {
            Diagnostic::InvalidCharacter { .. } => invalid_character += 1,
            Diagnostic::TooLong { .. } => too_long += 1,
            Diagnostic::InvalidPattern { .. } => {}
        }
    }

    DictionaryStats {
        total_words: suggester.word_count(),
        invalid_character,
        too_long,
        by_length,
        longest: longest.map(str::to_string),
    }
}
