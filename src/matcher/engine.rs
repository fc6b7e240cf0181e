//! Main word suggester interface

use super::intersect::retain_common;
use super::rule::LengthRule;
use crate::core::{Pattern, PatternError};
use crate::dictionary::{Diagnostic, DictionaryStore, PositionIndex, WordId};

/// Word suggester over a fixed dictionary
///
/// Owns the dictionary store and its position index. Both are immutable after
/// construction, so queries take `&self` and may run from many threads at once.
#[derive(Debug, Clone, Default)]
pub struct Suggester {
    store: DictionaryStore,
    index: PositionIndex,
}

impl Suggester {
    /// Build a suggester from raw dictionary entries
    ///
    /// Returns the suggester together with one diagnostic per skipped entry.
    ///
    /// # Examples
    /// ```
    /// use word_suggester::matcher::{LengthRule, Suggester};
    ///
    /// let (suggester, _) = Suggester::new(["cat", "cut", "cats", "dog"]);
    /// let words = suggester.match_pattern("c*t", LengthRule::Exact).unwrap();
    /// assert_eq!(words, vec!["CAT", "CUT"]);
    /// ```
    pub fn new<I, S>(raw_words: I) -> (Self, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (store, diagnostics) = DictionaryStore::build(raw_words);
        let index = PositionIndex::build(&store);
        (Self { store, index }, diagnostics)
    }

    /// The underlying word store
    #[inline]
    #[must_use]
    pub const fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// The underlying position index
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &PositionIndex {
        &self.index
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.store.count()
    }

    /// All words matching `pattern` under `rule`, in dictionary order
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern contains anything other than
    /// letters and `*`. The suggester stays usable for later queries.
    pub fn match_pattern(
        &self,
        pattern: &str,
        rule: LengthRule,
    ) -> Result<Vec<&str>, PatternError> {
        let pattern = Pattern::parse(pattern)?;
        Ok(self.match_parsed(&pattern, rule))
    }

    /// Like [`match_pattern`](Self::match_pattern), but logs an invalid pattern
    /// and returns no words
    #[must_use]
    pub fn suggest(&self, pattern: &str, rule: LengthRule) -> Vec<&str> {
        self.match_pattern(pattern, rule).unwrap_or_else(|err| {
            log::warn!("{}", Diagnostic::from(err));
            Vec::new()
        })
    }

    /// All words matching an already parsed pattern
    #[must_use]
    pub fn match_parsed(&self, pattern: &Pattern, rule: LengthRule) -> Vec<&str> {
        let len = pattern.len();

        let Some((&(first_pos, first_letter), rest)) = pattern.fixed().split_first() else {
            let (min_len, max_len) = rule.range(len);
            return self.match_length(min_len, max_len);
        };

        // Length filter runs once here; intersection can only drop ids after this
        let mut running: Vec<WordId> = self
            .index
            .candidates_at(first_letter, first_pos)
            .iter()
            .copied()
            .filter(|&id| rule.accepts(self.store.length(id), len))
            .collect();

        for &(position, letter) in rest {
            if running.is_empty() {
                break;
            }

            let required = self.index.candidates_at(letter, position);
            if required.is_empty() {
                log::debug!(
                    "No word has {} at position {position}",
                    char::from(letter)
                );
                return Vec::new();
            }

            retain_common(&mut running, required);
        }

        running.into_iter().map(|id| self.store.get(id)).collect()
    }

    /// All words with length in the inclusive range `[min_len, max_len]`, in
    /// dictionary order
    ///
    /// Pass `usize::MAX` as `max_len` for no upper bound.
    #[must_use]
    pub fn match_length(&self, min_len: usize, max_len: usize) -> Vec<&str> {
        self.store
            .iter()
            .filter(|(_, word)| (min_len..=max_len).contains(&word.len()))
            .map(|(_, word)| word.text())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_LEN;

    fn setup_suggester() -> Suggester {
        let (suggester, _) = Suggester::new([
            "cat",
            "cut",
            "cats",
            "dog",
            "cot",
            "coat",
            "caterpillar",
            "act",
            "at",
            "scatter",
        ]);
        suggester
    }

    #[test]
    fn exact_length_pattern() {
        let (suggester, _) = Suggester::new(["CAT", "CUT", "CATS", "DOG"]);
        let words = suggester.match_pattern("C*T", LengthRule::Exact).unwrap();
        assert_eq!(words, vec!["CAT", "CUT"]);
    }

    #[test]
    fn at_least_length_pattern() {
        let (suggester, _) = Suggester::new(["CAT", "CATS", "CATERPILLAR"]);
        let words = suggester.match_pattern("CAT", LengthRule::AtLeast).unwrap();
        assert_eq!(words, vec!["CAT", "CATS", "CATERPILLAR"]);
    }

    #[test]
    fn all_wildcards_exact() {
        let suggester = setup_suggester();
        let words = suggester.match_pattern("***", LengthRule::Exact).unwrap();
        assert_eq!(words, vec!["CAT", "CUT", "DOG", "COT", "ACT"]);
    }

    #[test]
    fn all_wildcards_at_least_is_unbounded() {
        let suggester = setup_suggester();
        let words = suggester.match_pattern("***", LengthRule::AtLeast).unwrap();
        assert_eq!(
            words,
            vec![
                "CAT",
                "CUT",
                "CATS",
                "DOG",
                "COT",
                "COAT",
                "CATERPILLAR",
                "ACT",
                "SCATTER"
            ]
        );
    }

    #[test]
    fn invalid_pattern_is_recoverable() {
        let suggester = setup_suggester();

        let err = suggester.match_pattern("C4T", LengthRule::Exact).unwrap_err();
        assert!(matches!(
            err,
            PatternError::InvalidCharacter { character: '4', .. }
        ));
        assert!(suggester.suggest("C4T", LengthRule::Exact).is_empty());

        // Still usable afterwards
        assert_eq!(suggester.suggest("d*g", LengthRule::Exact), vec!["DOG"]);
    }

    #[test]
    fn lowercase_pattern() {
        let suggester = setup_suggester();
        assert_eq!(
            suggester.match_pattern("c*t", LengthRule::Exact).unwrap(),
            suggester.match_pattern("C*T", LengthRule::Exact).unwrap()
        );
    }

    #[test]
    fn leading_wildcards() {
        let suggester = setup_suggester();
        let words = suggester.match_pattern("*AT", LengthRule::AtLeast).unwrap();
        assert_eq!(words, vec!["CAT", "CATS", "CATERPILLAR"]);
    }

    #[test]
    fn several_fixed_letters() {
        let suggester = setup_suggester();
        let words = suggester.match_pattern("C**T", LengthRule::AtLeast).unwrap();
        assert_eq!(words, vec!["COAT"]);

        let words = suggester.match_pattern("*C*T", LengthRule::AtLeast).unwrap();
        assert_eq!(words, vec!["SCATTER"]);
    }

    #[test]
    fn missing_letter_short_circuits() {
        let suggester = setup_suggester();
        assert!(
            suggester
                .match_pattern("C*Q", LengthRule::Exact)
                .unwrap()
                .is_empty()
        );
        assert!(
            suggester
                .match_pattern("Q**", LengthRule::AtLeast)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn pattern_longer_than_any_word() {
        let suggester = setup_suggester();
        let long = "C".repeat(MAX_LEN + 4);
        assert!(
            suggester
                .match_pattern(&long, LengthRule::AtLeast)
                .unwrap()
                .is_empty()
        );
        let stars = "*".repeat(MAX_LEN + 1);
        assert!(
            suggester
                .match_pattern(&stars, LengthRule::AtLeast)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn empty_pattern_at_least_returns_everything() {
        let suggester = setup_suggester();
        let words = suggester.match_pattern("", LengthRule::AtLeast).unwrap();
        assert_eq!(words.len(), suggester.word_count());
        assert!(
            suggester
                .match_pattern("", LengthRule::Exact)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn match_length_range() {
        let suggester = setup_suggester();
        assert_eq!(suggester.match_length(4, 4), vec!["CATS", "COAT"]);
        assert_eq!(suggester.match_length(2, 2), vec!["AT"]);
        assert_eq!(
            suggester.match_length(7, usize::MAX),
            vec!["CATERPILLAR", "SCATTER"]
        );
        assert!(suggester.match_length(5, 4).is_empty());
    }

    #[test]
    fn repeated_query_is_identical() {
        let suggester = setup_suggester();
        let first = suggester.match_pattern("*A*", LengthRule::AtLeast).unwrap();
        let second = suggester.match_pattern("*A*", LengthRule::AtLeast).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn results_respect_length_rule() {
        let suggester = setup_suggester();
        for pattern in ["*A*", "C***", "**T", "*"] {
            let len = pattern.len();
            for word in suggester.match_pattern(pattern, LengthRule::Exact).unwrap() {
                assert_eq!(word.len(), len, "{word} for {pattern}");
            }
            for word in suggester.match_pattern(pattern, LengthRule::AtLeast).unwrap() {
                assert!(word.len() >= len, "{word} for {pattern}");
            }
        }
    }

    #[test]
    fn matches_agree_with_brute_force() {
        let suggester = setup_suggester();
        let patterns = ["c*t", "*a*", "**t*", "s*a", "*o*t", "a", "***e***", "*"];

        for text in patterns {
            let pattern = Pattern::parse(text).unwrap();
            for rule in [LengthRule::Exact, LengthRule::AtLeast] {
                let expected: Vec<&str> = suggester
                    .store()
                    .iter()
                    .map(|(_, w)| w)
                    .filter(|w| rule.accepts(w.len(), pattern.len()))
                    .filter(|w| {
                        pattern
                            .fixed()
                            .iter()
                            .all(|&(p, l)| p < w.len() && w.letter_at(p) == l)
                    })
                    .map(|w| w.text())
                    .collect();

                assert_eq!(
                    suggester.match_parsed(&pattern, rule),
                    expected,
                    "{text} with {rule}"
                );
            }
        }
    }

    #[test]
    fn suggester_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Suggester>();
    }
}
