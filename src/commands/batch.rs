//! Batch queries
//!
//! Runs many patterns against one dictionary in parallel. Queries only read the
//! suggester, so they share it without locking.

use crate::core::PatternError;
use crate::matcher::{LengthRule, Suggester};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of one pattern in a batch
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub pattern: String,
    pub outcome: Result<Vec<String>, PatternError>,
}

/// Result of a batch run, entries in input order
#[derive(Debug)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub rule: LengthRule,
    pub duration: Duration,
}

impl BatchResult {
    /// Patterns rejected as invalid
    #[must_use]
    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_err()).count()
    }

    /// Sum of matches over all valid patterns
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok())
            .map(Vec::len)
            .sum()
    }

    #[must_use]
    pub fn queries_per_second(&self) -> f64 {
        self.entries.len() as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Run every pattern under `rule`
///
/// Blank patterns are skipped. A progress bar is drawn on stderr when
/// `show_progress` is set.
pub fn run_batch<S: AsRef<str> + Sync>(
    suggester: &Suggester,
    patterns: &[S],
    rule: LengthRule,
    show_progress: bool,
) -> BatchResult {
    let patterns: Vec<&str> = patterns
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect();

    let pb = if show_progress {
        progress_bar(patterns.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    // par_iter keeps input order in collect()
    let entries: Vec<BatchEntry> = patterns
        .par_iter()
        .map(|&pattern| {
            let outcome = suggester
                .match_pattern(pattern, rule)
                .map(|words| words.into_iter().map(str::to_string).collect());
            if let Err(err) = &outcome {
                log::warn!("{err}");
            }
            pb.inc(1);
            BatchEntry {
                pattern: pattern.to_string(),
                outcome,
            }
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_and_clear();

    log::info!(
        "Answered {} patterns in {:.3}s",
        entries.len(),
        duration.as_secs_f64()
    );

    BatchResult {
        entries,
        rule,
        duration,
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(err) => log::debug!("Falling back to default progress style: {err}"),
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_suggester() -> Suggester {
        let (suggester, _) = Suggester::new(["cat", "cut", "cats", "dog", "dig"]);
        suggester
    }

    #[test]
    fn batch_keeps_input_order() {
        let suggester = setup_suggester();
        let patterns = ["d*g", "c*t", "***s", "c4t"];
        let result = run_batch(&suggester, &patterns, LengthRule::Exact, false);

        let order: Vec<&str> = result.entries.iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(order, patterns);
        assert_eq!(
            result.entries[0].outcome.as_ref().unwrap(),
            &vec!["DOG".to_string(), "DIG".to_string()]
        );
        assert_eq!(
            result.entries[2].outcome.as_ref().unwrap(),
            &vec!["CATS".to_string()]
        );
    }

    #[test]
    fn batch_counts_failures_and_matches() {
        let suggester = setup_suggester();
        let patterns = vec!["c*t".to_string(), "c4t".to_string(), "x".to_string()];
        let result = run_batch(&suggester, &patterns, LengthRule::Exact, false);

        assert_eq!(result.failed(), 1);
        assert_eq!(result.total_matches(), 2);
    }

    #[test]
    fn batch_skips_blank_patterns() {
        let suggester = setup_suggester();
        let result = run_batch(&suggester, &["", "  ", "dog"], LengthRule::AtLeast, false);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.rule, LengthRule::AtLeast);
    }

    #[test]
    fn batch_matches_sequential_queries() {
        let suggester = setup_suggester();
        let patterns: Vec<String> = ["*", "**", "***", "c**", "*a*", "d*"]
            .iter()
            .map(|p| (*p).to_string())
            .collect();
        let result = run_batch(&suggester, &patterns, LengthRule::AtLeast, false);

        for entry in &result.entries {
            let expected: Vec<String> = suggester
                .match_pattern(&entry.pattern, LengthRule::AtLeast)
                .unwrap()
                .into_iter()
                .map(str::to_string)
                .collect();
            assert_eq!(entry.outcome.as_ref().unwrap(), &expected);
        }
    }
}
