//! Formatting utilities for terminal output

use crate::core::Pattern;
use colored::Colorize;

/// Color the letters of `word` fixed by `pattern`
///
/// Wildcard positions and letters past the pattern's end are left plain.
#[must_use]
pub fn highlight_match(word: &str, pattern: &Pattern) -> String {
    let mut fixed = pattern.fixed().iter().peekable();
    let mut result = String::with_capacity(word.len() * 4);

    for (position, ch) in word.chars().enumerate() {
        if fixed.next_if(|&&(p, _)| p == position).is_some() {
            result.push_str(&ch.to_string().bright_green().bold().to_string());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Describe an inclusive length range, `None` meaning no upper bound
#[must_use]
pub fn length_range(min_len: usize, max_len: Option<usize>) -> String {
    match max_len {
        Some(max) if max == min_len => format!("exactly {min_len}"),
        Some(max) => format!("{min_len}..={max}"),
        None => format!("{min_len} or more"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_plain_when_colors_disabled() {
        colored::control::set_override(false);
        let pattern = Pattern::parse("C*T").unwrap();
        assert_eq!(highlight_match("CATS", &pattern), "CATS");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn length_range_descriptions() {
        assert_eq!(length_range(3, Some(3)), "exactly 3");
        assert_eq!(length_range(3, Some(5)), "3..=5");
        assert_eq!(length_range(4, None), "4 or more");
    }
}
