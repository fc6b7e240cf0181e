//! Display functions for command results

use super::formatters::{create_progress_bar, highlight_match, length_range};
use crate::commands::{BatchResult, DictionaryStats, LengthResult, QueryResult};
use colored::Colorize;

/// Print the matches of a single pattern, at most `limit` of them
pub fn print_query_result(result: &QueryResult, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern: {}  (length: {})",
        result.pattern.to_string().bright_yellow().bold(),
        result.rule
    );
    println!("{}", "─".repeat(60).cyan());

    let shown = limit.unwrap_or(result.words.len());
    for word in result.words.iter().take(shown) {
        println!("  {}", highlight_match(word, &result.pattern));
    }
    print_truncation(result.words.len(), shown);

    print_match_count(result.words.len(), result.duration.as_secs_f64());
}

/// Print the words of a length-range query, at most `limit` of them
pub fn print_length_result(result: &LengthResult, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Length: {}",
        length_range(result.min_len, result.max_len)
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let shown = limit.unwrap_or(result.words.len());
    for word in result.words.iter().take(shown) {
        println!("  {word}");
    }
    print_truncation(result.words.len(), shown);

    print_match_count(result.words.len(), result.duration.as_secs_f64());
}

/// Print dictionary statistics with a length histogram
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Contents:".bright_cyan().bold());
    println!(
        "   Words:            {}",
        stats.total_words.to_string().bright_yellow().bold()
    );
    if let Some(longest) = &stats.longest {
        println!("   Longest:          {longest} ({} letters)", longest.len());
    }

    println!("\n⚠️  {}", "Skipped entries:".bright_cyan().bold());
    println!("   Invalid letters:  {}", stats.invalid_character);
    println!("   Too long:         {}", stats.too_long);

    println!("\n📈 {}", "Length distribution:".bright_cyan().bold());
    let max_count = stats.by_length.values().copied().max().unwrap_or(0);
    for (len, &count) in &stats.by_length {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {len:>2}: {} {count:5}", bar.green());
    }
}

/// Print every batch entry followed by a summary
pub fn print_batch_result(result: &BatchResult) {
    for entry in &result.entries {
        match &entry.outcome {
            Ok(words) => {
                println!(
                    "{} {}",
                    entry.pattern.bright_yellow().bold(),
                    format!("({})", words.len()).bright_black()
                );
                for word in words {
                    println!("  {word}");
                }
            }
            Err(err) => println!("{} {}", entry.pattern.red().bold(), err.to_string().red()),
        }
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("   Patterns:         {}", result.entries.len());
    println!("   Length rule:      {}", result.rule);
    println!("   Total matches:    {}", result.total_matches());
    if result.failed() > 0 {
        println!(
            "   Invalid:          {}",
            result.failed().to_string().red().bold()
        );
    }
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second());
}

fn print_truncation(total: usize, shown: usize) {
    if total > shown {
        println!("  {}", format!("...and {} more", total - shown).bright_black());
    }
}

fn print_match_count(count: usize, seconds: f64) {
    println!();
    if count == 0 {
        println!("{}", "No matches".red().bold());
    } else {
        println!(
            "{}",
            format!(
                "✅ {count} {} ({:.2} ms)",
                if count == 1 { "match" } else { "matches" },
                seconds * 1000.0
            )
            .green()
            .bold()
        );
    }
}
