//! Line-oriented interactive mode
//!
//! Reads one pattern per line and answers with the matching words followed by
//! a `---` terminator. Lines starting with `#` are prompts that a driving
//! program can skip.

use crate::matcher::{LengthRule, Suggester};
use std::io::{self, BufRead, Write};

/// Marks the end of one answer
pub const END_OF_RESULTS: &str = "---";

/// Prefix of lines that carry no results
pub const COMMENT_PREFIX: &str = "#";

/// Input that ends the session
pub const QUIT_COMMAND: &str = "!Q";

/// Input that switches between exact and at-least length matching
pub const TOGGLE_LENGTH_COMMAND: &str = "!L";

/// Run the interactive loop until `!Q` or end of input
///
/// Invalid patterns are logged and answered with an empty result, so the
/// session keeps going. Returns the number of patterns answered.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use word_suggester::commands::run_interactive;
/// use word_suggester::matcher::{LengthRule, Suggester};
///
/// let (suggester, _) = Suggester::new(["cat", "cut", "dog"]);
/// let mut output = Vec::new();
/// run_interactive(&suggester, Cursor::new("c*t\n!Q\n"), &mut output, LengthRule::Exact).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("CAT\nCUT\n---\n"));
/// ```
pub fn run_interactive<R: BufRead, W: Write>(
    suggester: &Suggester,
    mut reader: R,
    mut writer: W,
    mut rule: LengthRule,
) -> io::Result<usize> {
    let mut answered = 0;
    let mut input = String::new();

    loop {
        writeln!(
            writer,
            "{COMMENT_PREFIX} Please enter a pattern, or {QUIT_COMMAND} to quit:"
        )?;
        writeln!(writer, "{COMMENT_PREFIX} -> ")?;
        writer.flush()?;

        input.clear();
        if reader.read_line(&mut input)? == 0 {
            log::debug!("End of input, leaving interactive mode");
            break;
        }

        match input.trim() {
            "" => writeln!(writer, "{END_OF_RESULTS}")?,
            QUIT_COMMAND => break,
            TOGGLE_LENGTH_COMMAND => {
                rule = rule.toggled();
                writeln!(writer, "{COMMENT_PREFIX} length: {rule}")?;
            }
            pattern => {
                for word in suggester.suggest(pattern, rule) {
                    writeln!(writer, "{word}")?;
                }
                writeln!(writer, "{END_OF_RESULTS}")?;
                answered += 1;
            }
        }
        writer.flush()?;
    }

    writer.flush()?;
    Ok(answered)
}
