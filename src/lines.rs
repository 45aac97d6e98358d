//! Line estimation by word-wrap simulation.
//!
//! Every budget decision downstream asks one question: "how many lines will
//! this text occupy on a slide?" We answer it by wrapping the text the way a
//! renderer with a fixed column count would.
//!
//! ## Wrapping Policy
//!
//! ```text
//! width = 10
//!
//! "the quick brown fox"    ->  "the quick"   (9)
//!                              "brown fox"   (9)
//!
//! "supercalifragilistic"   ->  "supercalifragilistic"  (20, kept whole)
//! ```
//!
//! - Explicit newlines always start a new paragraph.
//! - Words are never split. A word longer than the width gets a line of its
//!   own and overflows it.
//! - Runs of whitespace between words collapse to a single space.
//! - An empty paragraph still takes one line, so blank-line spacing survives.
//!
//! Widths are measured in Unicode scalar values (`char`s), not bytes, so a
//! Hangul syllable counts as one column.
//!
//! Changing any of these rules moves slide boundaries end to end.

/// Greedily wrap one paragraph (no newlines) at `width` columns.
///
/// Returns no lines for an empty or whitespace-only paragraph.
fn wrap_paragraph(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap `text` into display lines at `max_chars_per_line` columns.
///
/// Each `\n`-separated paragraph is wrapped on its own; an empty paragraph
/// yields one empty line. The result always has at least one line.
///
/// ```rust
/// use scriptdeck::wrap;
///
/// let lines = wrap("the quick brown fox", 10);
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// ```
pub fn wrap(text: &str, max_chars_per_line: usize) -> Vec<String> {
    let width = max_chars_per_line.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let wrapped = wrap_paragraph(paragraph, width);
        if wrapped.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrapped);
        }
    }

    lines
}

/// Estimate how many rendered lines `text` occupies at `max_chars_per_line`.
///
/// Pure and deterministic. Never returns 0: even empty text occupies a line.
///
/// ```rust
/// use scriptdeck::estimate_lines;
///
/// assert_eq!(estimate_lines("short", 18), 1);
/// assert_eq!(estimate_lines("first\n\nthird", 18), 3);
/// ```
pub fn estimate_lines(text: &str, max_chars_per_line: usize) -> usize {
    let width = max_chars_per_line.max(1);

    text.split('\n')
        .map(|paragraph| wrap_paragraph(paragraph, width).len().max(1))
        .sum::<usize>()
        .max(1)
}
