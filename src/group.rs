//! Similarity grouping: pack merged segments into slides.
//!
//! Two forces decide where a slide ends:
//!
//! 1. **Line budget**: a slide holds at most `max_lines` wrapped lines.
//! 2. **Topic**: adjacent segments whose embeddings drift apart start a new
//!    slide even when there is room left.
//!
//! ```text
//! Segments:   [S1]   [S2]   [S3]   [S4]
//! Lines:       1      2      1      1        max_lines = 4
//! sim(i-1,i):  -     0.92   0.91   0.40      threshold = 0.85
//!                                   ^ topic shift
//!
//! Slides: [S1 S2 S3] [S4]
//! ```
//!
//! ## Oversized Segments
//!
//! A segment that alone needs more than `max_lines` lines cannot fit
//! anywhere. It is word-wrapped and cut into chunks of `max_lines` lines,
//! each emitted as a flagged slide for human review:
//!
//! ```text
//! max_lines = 4, segment wraps to 10 lines
//! -> [lines 1-4] [lines 5-8] [lines 9-10]   (all flagged)
//! ```
//!
//! ## Approximation
//!
//! Similarity is measured against the immediately preceding segment, not
//! against the slide built so far. The comparison is strict: a similarity
//! exactly equal to the threshold keeps segments together.
//!
//! All embeddings are computed up front in one batched call.

use crate::config::LineBudget;
use crate::embed::{cosine_similarity, encode_all, Embedder};
use crate::lines::wrap;
use crate::{Result, Slide};

/// Accumulates segments for the slide under construction.
#[derive(Debug, Default)]
struct SlideBuilder {
    text: String,
    lines: usize,
}

impl SlideBuilder {
    fn push(&mut self, segment: &str, lines: usize) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(segment);
        self.lines += lines;
    }

    /// Emit the current slide, if any, and reset.
    fn flush_into(&mut self, slides: &mut Vec<Slide>) {
        let text = std::mem::take(&mut self.text);
        self.lines = 0;
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            slides.push(Slide::natural(trimmed));
        }
    }
}

/// Word-wrap an oversized segment and cut it into flagged slides of at most
/// `max_lines` lines each.
pub(crate) fn force_split(segment: &str, budget: LineBudget) -> Vec<Slide> {
    wrap(segment, budget.max_chars())
        .chunks(budget.max_lines())
        .map(|chunk| Slide::forced(chunk.join("\n")))
        .collect()
}

/// Group merged segments into slides.
///
/// Empty input returns the single empty-slide sentinel without calling the
/// embedder. Input made only of blank segments also yields the sentinel.
///
/// # Errors
///
/// Returns an error if the embedder fails or returns the wrong number of
/// vectors. No partial deck is produced.
///
/// ## Example
///
/// ```rust
/// use scriptdeck::{group_segments, LineBudget, Result};
///
/// let same_topic = |texts: &[String]| -> Result<Vec<Vec<f32>>> {
///     Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
/// };
/// let segments = vec!["첫 문장입니다.".to_string(), "둘째 문장입니다.".to_string()];
///
/// let slides = group_segments(&segments, LineBudget::new(4, 18)?, &same_topic, 0.85)?;
/// assert_eq!(slides.len(), 1);
/// assert_eq!(slides[0].text, "첫 문장입니다.\n둘째 문장입니다.");
/// # Ok::<(), scriptdeck::Error>(())
/// ```
pub fn group_segments(
    segments: &[String],
    budget: LineBudget,
    embedder: &dyn Embedder,
    threshold: f32,
) -> Result<Vec<Slide>> {
    if segments.is_empty() {
        return Ok(Slide::empty_deck());
    }

    let embeddings = encode_all(embedder, segments)?;

    let mut slides = Vec::new();
    let mut current = SlideBuilder::default();

    for (i, segment) in segments.iter().enumerate() {
        let lines = budget.estimate(segment);

        if !budget.fits(lines) {
            current.flush_into(&mut slides);
            let chunks = force_split(segment, budget);
            log::warn!(
                "segment {i} needs {lines} lines (max {}), forced into {} flagged slides",
                budget.max_lines(),
                chunks.len()
            );
            slides.extend(chunks);
            continue;
        }

        let similar =
            !(i > 0 && cosine_similarity(&embeddings[i - 1], &embeddings[i]) < threshold);

        if similar && !budget.would_overflow(current.lines, lines) {
            current.push(segment, lines);
        } else {
            current.flush_into(&mut slides);
            current.push(segment, lines);
        }
    }

    current.flush_into(&mut slides);

    if slides.is_empty() {
        // Only blank segments
        return Ok(Slide::empty_deck());
    }

    log::debug!("grouped {} segments into {} slides", segments.len(), slides.len());

    Ok(slides)
}
