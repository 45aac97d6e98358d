//! Short-slide compaction.
//!
//! Grouping can leave slides with a single short line, typically right
//! before a topic shift. A single forward sweep folds each short slide into
//! its successor when the pair still fits the budget:
//!
//! ```text
//! max_lines = 4, short = at most 2 lines
//!
//! [1 line] [2 lines] [3 lines]  ->  [3 lines] [3 lines]
//!  \______merged___/
//! ```
//!
//! The sweep never looks back and never iterates to a fixed point, so three
//! consecutive short slides merge only the first pair; the third may stay
//! short.

use crate::config::LineBudget;
use crate::Slide;

/// Merge short slides forward in one pass.
///
/// A slide with at most `short_lines` estimated lines merges with the next
/// slide when the newline-joined text fits `budget`. The merged slide is
/// flagged if either input was.
///
/// ```rust
/// use scriptdeck::{compact_slides, LineBudget, Slide};
///
/// let slides = vec![Slide::natural("one"), Slide::natural("two"), Slide::natural("three")];
/// let compacted = compact_slides(&slides, LineBudget::new(4, 18)?, 2);
///
/// assert_eq!(compacted, vec![Slide::natural("one\ntwo"), Slide::natural("three")]);
/// # Ok::<(), scriptdeck::Error>(())
/// ```
pub fn compact_slides(slides: &[Slide], budget: LineBudget, short_lines: usize) -> Vec<Slide> {
    let mut compacted = Vec::with_capacity(slides.len());
    let mut i = 0;

    while i < slides.len() {
        let slide = &slides[i];

        if let Some(next) = slides.get(i + 1) {
            if budget.estimate(&slide.text) <= short_lines {
                let combined = format!("{}\n{}", slide.text, next.text);
                if budget.fits(budget.estimate(&combined)) {
                    compacted.push(Slide::new(combined, slide.flagged || next.flagged));
                    i += 2;
                    continue;
                }
            }
        }

        compacted.push(slide.clone());
        i += 1;
    }

    compacted
}
