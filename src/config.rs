//! Line budget and segmenter configuration.
//!
//! ## The Budget
//!
//! A slide holds a fixed number of wrapped lines at a fixed column count:
//!
//! ```text
//! max_chars = 18, max_lines = 4
//!
//! line 1: 오늘은 좋은 날입니다.
//! line 2: 내일도 좋은 날이 될 거예요.
//! line 3: (free)
//! line 4: (free)
//! ```
//!
//! Every grouping decision reduces to "does this many lines still fit?",
//! so [`LineBudget`] carries both numbers together and answers that one
//! question. [`SegmenterConfig`] adds the remaining tunables of the pipeline.

use crate::lines::estimate_lines;
use crate::{Error, Result};

/// Lines per slide and characters per line.
///
/// # Examples
///
/// ```rust
/// use scriptdeck::LineBudget;
///
/// let budget = LineBudget::new(4, 18).unwrap();
/// assert!(budget.fits(4));
/// assert!(!budget.fits(5));
/// assert!(budget.would_overflow(3, 2));
///
/// assert!(LineBudget::new(0, 18).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineBudget {
    max_lines: usize,
    max_chars: usize,
}

impl LineBudget {
    /// Create a budget of `max_lines` lines, each `max_chars` columns wide.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLineBudget`] if either value is zero.
    pub fn new(max_lines: usize, max_chars: usize) -> Result<Self> {
        if max_lines == 0 || max_chars == 0 {
            return Err(Error::InvalidLineBudget {
                max_lines,
                max_chars,
            });
        }
        Ok(Self {
            max_lines,
            max_chars,
        })
    }

    /// Maximum wrapped lines per slide.
    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Maximum characters per line.
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Estimated line count of `text` at this budget's width.
    #[must_use]
    pub fn estimate(&self, text: &str) -> usize {
        estimate_lines(text, self.max_chars)
    }

    /// Whether `lines` fits on one slide.
    #[must_use]
    pub const fn fits(&self, lines: usize) -> bool {
        lines <= self.max_lines
    }

    /// Whether adding `additional` lines to `current` would exceed the budget.
    #[must_use]
    pub const fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max_lines
    }
}

impl Default for LineBudget {
    fn default() -> Self {
        // Four lines of eighteen columns: large-type subtitles
        Self {
            max_lines: 4,
            max_chars: 18,
        }
    }
}

impl TryFrom<(usize, usize)> for LineBudget {
    type Error = Error;

    fn try_from((max_lines, max_chars): (usize, usize)) -> Result<Self> {
        Self::new(max_lines, max_chars)
    }
}

/// Tunables of the full script-to-slides pipeline.
///
/// ```rust
/// use scriptdeck::{LineBudget, SegmenterConfig};
///
/// let config = SegmenterConfig::new(LineBudget::new(5, 24)?)
///     .with_threshold(0.7)?
///     .with_compaction(true);
///
/// assert_eq!(config.budget().max_lines(), 5);
/// assert!((config.threshold() - 0.7).abs() < f32::EPSILON);
/// # Ok::<(), scriptdeck::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmenterConfig {
    budget: LineBudget,
    threshold: f32,
    max_segment_chars: usize,
    compact_short_slides: bool,
    short_slide_lines: usize,
}

impl SegmenterConfig {
    /// Default similarity threshold.
    pub const DEFAULT_THRESHOLD: f32 = 0.85;
    /// Default cap on merged segment length, in characters.
    pub const DEFAULT_MAX_SEGMENT_CHARS: usize = crate::fragment::DEFAULT_MAX_SEGMENT_CHARS;
    /// Default line count at or below which a slide counts as short.
    pub const DEFAULT_SHORT_SLIDE_LINES: usize = 2;

    /// Create a configuration with the given budget and default tunables.
    #[must_use]
    pub const fn new(budget: LineBudget) -> Self {
        Self {
            budget,
            threshold: Self::DEFAULT_THRESHOLD,
            max_segment_chars: Self::DEFAULT_MAX_SEGMENT_CHARS,
            compact_short_slides: false,
            short_slide_lines: Self::DEFAULT_SHORT_SLIDE_LINES,
        }
    }

    /// Set the similarity threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] unless `threshold` is within `0.0..=1.0`.
    pub fn with_threshold(self, threshold: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        Ok(Self { threshold, ..self })
    }

    /// Set the merged segment length cap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegmentLength`] if `max_segment_chars == 0`.
    pub fn with_max_segment_chars(self, max_segment_chars: usize) -> Result<Self> {
        if max_segment_chars == 0 {
            return Err(Error::InvalidSegmentLength(max_segment_chars));
        }
        Ok(Self {
            max_segment_chars,
            ..self
        })
    }

    /// Enable or disable the short-slide post-pass.
    #[must_use]
    pub const fn with_compaction(self, compact_short_slides: bool) -> Self {
        Self {
            compact_short_slides,
            ..self
        }
    }

    /// Set the line count at or below which a slide is merged forward.
    #[must_use]
    pub const fn with_short_slide_lines(self, short_slide_lines: usize) -> Self {
        Self {
            short_slide_lines,
            ..self
        }
    }

    /// The line budget.
    #[must_use]
    pub const fn budget(&self) -> LineBudget {
        self.budget
    }

    /// The similarity threshold.
    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The merged segment length cap.
    #[must_use]
    pub const fn max_segment_chars(&self) -> usize {
        self.max_segment_chars
    }

    /// Whether the short-slide post-pass runs.
    #[must_use]
    pub const fn compact_short_slides(&self) -> bool {
        self.compact_short_slides
    }

    /// Line count at or below which a slide is merged forward.
    #[must_use]
    pub const fn short_slide_lines(&self) -> usize {
        self.short_slide_lines
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::new(LineBudget::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_fits() {
        let budget = LineBudget::new(4, 18).unwrap();
        assert!(budget.fits(0));
        assert!(budget.fits(4));
        assert!(!budget.fits(5));
    }

    #[test]
    fn test_would_overflow() {
        let budget = LineBudget::new(4, 18).unwrap();
        assert!(!budget.would_overflow(2, 1));
        assert!(!budget.would_overflow(2, 2));
        assert!(budget.would_overflow(2, 3));
        assert!(budget.would_overflow(usize::MAX, 1));
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(matches!(
            LineBudget::new(0, 18),
            Err(Error::InvalidLineBudget { max_lines: 0, .. })
        ));
        assert!(LineBudget::new(4, 0).is_err());
        assert!(LineBudget::try_from((4, 0)).is_err());
    }

    #[test]
    fn test_budget_estimate_uses_width() {
        let budget = LineBudget::new(4, 5).unwrap();
        assert_eq!(budget.estimate("aaaa bbbb"), 2);
    }

    #[test]
    fn test_threshold_bounds() {
        let config = SegmenterConfig::default();
        assert!(config.with_threshold(0.0).is_ok());
        assert!(config.with_threshold(1.0).is_ok());
        assert!(config.with_threshold(-0.1).is_err());
        assert!(config.with_threshold(1.1).is_err());
        assert!(config.with_threshold(f32::NAN).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SegmenterConfig::default();
        assert_eq!(config.budget(), LineBudget::new(4, 18).unwrap());
        assert!((config.threshold() - 0.85).abs() < f32::EPSILON);
        assert_eq!(config.max_segment_chars(), 200);
        assert!(!config.compact_short_slides());
        assert_eq!(config.short_slide_lines(), 2);
    }

    #[test]
    fn test_zero_segment_length_rejected() {
        assert!(SegmenterConfig::default().with_max_segment_chars(0).is_err());
    }
}
