//! The end-to-end pipeline.
//!
//! ```text
//! paragraphs ─split─> sentences ─merge─> segments ─embed+group─> slides ─compact?─> deck
//! ```
//!
//! Each stage consumes its whole input before the next starts; nothing is
//! mutated in place, so the same input and configuration always produce the
//! same deck.

use crate::compact::compact_slides;
use crate::config::{LineBudget, SegmenterConfig};
use crate::embed::Embedder;
use crate::fragment::merge_sentences;
use crate::group::group_segments;
use crate::sentence::SentenceSplitter;
use crate::{Result, Slide};

/// Split pasted text into paragraphs on blank lines.
///
/// ```rust
/// use scriptdeck::paragraphs_from_text;
///
/// let text = "첫 문단입니다.\n\n  둘째 문단입니다.  \n\n\n\n";
/// assert_eq!(paragraphs_from_text(text), vec!["첫 문단입니다.", "둘째 문단입니다."]);
/// ```
pub fn paragraphs_from_text(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Script-to-slides segmenter.
///
/// ## Example
///
/// ```rust
/// use scriptdeck::{LineBudget, Result, SegmenterConfig, SlideSegmenter};
///
/// let flat = |texts: &[String]| -> Result<Vec<Vec<f32>>> {
///     Ok(texts.iter().map(|_| vec![1.0]).collect())
/// };
/// let segmenter = SlideSegmenter::new(SegmenterConfig::new(LineBudget::new(4, 18)?));
///
/// let slides = segmenter.segment(&["오늘은 좋은 날입니다."], &flat)?;
/// assert_eq!(slides.len(), 1);
/// assert!(!slides[0].flagged);
/// # Ok::<(), scriptdeck::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlideSegmenter {
    config: SegmenterConfig,
    splitter: SentenceSplitter,
}

impl SlideSegmenter {
    /// Create a segmenter with the default sentence splitter.
    #[must_use]
    pub fn new(config: SegmenterConfig) -> Self {
        Self {
            config,
            splitter: SentenceSplitter::default(),
        }
    }

    /// Use a specific sentence splitter.
    #[must_use]
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Split and merge paragraphs into segments, without embedding.
    pub fn segments<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<String> {
        let sentences: Vec<String> = paragraphs
            .iter()
            .flat_map(|p| self.splitter.split(p.as_ref()))
            .collect();
        let segments = merge_sentences(&sentences, self.config.max_segment_chars());

        log::debug!(
            "{} paragraphs -> {} sentences -> {} segments",
            paragraphs.len(),
            sentences.len(),
            segments.len()
        );

        segments
    }

    /// Run the full pipeline.
    ///
    /// Input with no content yields the single empty-slide sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedder fails. No partial deck is produced.
    pub fn segment<S: AsRef<str>>(
        &self,
        paragraphs: &[S],
        embedder: &dyn Embedder,
    ) -> Result<Vec<Slide>> {
        let segments = self.segments(paragraphs);
        let slides = group_segments(
            &segments,
            self.config.budget(),
            embedder,
            self.config.threshold(),
        )?;

        if self.config.compact_short_slides() {
            Ok(compact_slides(
                &slides,
                self.config.budget(),
                self.config.short_slide_lines(),
            ))
        } else {
            Ok(slides)
        }
    }
}

/// Segment paragraphs into slides with default merging and no compaction.
///
/// # Errors
///
/// Returns an error if the budget or threshold is invalid, or if the
/// embedder fails.
///
/// ```rust
/// use scriptdeck::{segment_into_slides, Result, Slide};
///
/// let flat = |texts: &[String]| -> Result<Vec<Vec<f32>>> {
///     Ok(texts.iter().map(|_| vec![1.0]).collect())
/// };
/// let slides = segment_into_slides::<&str>(&[], 4, 18, &flat, 0.85)?;
/// assert_eq!(slides, vec![Slide::default()]);
/// # Ok::<(), scriptdeck::Error>(())
/// ```
pub fn segment_into_slides<S: AsRef<str>>(
    paragraphs: &[S],
    max_lines_per_slide: usize,
    max_chars_per_line: usize,
    embedder: &dyn Embedder,
    similarity_threshold: f32,
) -> Result<Vec<Slide>> {
    let budget = LineBudget::new(max_lines_per_slide, max_chars_per_line)?;
    let config = SegmenterConfig::new(budget).with_threshold(similarity_threshold)?;
    SlideSegmenter::new(config).segment(paragraphs, embedder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::SentenceModel;
    use crate::Error;
    use std::sync::Arc;

    struct Broken;

    impl SentenceModel for Broken {
        fn split(&self, _text: &str) -> Result<Vec<String>> {
            Err(Error::SentenceModel("model not loaded".into()))
        }
    }

    struct Blank;

    impl SentenceModel for Blank {
        fn split(&self, _text: &str) -> Result<Vec<String>> {
            Ok(vec!["   ".to_string()])
        }
    }

    fn alternating(texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .enumerate()
            .map(|(i, _)| if i % 2 == 0 { vec![1.0, 0.0] } else { vec![0.0, 1.0] })
            .collect())
    }

    fn flat(texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
    }

    #[test]
    fn test_paragraphs_from_text() {
        assert!(paragraphs_from_text("").is_empty());
        assert!(paragraphs_from_text("\n\n \n\n").is_empty());
        assert_eq!(paragraphs_from_text("one\ntwo"), vec!["one\ntwo"]);
    }

    #[test]
    fn test_blank_paragraphs_give_sentinel() {
        let slides = segment_into_slides(&["  ", "\n"], 4, 18, &flat, 0.85).unwrap();
        assert_eq!(slides, vec![Slide::default()]);
    }

    #[test]
    fn test_merges_across_paragraph_boundary() {
        let segmenter = SlideSegmenter::default();
        let segments = segmenter.segments(&["그리고", "우리는 함께 앞으로 나아갑니다."]);
        assert_eq!(segments, vec!["그리고 우리는 함께 앞으로 나아갑니다."]);
    }

    #[test]
    fn test_compaction_toggle() {
        let cfg = SegmenterConfig::new(LineBudget::new(4, 40).unwrap());
        let topics = |texts: &[String]| -> Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .enumerate()
                .map(|(i, _)| if i % 2 == 0 { vec![1.0, 0.0] } else { vec![0.0, 1.0] })
                .collect())
        };
        let paragraphs = ["오늘은 정말 좋은 날입니다.", "내일은 비가 올 예정입니다."];

        let plain = SlideSegmenter::new(cfg).segment(&paragraphs, &topics).unwrap();
        assert_eq!(plain.len(), 2);

        let compacted = SlideSegmenter::new(cfg.with_compaction(true))
            .segment(&paragraphs, &topics)
            .unwrap();
        assert_eq!(compacted.len(), 1);
        assert_eq!(compacted[0].text, paragraphs.join("\n"));
    }

    #[test]
    fn test_failing_splitter_recovers_end_to_end() {
        let cfg = SegmenterConfig::new(LineBudget::new(4, 40).unwrap());
        let segmenter = SlideSegmenter::new(cfg)
            .with_splitter(SentenceSplitter::new(Arc::new(Broken)));
        assert_eq!(segmenter.config(), &cfg);

        let slides = segmenter
            .segment(&["첫 문장입니다. 둘째 문장입니다?"], &flat)
            .unwrap();
        assert_eq!(slides, vec![Slide::natural("첫 문장입니다. 둘째 문장입니다?")]);
    }

    #[test]
    fn test_blank_splitter_output_keeps_text() {
        let segmenter = SlideSegmenter::default()
            .with_splitter(SentenceSplitter::new(Arc::new(Blank)));
        let slides = segmenter.segment(&["오늘은 정말 좋은 날입니다."], &flat).unwrap();
        assert_eq!(slides, vec![Slide::natural("오늘은 정말 좋은 날입니다.")]);
    }

    #[test]
    fn test_short_slide_lines_threshold() {
        // Each paragraph wraps to two lines at width 10
        let paragraphs = ["오늘은 정말 좋은 날입니다.", "내일은 비가 옵니다."];
        let cfg = SegmenterConfig::new(LineBudget::new(4, 10).unwrap()).with_compaction(true);

        let merged = SlideSegmenter::new(cfg)
            .segment(&paragraphs, &alternating)
            .unwrap();
        assert_eq!(merged.len(), 1);

        let strict = cfg.with_short_slide_lines(1);
        let segmenter = SlideSegmenter::new(strict);
        assert_eq!(segmenter.config().short_slide_lines(), 1);
        let kept = segmenter.segment(&paragraphs, &alternating).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].text, paragraphs[0]);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(segment_into_slides(&["x"], 0, 18, &flat, 0.85).is_err());
        assert!(segment_into_slides(&["x"], 4, 18, &flat, 1.5).is_err());
    }
}
