//! Sentence splitting.
//!
//! Turns one paragraph of script text into sentence-like units.
//!
//! ## Two Paths
//!
//! The primary path asks a [`SentenceModel`] for boundaries. The default model
//! is Unicode Standard Annex #29 (UAX #29) sentence segmentation, which works
//! for Hangul as well as Latin text and already knows about decimals and
//! ellipses:
//!
//! ```text
//! "오늘은 좋은 날입니다. 내일도 좋을 거예요."
//!  -> ["오늘은 좋은 날입니다.", "내일도 좋을 거예요."]
//! ```
//!
//! A model may fail (a remote tokenizer, a model file that didn't load). The
//! splitter never propagates that failure: it logs a warning and falls back
//! to a plain regex cut after `.`, `!` or `?` followed by whitespace.
//!
//! ```text
//! "Hi there! How are you?  Fine."  -> ["Hi there!", "How are you?", "Fine."]
//! ```
//!
//! The fallback keeps the terminator on each piece, so the fragment merger
//! can still see where a sentence properly ended.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::Result;

/// Terminal punctuation followed by whitespace.
static FALLBACK_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// A sentence boundary model.
///
/// This allows plugging in different backends (UAX #29, a dictionary-based
/// Korean splitter, a remote service).
pub trait SentenceModel: Send + Sync {
    /// Split `text` into sentences.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot process the text. The
    /// [`SentenceSplitter`] recovers from it with the regex fallback.
    fn split(&self, text: &str) -> Result<Vec<String>>;
}

/// UAX #29 sentence boundaries via `unicode-segmentation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentences;

impl SentenceModel for UnicodeSentences {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Split on `.`/`!`/`?` followed by whitespace, keeping the terminator.
///
/// ```rust
/// use scriptdeck::regex_split;
///
/// assert_eq!(regex_split("One. Two!  Three"), vec!["One.", "Two!", "Three"]);
/// assert!(regex_split("  ").is_empty());
/// ```
pub fn regex_split(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in FALLBACK_BOUNDARY.find_iter(text) {
        // The terminator is one ASCII byte
        let end = m.start() + 1;
        sentences.push(&text[start..end]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sentence splitter with a model-backed primary path and a regex fallback.
///
/// ## Example
///
/// ```rust
/// use scriptdeck::SentenceSplitter;
///
/// let splitter = SentenceSplitter::default();
/// let sentences = splitter.split("오늘은 좋은 날입니다. 내일도 좋을 거예요.");
///
/// assert_eq!(sentences, vec!["오늘은 좋은 날입니다.", "내일도 좋을 거예요."]);
/// assert!(splitter.split("   \n ").is_empty());
/// ```
#[derive(Clone)]
pub struct SentenceSplitter {
    model: Arc<dyn SentenceModel>,
}

impl SentenceSplitter {
    /// Create a splitter backed by a specific model.
    pub fn new(model: Arc<dyn SentenceModel>) -> Self {
        Self { model }
    }

    /// Split a paragraph into trimmed, non-empty sentences.
    ///
    /// Blank input yields an empty vector. Model failures are logged and
    /// recovered with [`regex_split`].
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![];
        }

        match self.model.split(text) {
            Ok(sentences) => {
                let sentences: Vec<String> = sentences
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if sentences.is_empty() {
                    log::debug!(
                        "sentence model returned nothing for non-blank text, using regex split"
                    );
                    regex_split(text)
                } else {
                    sentences
                }
            }
            Err(e) => {
                log::warn!("sentence model failed ({e}), using regex split");
                regex_split(text)
            }
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(Arc::new(UnicodeSentences))
    }
}

impl std::fmt::Debug for SentenceSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceSplitter").finish_non_exhaustive()
    }
}
