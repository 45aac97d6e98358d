//! # scriptdeck
//!
//! Turn a narration script into a slide deck.
//!
//! ## The Problem
//!
//! Subtitled videos and read-along presentations show a script a few lines at
//! a time. Someone has to decide where each slide ends. Doing it by character
//! count alone cuts thoughts in half; doing it by sentence alone overflows the
//! screen or leaves a lonely "그리고" on a slide of its own.
//!
//! This crate breaks slides where the grammar allows it, within a line budget
//! of `max_lines` × `max_chars`, and also when the topic changes.
//!
//! ## The Pipeline
//!
//! ```text
//! paragraphs
//!     │  SentenceSplitter      UAX #29 boundaries, regex fallback
//!     ▼
//! sentences
//!     │  merge_sentences       glue incomplete fragments, cap at 200 chars
//!     ▼
//! segments
//!     │  group_segments        one batched embedding call, then
//!     │                        line budget + adjacent cosine similarity
//!     ▼
//! slides  ──(optional)──> compact_slides   fold short slides forward
//! ```
//!
//! Segments too large for any slide are word-wrapped and cut into chunks of
//! `max_lines` lines. Those slides come back with `flagged = true`: they
//! need a human to look at them.
//!
//! ## Quick Start
//!
//! ```rust
//! use scriptdeck::{any_flagged, segment_into_slides, Result};
//!
//! // Any batched closure works as an embedder; use FastEmbedder
//! // (feature `semantic`) for real models.
//! let embedder = |texts: &[String]| -> Result<Vec<Vec<f32>>> {
//!     Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
//! };
//!
//! let paragraphs = ["오늘은 좋은 날입니다. 그리고", "내일도 좋은 날이 될 거예요."];
//! let slides = segment_into_slides(&paragraphs, 4, 18, &embedder, 0.85)?;
//!
//! for slide in &slides {
//!     println!("{slide}\n---");
//! }
//! assert!(!any_flagged(&slides));
//! # Ok::<(), scriptdeck::Error>(())
//! ```
//!
//! ## Line Estimation
//!
//! Every budget check goes through [`estimate_lines`], a greedy word-wrap
//! that never splits words and counts columns in chars. Changing it moves
//! slide boundaries everywhere.

mod compact;
mod config;
mod embed;
mod error;
mod fragment;
mod group;
mod lines;
mod pipeline;
mod sentence;
mod slide;

#[cfg(feature = "semantic")]
mod semantic;

pub use compact::compact_slides;
pub use config::{LineBudget, SegmenterConfig};
pub use embed::{cosine_similarity, Embedder};
pub use error::{Error, Result};
pub use fragment::{
    ends_with_any, is_incomplete, merge_sentences, CONNECTIVE_ADVERBS, DANGLING_ENDINGS,
    DEFAULT_MAX_SEGMENT_CHARS, SENTENCE_FINAL_ENDINGS,
};
pub use group::group_segments;
pub use lines::{estimate_lines, wrap};
pub use pipeline::{paragraphs_from_text, segment_into_slides, SlideSegmenter};
pub use sentence::{regex_split, SentenceModel, SentenceSplitter, UnicodeSentences};
pub use slide::{any_flagged, flagged_positions, Slide};

#[cfg(feature = "semantic")]
pub use semantic::FastEmbedder;
