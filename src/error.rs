//! Error types for scriptdeck.

/// Errors that can occur while segmenting a script into slides.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Line budget with zero lines or zero columns.
    #[error("invalid line budget: {max_lines} lines x {max_chars} chars (both must be > 0)")]
    InvalidLineBudget {
        /// Requested lines per slide.
        max_lines: usize,
        /// Requested characters per line.
        max_chars: usize,
    },

    /// Similarity threshold outside `[0, 1]`.
    #[error("invalid similarity threshold: {0} (must be within 0.0..=1.0)")]
    InvalidThreshold(f32),

    /// Segment length cap must be > 0.
    #[error("invalid segment length cap: {0} (must be > 0)")]
    InvalidSegmentLength(usize),

    /// Embedding model error.
    #[error("embedding error: {0}")]
    Embedding(String),

    /// The embedder returned a different number of vectors than inputs.
    #[error("embedder returned {actual} vectors for {expected} segments")]
    EmbeddingCount {
        /// Number of segments sent to the embedder.
        expected: usize,
        /// Number of vectors that came back.
        actual: usize,
    },

    /// Sentence boundary model error.
    #[error("sentence model error: {0}")]
    SentenceModel(String),
}

/// Result type for scriptdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
