//! The embedding capability and vector similarity.
//!
//! The grouper never loads a model itself. It receives anything that
//! implements [`Embedder`]: a fastembed model (feature `semantic`), a remote
//! service client, or a closure in tests.
//!
//! ```rust
//! use scriptdeck::{Embedder, Result};
//!
//! // Any batched closure is an embedder
//! let lengths = |texts: &[String]| -> Result<Vec<Vec<f32>>> {
//!     Ok(texts.iter().map(|t| vec![t.len() as f32, 1.0]).collect())
//! };
//!
//! let vectors = lengths.encode(&["ab".to_string()]).unwrap();
//! assert_eq!(vectors, vec![vec![2.0, 1.0]]);
//! ```

use crate::{Error, Result};

/// A batched text embedding model.
///
/// Implementations must be deterministic for a fixed input and model
/// version, and must return exactly one vector per input, in order.
pub trait Embedder: Send + Sync {
    /// Embed every text in one batch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Embedding`] if the model is unavailable or fails.
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

impl<F> Embedder for F
where
    F: Fn(&[String]) -> Result<Vec<Vec<f32>>> + Send + Sync,
{
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self(texts)
    }
}

/// Embed `texts` in one call and check the model returned one vector each.
pub(crate) fn encode_all(embedder: &dyn Embedder, texts: &[String]) -> Result<Vec<Vec<f32>>> {
    let embeddings = embedder.encode(texts)?;
    if embeddings.len() != texts.len() {
        return Err(Error::EmbeddingCount {
            expected: texts.len(),
            actual: embeddings.len(),
        });
    }
    Ok(embeddings)
}

/// Cosine similarity between two embeddings.
///
/// Returns 0.0 when either vector has zero norm.
///
/// ```rust
/// use scriptdeck::cosine_similarity;
///
/// assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
/// assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}
