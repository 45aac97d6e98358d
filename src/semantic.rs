//! fastembed-backed [`Embedder`].
//!
//! Scripts are mostly Korean, so the default model is a multilingual one
//! (`multilingual-e5-small`, 384 dimensions) rather than fastembed's
//! English-only default.
//!
//! Loading a model takes seconds and may download weights on first use.
//! Load it once and pass `&FastEmbedder` to every call:
//!
//! ```rust,ignore
//! use scriptdeck::{segment_into_slides, FastEmbedder};
//!
//! let embedder = FastEmbedder::new()?;
//! for script in scripts {
//!     let slides = segment_into_slides(&script, 4, 18, &embedder, 0.85)?;
//! }
//! ```

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::{Embedder, Error, Result};

/// Sentence embeddings from a local ONNX model.
pub struct FastEmbedder {
    model: TextEmbedding,
    name: String,
}

impl FastEmbedder {
    /// Load the default multilingual model.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedding model fails to load.
    pub fn new() -> Result<Self> {
        Self::with_model(EmbeddingModel::MultilingualE5Small)
    }

    /// Load a specific fastembed model.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedding model fails to load.
    pub fn with_model(model: EmbeddingModel) -> Result<Self> {
        let name = format!("{model:?}");
        log::info!("loading embedding model {name}");

        let options = InitOptions::new(model).with_show_download_progress(false);
        let model = TextEmbedding::try_new(options).map_err(|e| Error::Embedding(e.to_string()))?;

        Ok(Self { model, name })
    }
}

impl Embedder for FastEmbedder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }
        self.model
            .embed(texts.to_vec(), None)
            .map_err(|e| Error::Embedding(e.to_string()))
    }
}

impl std::fmt::Debug for FastEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedder")
            .field("model", &self.name)
            .finish_non_exhaustive()
    }
}
