//! Opaque embedding documents.
//!
//! A document is whatever the embedding model attaches to a message for one
//! attribute. Featurizers never build or own one; they only ask it for its
//! vector and its dimensionality.

use std::fmt;

use crate::error::EmbeddingError;
use crate::message::DenseVector;

/// Per-attribute object produced by an embedding model.
///
/// Held on messages as `Arc<dyn Document>` so any embedding backend can
/// attach its own representation.
pub trait Document: Send + Sync + fmt::Debug {
    /// Fixed-length vector representing the whole document.
    fn vector(&self) -> Result<DenseVector, EmbeddingError>;

    /// Length of the vectors this document's model produces.
    fn dimensionality(&self) -> usize;
}

/// Document holding a pooled sentence embedding for a span of text.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedDoc {
    text: String,
    vector: DenseVector,
}

impl EmbeddedDoc {
    pub fn new(text: impl Into<String>, vector: DenseVector) -> Self {
        Self {
            text: text.into(),
            vector,
        }
    }

    /// The text this document was embedded from.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Document for EmbeddedDoc {
    fn vector(&self) -> Result<DenseVector, EmbeddingError> {
        if self.vector.is_empty() {
            return Err(EmbeddingError::MalformedDocument(format!(
                "document for '{}' has an empty vector",
                self.text
            )));
        }
        Ok(self.vector.clone())
    }

    fn dimensionality(&self) -> usize {
        self.vector.len()
    }
}
