//! Embedder trait for text-to-vector conversion.
//!
//! Defines the interface the document-producing stage uses to run a language
//! model. Implementations (e.g., fastembed) live in nlufeat-infra.

use std::sync::Arc;

use nlufeat_types::DenseVector;
use nlufeat_types::error::EmbeddingError;

/// Trait for converting text into fixed-length embedding vectors.
///
/// Synchronous: inference happens inside the pipeline's `train`/`process`
/// call chain, which has no suspension points.
pub trait TextEmbedder: Send + Sync {
    /// Embed one or more texts. Returns one vector per input text, in order.
    fn embed(&self, texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError>;

    /// The model name used for embeddings (e.g., "BAAI/bge-small-en-v1.5").
    fn model_name(&self) -> &str;

    /// The dimensionality of the output vectors.
    fn dimension(&self) -> usize;
}

impl<T: TextEmbedder + ?Sized> TextEmbedder for Box<T> {
    fn embed(&self, texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError> {
        (**self).embed(texts)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }
}

impl<T: TextEmbedder + ?Sized> TextEmbedder for Arc<T> {
    fn embed(&self, texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError> {
        (**self).embed(texts)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }
}

/// Number of features used to represent a document / sentence.
pub fn ndim(embedder: &dyn TextEmbedder) -> usize {
    embedder.dimension()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant;

    impl TextEmbedder for Constant {
        fn embed(&self, texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError> {
            Ok(texts.iter().map(|_| vec![0.5; 4]).collect())
        }

        fn model_name(&self) -> &str {
            "constant"
        }

        fn dimension(&self) -> usize {
            4
        }
    }

    #[test]
    fn test_boxed_embedder_delegates() {
        let boxed: Box<dyn TextEmbedder> = Box::new(Constant);
        assert_eq!(boxed.model_name(), "constant");
        assert_eq!(ndim(&boxed), 4);
        let vectors = boxed.embed(&["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(vectors.len(), 2);
    }

    #[test]
    fn test_shared_embedder_delegates() {
        let shared: Arc<dyn TextEmbedder> = Arc::new(Constant);
        let cloned = Arc::clone(&shared);
        assert_eq!(cloned.dimension(), 4);
        assert_eq!(cloned.embed(&[]).unwrap().len(), 0);
    }
}
