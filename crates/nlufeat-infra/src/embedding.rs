//! FastEmbed-based local embedding generator.
//!
//! Implements the `TextEmbedder` trait from `nlufeat-core` with fastembed's
//! ONNX runtime inference. The model is selected by name from
//! [`EmbeddingConfig`]; see [`resolve_model`] for the supported names.

use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use nlufeat_core::TextEmbedder;
use nlufeat_types::DenseVector;
use nlufeat_types::config::EmbeddingConfig;
use nlufeat_types::error::EmbeddingError;

/// A supported embedding model and the length of the vectors it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub name: &'static str,
    pub model: EmbeddingModel,
    pub dimension: usize,
}

/// Map a model name to its fastembed model and output dimension.
pub fn resolve_model(name: &str) -> Result<ModelSpec, EmbeddingError> {
    let (name, model, dimension) = match name {
        "BAAI/bge-small-en-v1.5" => ("BAAI/bge-small-en-v1.5", EmbeddingModel::BGESmallENV15, 384),
        "BAAI/bge-base-en-v1.5" => ("BAAI/bge-base-en-v1.5", EmbeddingModel::BGEBaseENV15, 768),
        "sentence-transformers/all-MiniLM-L6-v2" => (
            "sentence-transformers/all-MiniLM-L6-v2",
            EmbeddingModel::AllMiniLML6V2,
            384,
        ),
        "nomic-ai/nomic-embed-text-v1.5" => (
            "nomic-ai/nomic-embed-text-v1.5",
            EmbeddingModel::NomicEmbedTextV15,
            768,
        ),
        other => return Err(EmbeddingError::UnknownModel(other.to_string())),
    };
    Ok(ModelSpec {
        name,
        model,
        dimension,
    })
}

/// Local sentence embedder backed by a fastembed `TextEmbedding`.
///
/// The ONNX session needs exclusive access while running, so it sits behind
/// a mutex; concurrent callers are serialized.
pub struct FastEmbedder {
    model: Mutex<TextEmbedding>,
    spec: ModelSpec,
    batch_size: Option<usize>,
}

impl FastEmbedder {
    /// Load (downloading on first use) the model named in `config`.
    #[tracing::instrument(name = "load_embedding_model", skip_all, fields(model = %config.model))]
    pub fn new(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let spec = resolve_model(&config.model)?;

        let mut options = InitOptions::new(spec.model.clone())
            .with_show_download_progress(config.show_download_progress);
        if let Some(cache_dir) = &config.cache_dir {
            options = options.with_cache_dir(cache_dir.clone());
        }

        let model =
            TextEmbedding::try_new(options).map_err(|e| EmbeddingError::Model(e.to_string()))?;
        tracing::info!(dimension = spec.dimension, "Embedding model loaded");

        Ok(Self {
            model: Mutex::new(model),
            spec,
            batch_size: config.batch_size,
        })
    }
}

impl TextEmbedder for FastEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut model = self
            .model
            .lock()
            .map_err(|_| EmbeddingError::Model("embedding model lock poisoned".to_string()))?;
        let vectors = model
            .embed(texts.to_vec(), self.batch_size)
            .map_err(|e| EmbeddingError::Model(e.to_string()))?;

        tracing::debug!(texts = texts.len(), "Embedded batch");
        Ok(vectors)
    }

    fn model_name(&self) -> &str {
        self.spec.name
    }

    fn dimension(&self) -> usize {
        self.spec.dimension
    }
}
