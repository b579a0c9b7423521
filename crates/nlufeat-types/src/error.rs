use thiserror::Error;

use crate::attribute::Attribute;

/// Errors raised by an embedding model or while reading one of its documents.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model error: {0}")]
    Model(String),

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("embedding batch size mismatch: expected {expected} vectors, got {actual}")]
    BatchSizeMismatch { expected: usize, actual: usize },

    #[error("unknown embedding model: '{0}'")]
    UnknownModel(String),
}

/// Errors surfaced by a pipeline component's `train` or `process` call.
///
/// A missing document is never an error; only failures of the embedding
/// model (or a corrupted document) end up here.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("component '{component}' failed on attribute '{attribute}': {source}")]
    Embedding {
        component: String,
        attribute: Attribute,
        #[source]
        source: EmbeddingError,
    },
}

/// Errors from reading or parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
