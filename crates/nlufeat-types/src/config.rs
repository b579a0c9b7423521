//! Model configuration types.
//!
//! `NluModelConfig` is the top-level `config.toml` handed to every component's
//! `train` call. It selects the embedding model and controls logging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for a featurization pipeline.
///
/// All fields have defaults, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NluModelConfig {
    /// Language of the training data (e.g., "en").
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub embedding: EmbeddingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for NluModelConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            embedding: EmbeddingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Which embedding model produces documents, and how it is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Model identifier (e.g., "BAAI/bge-small-en-v1.5").
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Where downloaded model files are cached. Backend default when unset.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Texts per inference batch. Backend default when unset.
    #[serde(default)]
    pub batch_size: Option<usize>,

    #[serde(default)]
    pub show_download_progress: bool,
}

fn default_embedding_model() -> String {
    "BAAI/bge-small-en-v1.5".to_string()
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: default_embedding_model(),
            cache_dir: None,
            batch_size: None,
            show_download_progress: false,
        }
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging settings. `RUST_LOG` overrides `filter` when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Export spans through OpenTelemetry to stdout (local development).
    #[serde(default)]
    pub otel_stdout: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
            otel_stdout: false,
        }
    }
}
