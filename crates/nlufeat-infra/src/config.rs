//! Model configuration loader.
//!
//! Reads a `config.toml` and deserializes it into [`NluModelConfig`]. The
//! lenient loader falls back to defaults when the file is missing or
//! malformed; [`read_model_config`] and [`parse_model_config`] are for callers
//! that want the error.

use std::path::Path;

use nlufeat_types::config::NluModelConfig;
use nlufeat_types::error::ConfigError;

/// Parse a model config from TOML text.
pub fn parse_model_config(content: &str) -> Result<NluModelConfig, ConfigError> {
    toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
}

/// Read and parse the model config at `path`, surfacing every failure.
pub async fn read_model_config(path: &Path) -> Result<NluModelConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ConfigError::Read(format!("{}: {err}", path.display())))?;
    parse_model_config(&content)
}

/// Load a model config from `path`.
///
/// - If the file does not exist, returns [`NluModelConfig::default()`].
/// - If the file cannot be read or fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_model_config(path: &Path) -> NluModelConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No model config at {}, using defaults", path.display());
            return NluModelConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return NluModelConfig::default();
        }
    };

    match parse_model_config(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err} ({}), using defaults", path.display());
            NluModelConfig::default()
        }
    }
}
