//! Infrastructure layer for nlufeat.
//!
//! Contains implementations of the ports defined in `nlufeat-core`: the
//! fastembed-backed `TextEmbedder` and the TOML model-config loader.

pub mod config;
pub mod embedding;

pub use embedding::FastEmbedder;
