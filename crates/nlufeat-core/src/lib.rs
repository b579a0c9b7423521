//! Pipeline-stage contract and dense-feature composition for nlufeat.
//!
//! This crate defines the "ports" the infrastructure layer implements
//! (`TextEmbedder`) and the components that run inside an NLU pipeline
//! (`DenseFeaturizer`, `EmbeddingDocumenter`). It depends only on
//! `nlufeat-types` -- never on `nlufeat-infra` or any model runtime.

pub mod component;
pub mod documenter;
pub mod embedder;
pub mod featurizer;

pub use component::Component;
pub use documenter::EmbeddingDocumenter;
pub use embedder::TextEmbedder;
pub use featurizer::DenseFeaturizer;
