//! Shared domain types for nlufeat.
//!
//! This crate contains the types every pipeline stage agrees on: message
//! attributes, the per-message feature store, opaque embedding documents,
//! training corpora, configuration and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod attribute;
pub mod config;
pub mod document;
pub mod error;
pub mod message;
pub mod training;

pub use attribute::{Attribute, DENSE_FEATURIZABLE_ATTRIBUTES};
pub use document::{Document, EmbeddedDoc};
pub use message::{DenseVector, FeatureValue, Message};
pub use training::TrainingData;
