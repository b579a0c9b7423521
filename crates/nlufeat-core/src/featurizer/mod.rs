//! Dense-feature composition.
//!
//! Every dense featurizer appends its contribution to the vector already
//! stored at an attribute's dense-feature slot. The final vector is the
//! concatenation of all contributing featurizers' outputs in pipeline
//! execution order, which is the column layout downstream classifiers read
//! positionally.

pub mod dense;

pub use dense::DenseFeaturizer;

use nlufeat_types::error::EmbeddingError;
use nlufeat_types::{DenseVector, Document, Message};

/// Feature vector for a single document / sentence.
pub fn features_for_doc(doc: &dyn Document) -> Result<DenseVector, EmbeddingError> {
    doc.vector()
}

/// Combine `additional` with the dense features already stored under `key`.
///
/// Existing features come first and are never modified; `additional` is
/// appended. With nothing stored under `key`, `additional` is returned as is.
pub fn combine_with_existing_dense_features(
    message: &Message,
    additional: DenseVector,
    key: &str,
) -> DenseVector {
    match message.dense_features(key) {
        Some(existing) => {
            let mut combined = Vec::with_capacity(existing.len() + additional.len());
            combined.extend_from_slice(existing);
            combined.extend(additional);
            combined
        }
        None => additional,
    }
}
