//! Dense featurizer backed by embedding documents.
//!
//! Reads the document an embedding stage attached for an attribute, extracts
//! its vector and appends it to the attribute's dense-feature slot. Runs over
//! every featurizable attribute during training, and only over the message
//! text at inference time.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use nlufeat_types::config::NluModelConfig;
use nlufeat_types::error::ComponentError;
use nlufeat_types::{Attribute, DENSE_FEATURIZABLE_ATTRIBUTES, Message, TrainingData};

use super::{combine_with_existing_dense_features, features_for_doc};
use crate::component::Component;

const DEFAULT_NAME: &str = "dense_featurizer";

/// Attaches document vectors as dense features.
///
/// Stateless: training only mutates the examples, never the featurizer.
#[derive(Debug, Clone)]
pub struct DenseFeaturizer {
    name: String,
}

impl DenseFeaturizer {
    pub fn new() -> Self {
        Self::with_name(DEFAULT_NAME)
    }

    /// Use a custom component name, e.g. when a pipeline runs more than one
    /// dense featurizer.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Extract the document vector for `attribute` and merge it into the
    /// attribute's dense-feature slot.
    ///
    /// No document means nothing to featurize: the message is left untouched
    /// and no error is raised. A document that cannot produce a vector is an
    /// error and is propagated.
    pub fn set_dense_features(
        &self,
        message: &mut Message,
        attribute: Attribute,
    ) -> Result<(), ComponentError> {
        let Some(doc) = message.document(attribute.document_key()).map(Arc::clone) else {
            trace!(attribute = %attribute, "No document on message; skipping");
            return Ok(());
        };

        let features = features_for_doc(doc.as_ref()).map_err(|source| ComponentError::Embedding {
            component: self.name.clone(),
            attribute,
            source,
        })?;

        if features.len() != doc.dimensionality() {
            warn!(
                attribute = %attribute,
                extracted = features.len(),
                reported = doc.dimensionality(),
                "Document vector length disagrees with its reported dimensionality"
            );
        }

        let key = attribute.dense_features_key();
        let prior_len = message.dense_features(key).map_or(0, <[f32]>::len);
        let combined = combine_with_existing_dense_features(message, features, key);
        debug!(
            attribute = %attribute,
            prior_len,
            combined_len = combined.len(),
            "Set dense features"
        );
        message.set_dense_features(key, combined);

        Ok(())
    }
}

impl Default for DenseFeaturizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DenseFeaturizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> Vec<String> {
        DENSE_FEATURIZABLE_ATTRIBUTES
            .iter()
            .map(|attribute| attribute.dense_features_key().to_string())
            .collect()
    }

    fn requires(&self) -> Vec<String> {
        DENSE_FEATURIZABLE_ATTRIBUTES
            .iter()
            .map(|attribute| attribute.document_key().to_string())
            .collect()
    }

    #[tracing::instrument(
        name = "dense_featurizer_train",
        skip_all,
        fields(component = %self.name, examples = training_data.len())
    )]
    fn train(
        &mut self,
        training_data: &mut TrainingData,
        _config: &NluModelConfig,
    ) -> Result<(), ComponentError> {
        for example in training_data.iter_mut() {
            for attribute in DENSE_FEATURIZABLE_ATTRIBUTES {
                self.set_dense_features(example, attribute)?;
            }
        }
        Ok(())
    }

    fn process(&self, message: &mut Message) -> Result<(), ComponentError> {
        self.set_dense_features(message, Attribute::Text)
    }
}
