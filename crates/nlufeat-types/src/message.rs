//! Messages and their feature stores.
//!
//! A `Message` is one unit of text moving through the pipeline: an utterance
//! at inference time, or a labeled example during training. Every stage reads
//! from and writes to the message's own feature store; there is no state
//! shared between messages.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::attribute::Attribute;
use crate::document::Document;

/// A 1-dimensional dense feature vector.
pub type DenseVector = Vec<f32>;

/// A value stored in a message's feature store.
#[derive(Debug, Clone)]
pub enum FeatureValue {
    /// Dense numeric features, composed across pipeline stages.
    Dense(DenseVector),
    /// Opaque document attached by an embedding stage.
    Document(Arc<dyn Document>),
}

/// One unit of text plus everything the pipeline has attached to it.
#[derive(Debug, Clone, Default)]
pub struct Message {
    text: String,
    /// Label attributes (`intent`, `response`) keyed by attribute.
    labels: BTreeMap<Attribute, String>,
    features: HashMap<String, FeatureValue>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.labels.insert(Attribute::Intent, intent.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.labels.insert(Attribute::Response, response.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text carried by `attribute`, if the message has any.
    pub fn attribute_text(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Text => Some(self.text.as_str()),
            other => self.labels.get(&other).map(String::as_str),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.features.get(key)
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub fn set(&mut self, key: impl Into<String>, value: FeatureValue) {
        self.features.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<FeatureValue> {
        self.features.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Document stored under `key`. `None` if absent or if the slot holds
    /// dense features instead.
    pub fn document(&self, key: &str) -> Option<&Arc<dyn Document>> {
        match self.features.get(key) {
            Some(FeatureValue::Document(doc)) => Some(doc),
            _ => None,
        }
    }

    /// Dense features stored under `key`. `None` if absent or if the slot
    /// holds a document instead.
    pub fn dense_features(&self, key: &str) -> Option<&[f32]> {
        match self.features.get(key) {
            Some(FeatureValue::Dense(features)) => Some(features.as_slice()),
            _ => None,
        }
    }

    pub fn set_document(&mut self, key: impl Into<String>, doc: Arc<dyn Document>) {
        self.set(key, FeatureValue::Document(doc));
    }

    pub fn set_dense_features(&mut self, key: impl Into<String>, features: DenseVector) {
        self.set(key, FeatureValue::Dense(features));
    }
}
