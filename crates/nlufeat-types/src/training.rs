//! Training corpora.

use crate::attribute::Attribute;
use crate::message::Message;

/// A finite collection of labeled training examples.
///
/// Components only mutate the feature stores of the examples; the set of
/// examples itself is owned by whoever loaded the corpus.
#[derive(Debug, Clone, Default)]
pub struct TrainingData {
    pub training_examples: Vec<Message>,
}

impl TrainingData {
    pub fn new(training_examples: Vec<Message>) -> Self {
        Self { training_examples }
    }

    pub fn len(&self) -> usize {
        self.training_examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.training_examples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.training_examples.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Message> {
        self.training_examples.iter_mut()
    }

    /// Examples that carry an intent label.
    pub fn intent_examples(&self) -> impl Iterator<Item = &Message> {
        self.training_examples
            .iter()
            .filter(|ex| ex.attribute_text(Attribute::Intent).is_some())
    }
}
