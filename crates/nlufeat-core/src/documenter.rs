//! Document-producing pipeline stage.
//!
//! `EmbeddingDocumenter` runs a language model over each featurizable
//! attribute of a message and attaches the result as an `EmbeddedDoc`. It is
//! the stage that satisfies the dense featurizer's `requires`.

use std::sync::Arc;

use tracing::{debug, info};

use nlufeat_types::config::NluModelConfig;
use nlufeat_types::error::{ComponentError, EmbeddingError};
use nlufeat_types::{
    Attribute, DENSE_FEATURIZABLE_ATTRIBUTES, DenseVector, EmbeddedDoc, Message, TrainingData,
};

use crate::component::Component;
use crate::embedder::TextEmbedder;

const DEFAULT_NAME: &str = "embedding_documenter";

/// Attaches one embedding document per featurizable attribute.
pub struct EmbeddingDocumenter<E> {
    name: String,
    embedder: E,
}

impl<E: TextEmbedder> EmbeddingDocumenter<E> {
    pub fn new(embedder: E) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            embedder,
        }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Embed `texts` in one batch, insisting on one vector per text.
    fn embed_batch(
        &self,
        attribute: Attribute,
        texts: &[String],
    ) -> Result<Vec<DenseVector>, ComponentError> {
        let to_component_error = |source| ComponentError::Embedding {
            component: self.name.clone(),
            attribute,
            source,
        };

        let vectors = self.embedder.embed(texts).map_err(to_component_error)?;
        if vectors.len() != texts.len() {
            return Err(to_component_error(EmbeddingError::BatchSizeMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            }));
        }
        Ok(vectors)
    }
}

/// Text of `attribute` on `message`, unless it is missing or blank.
fn embeddable_text(message: &Message, attribute: Attribute) -> Option<&str> {
    message
        .attribute_text(attribute)
        .filter(|text| !text.trim().is_empty())
}

impl<E: TextEmbedder> Component for EmbeddingDocumenter<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> Vec<String> {
        DENSE_FEATURIZABLE_ATTRIBUTES
            .iter()
            .map(|attribute| attribute.document_key().to_string())
            .collect()
    }

    fn requires(&self) -> Vec<String> {
        Vec::new()
    }

    #[tracing::instrument(
        name = "embedding_documenter_train",
        skip_all,
        fields(
            component = %self.name,
            model = self.embedder.model_name(),
            examples = training_data.len(),
        )
    )]
    fn train(
        &mut self,
        training_data: &mut TrainingData,
        _config: &NluModelConfig,
    ) -> Result<(), ComponentError> {
        for attribute in DENSE_FEATURIZABLE_ATTRIBUTES {
            let (indices, texts): (Vec<usize>, Vec<String>) = training_data
                .iter()
                .enumerate()
                .filter_map(|(idx, ex)| {
                    embeddable_text(ex, attribute).map(|text| (idx, text.to_string()))
                })
                .unzip();

            if texts.is_empty() {
                debug!(attribute = %attribute, "No examples carry this attribute");
                continue;
            }

            let vectors = self.embed_batch(attribute, &texts)?;
            let documents = texts.len();
            for ((idx, text), vector) in indices.into_iter().zip(texts).zip(vectors) {
                training_data.training_examples[idx].set_document(
                    attribute.document_key(),
                    Arc::new(EmbeddedDoc::new(text, vector)),
                );
            }

            info!(attribute = %attribute, documents, "Attached documents");
        }
        Ok(())
    }

    fn process(&self, message: &mut Message) -> Result<(), ComponentError> {
        let Some(text) = embeddable_text(message, Attribute::Text).map(str::to_string) else {
            return Ok(());
        };

        let vectors = self.embed_batch(Attribute::Text, std::slice::from_ref(&text))?;
        if let Some(vector) = vectors.into_iter().next() {
            message.set_document(
                Attribute::Text.document_key(),
                Arc::new(EmbeddedDoc::new(text, vector)),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use nlufeat_types::Document;

    use crate::featurizer::DenseFeaturizer;

    /// Deterministic embedder: `[char count, word count]`.
    #[derive(Default)]
    struct CountingEmbedder {
        calls: AtomicUsize,
    }

    impl TextEmbedder for CountingEmbedder {
        fn embed(&self, texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts
                .iter()
                .map(|t| vec![t.chars().count() as f32, t.split_whitespace().count() as f32])
                .collect())
        }

        fn model_name(&self) -> &str {
            "counting"
        }

        fn dimension(&self) -> usize {
            2
        }
    }

    /// Drops the last vector of every batch.
    struct LossyEmbedder;

    impl TextEmbedder for LossyEmbedder {
        fn embed(&self, texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError> {
            Ok(texts.iter().skip(1).map(|_| vec![1.0]).collect())
        }

        fn model_name(&self) -> &str {
            "lossy"
        }

        fn dimension(&self) -> usize {
            1
        }
    }

    struct OfflineEmbedder;

    impl TextEmbedder for OfflineEmbedder {
        fn embed(&self, _texts: &[String]) -> Result<Vec<DenseVector>, EmbeddingError> {
            Err(EmbeddingError::Model("model not loaded".to_string()))
        }

        fn model_name(&self) -> &str {
            "offline"
        }

        fn dimension(&self) -> usize {
            8
        }
    }

    fn corpus() -> TrainingData {
        TrainingData::new(vec![
            Message::new("hello there").with_intent("greet"),
            Message::new("bye").with_intent("goodbye").with_response("see you soon"),
            Message::new("   ").with_intent("noise"),
        ])
    }

    #[test]
    fn test_capabilities() {
        let documenter = EmbeddingDocumenter::new(CountingEmbedder::default());
        assert_eq!(documenter.name(), "embedding_documenter");
        assert_eq!(
            documenter.provides(),
            vec!["text_doc".to_string(), "response_doc".to_string()]
        );
        assert!(documenter.requires().is_empty());
    }

    #[test]
    fn test_train_batches_per_attribute() {
        let mut documenter = EmbeddingDocumenter::new(CountingEmbedder::default());
        let mut data = corpus();
        documenter
            .train(&mut data, &NluModelConfig::default())
            .unwrap();

        // One batch for text, one for response.
        assert_eq!(documenter.embedder().calls.load(Ordering::SeqCst), 2);

        let doc = data.training_examples[0].document("text_doc").unwrap();
        assert_eq!(doc.vector().unwrap(), vec![11.0, 2.0]);
        assert!(data.training_examples[0].document("response_doc").is_none());

        let response = data.training_examples[1].document("response_doc").unwrap();
        assert_eq!(response.vector().unwrap(), vec![12.0, 3.0]);

        // Blank text gets no document.
        assert!(data.training_examples[2].document("text_doc").is_none());
    }

    #[test]
    fn test_train_skips_embedder_for_absent_attribute() {
        let mut documenter = EmbeddingDocumenter::new(CountingEmbedder::default());
        let mut data = TrainingData::new(vec![Message::new("only text")]);
        documenter
            .train(&mut data, &NluModelConfig::default())
            .unwrap();
        assert_eq!(documenter.embedder().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_process_attaches_text_document_only() {
        let documenter = EmbeddingDocumenter::new(CountingEmbedder::default());
        let mut msg = Message::new("book a flight").with_response("where to?");
        documenter.process(&mut msg).unwrap();

        let doc = msg.document("text_doc").unwrap();
        assert_eq!(doc.dimensionality(), 2);
        assert!(msg.document("response_doc").is_none());
    }

    #[test]
    fn test_process_blank_text_is_noop() {
        let documenter = EmbeddingDocumenter::new(CountingEmbedder::default());
        let mut msg = Message::new("");
        documenter.process(&mut msg).unwrap();
        assert_eq!(msg.keys().count(), 0);
        assert_eq!(documenter.embedder().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_batch_size_mismatch_is_an_error() {
        let mut documenter = EmbeddingDocumenter::new(LossyEmbedder);
        let mut data = corpus();
        let err = documenter
            .train(&mut data, &NluModelConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ComponentError::Embedding {
                source: EmbeddingError::BatchSizeMismatch {
                    expected: 2,
                    actual: 1
                },
                ..
            }
        ));
        assert!(data.training_examples[0].document("text_doc").is_none());
    }

    #[test]
    fn test_model_failure_propagates() {
        let documenter = EmbeddingDocumenter::new(OfflineEmbedder);
        let mut msg = Message::new("hello");
        let err = documenter.process(&mut msg).unwrap_err();
        assert!(err.to_string().contains("model not loaded"));
        assert!(!msg.contains("text_doc"));
    }

    #[test]
    fn test_documenter_then_featurizer_pipeline() {
        let mut stages: Vec<Box<dyn Component>> = vec![
            Box::new(EmbeddingDocumenter::new(CountingEmbedder::default())),
            Box::new(DenseFeaturizer::new()),
        ];
        let config = NluModelConfig::default();
        let mut data = corpus();
        for stage in stages.iter_mut() {
            stage.train(&mut data, &config).unwrap();
        }

        assert_eq!(
            data.training_examples[0].dense_features("text_dense_features"),
            Some(&[11.0, 2.0][..])
        );
        assert_eq!(
            data.training_examples[1].dense_features("response_dense_features"),
            Some(&[12.0, 3.0][..])
        );

        let mut msg = Message::new("hi");
        for stage in &stages {
            stage.process(&mut msg).unwrap();
        }
        assert_eq!(
            msg.dense_features("text_dense_features"),
            Some(&[2.0, 1.0][..])
        );
    }
}
