//! The pipeline-stage contract shared by every component.
//!
//! A component is trained once on the full corpus and then processes one
//! message per inference request. `provides` and `requires` declare which
//! feature-store keys it writes and which it expects earlier stages to have
//! written; the orchestrator uses them to validate pipeline order.

use nlufeat_types::config::NluModelConfig;
use nlufeat_types::error::ComponentError;
use nlufeat_types::{Message, TrainingData};

/// A single stage of an NLU pipeline.
///
/// Object safe, so pipelines can hold `Vec<Box<dyn Component>>` and dispatch
/// in execution order.
pub trait Component: Send + Sync {
    /// Unique name of this component within a pipeline.
    fn name(&self) -> &str;

    /// Feature-store keys this component writes.
    fn provides(&self) -> Vec<String>;

    /// Feature-store keys this component expects to already exist.
    fn requires(&self) -> Vec<String>;

    /// Train on the corpus, mutating every example's feature store in place.
    fn train(
        &mut self,
        training_data: &mut TrainingData,
        config: &NluModelConfig,
    ) -> Result<(), ComponentError>;

    /// Process a single incoming message in place.
    fn process(&self, message: &mut Message) -> Result<(), ComponentError>;
}

/// Keys `component` requires that are not present on `message`.
///
/// Diagnostic helper for orchestrators; components themselves never enforce
/// their requirements.
pub fn missing_requirements(component: &dyn Component, message: &Message) -> Vec<String> {
    component
        .requires()
        .into_iter()
        .filter(|key| !message.contains(key))
        .collect()
}
