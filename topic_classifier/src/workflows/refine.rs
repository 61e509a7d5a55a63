use super::{ClassifyError, TopicClassifier};
use crate::components::partition::Partition;
use topic_interface::LlmGenerate;

#[derive(Debug)]
pub struct RefinementState {
    pub iteration: usize,
    pub cumulative: Partition,
    pub current: Vec<String>,
}

impl RefinementState {
    pub fn new(texts: &[String]) -> Self {
        Self {
            iteration: 1,
            cumulative: Partition::new(),
            current: texts.to_vec(),
        }
    }

    /// The accumulated labels plus the other label holding `residual`.
    fn finish(mut self, other_label: &str, residual: Vec<String>) -> Partition {
        self.cumulative.extend_label(other_label, residual);
        self.cumulative
    }
}

impl<G: LlmGenerate> TopicClassifier<G> {
    /// Re-classifies whatever lands in the other label until a pass makes no
    /// progress, nothing is left, or `max_iterations` passes have run.
    pub async fn refine(&self, texts: &[String]) -> Result<Partition, ClassifyError> {
        let other_label = self.config.other_label.as_str();
        let mut state = RefinementState::new(texts);

        loop {
            crate::info!("Iteration {} ({})", state.iteration, state.current.len());
            let mut pass_result = self.classify_pass(&state.current).await?;
            let residual = pass_result.remove(other_label).unwrap_or_default();

            if residual.len() == state.current.len() {
                crate::info!("No progress in iteration {}", state.iteration);
                return Ok(state.finish(other_label, residual));
            }
            state.cumulative.merge(pass_result);

            if residual.is_empty() {
                return Ok(state.finish(other_label, residual));
            }
            if self
                .config
                .max_iterations
                .is_some_and(|max| state.iteration >= max)
            {
                crate::info!("Reached max_iterations with {} unclassified", residual.len());
                return Ok(state.finish(other_label, residual));
            }
            state.current = residual;
            state.iteration += 1;
        }
    }
}
