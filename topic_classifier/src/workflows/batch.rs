use super::{ClassifyError, TopicClassifier};
use crate::components::{
    partition::Partition,
    prompt::build_prompt,
    response::{parse_batch_response, ResponseError},
};
use topic_interface::LlmGenerate;

/// Mutable state of a single pass over one input list.
#[derive(Debug, Default)]
pub struct PassState {
    pub cursor: usize,
    pub partition: Partition,
    pub catalog: Vec<String>,
    /// Content failures so far; shared by every batch of the pass.
    pub retry_count: u32,
    pub errors: Vec<ResponseError>,
}

impl<G: LlmGenerate> TopicClassifier<G> {
    /// Classifies `texts` batch by batch and merges the batch results.
    ///
    /// Unusable model output is retried without advancing; once the pass has
    /// spent its content retry budget it fails with every recorded error.
    /// Transport failures come back from the [`topic_interface::RetryingClient`]
    /// already retried and are returned as is.
    pub async fn classify_pass(&self, texts: &[String]) -> Result<Partition, ClassifyError> {
        let batch_size = self.config.batch_size;
        let total_batches = texts.len().div_ceil(batch_size);
        let mut state = PassState::default();

        while state.cursor < texts.len() {
            let end = (state.cursor + batch_size).min(texts.len());
            let batch = &texts[state.cursor..end];
            crate::info!(
                "[{}/{}] process {}-{}",
                state.cursor / batch_size + 1,
                total_batches,
                state.cursor,
                state.cursor + batch_size
            );

            if !state.catalog.is_empty() && !state.catalog.contains(&self.config.other_label) {
                state.catalog.push(self.config.other_label.clone());
            }
            let prompt = build_prompt(batch, &state.catalog);
            crate::trace!("Prompt:\n{prompt}");

            let raw = self.client.generate(&prompt).await?;
            let batch_result = match parse_batch_response(&raw, batch.len()) {
                Ok(batch_result) => batch_result,
                Err(e) => {
                    crate::debug!("Raw model output:\n{raw}");
                    if state.retry_count >= self.config.retry_after_fail_n_times {
                        state.errors.push(e);
                        return Err(ClassifyError::ExceededRetryCount {
                            message: format!(
                                "Model output rejected {} times in one pass.",
                                state.errors.len()
                            ),
                            errors: state.errors,
                        });
                    }
                    state.retry_count += 1;
                    crate::warn!("Retry-{} ({e})", state.retry_count);
                    state.errors.push(e);
                    tokio::time::sleep(self.config.retry_delay).await;
                    continue;
                }
            };

            state.cursor = end;
            if self.config.catalog_propagation {
                state.catalog = batch_result.labels().cloned().collect();
            }
            state.partition.merge(batch_result);

            if state.cursor < texts.len() {
                tokio::time::sleep(self.config.request_delay).await;
            }
        }
        Ok(state.partition)
    }
}
