use super::{error::CompletionError, generate::LlmGenerate};
use crate::logging::i_nln;
use std::time::Duration;

pub const DEFAULT_RETRY_AFTER_FAIL_N_TIMES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Bounded, fixed-delay retry around an [`LlmGenerate`] model.
///
/// Any error counts as transient. With a budget of `n` the model is called
/// at most `n + 1` times; when every call fails the caller gets
/// [`CompletionError::ExceededRetryCount`] carrying each error in order. A
/// budget of zero makes a single call and returns its error as is.
pub struct RetryingClient<G> {
    pub generator: G,
    pub retry_after_fail_n_times: u32,
    pub retry_delay: Duration,
}

impl<G: LlmGenerate> RetryingClient<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            retry_after_fail_n_times: DEFAULT_RETRY_AFTER_FAIL_N_TIMES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn retry_after_fail_n_times(mut self, retry_after_fail_n_times: u32) -> Self {
        self.retry_after_fail_n_times = retry_after_fail_n_times;
        self
    }

    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, CompletionError> {
        let mut errors = Vec::new();
        for attempt in 0..=self.retry_after_fail_n_times {
            if attempt > 0 {
                crate::warn!("Retry-{attempt}");
            }
            match self.generator.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) if self.retry_after_fail_n_times == 0 => return Err(e.into()),
                Err(e) => {
                    crate::warn!("Model request failed: {e}");
                    errors.push(e);
                }
            }
            if attempt < self.retry_after_fail_n_times {
                tokio::time::sleep(self.retry_delay).await;
            }
        }
        Err(CompletionError::ExceededRetryCount {
            message: format!("Request failed after {} attempts.", errors.len()),
            errors,
        })
    }
}

impl<G> std::fmt::Display for RetryingClient<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RetryingClient:")?;
        i_nln(
            f,
            format_args!("retry_after_fail_n_times: {}", self.retry_after_fail_n_times),
        )?;
        i_nln(f, format_args!("retry_delay: {:?}", self.retry_delay))
    }
}
