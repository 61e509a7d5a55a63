pub mod batch;
pub mod consolidate;
pub mod refine;

use crate::components::{partition::Partition, response::ResponseError};
use std::time::Duration;
use topic_interface::{i_nln, CompletionError, LlmGenerate, RetryingClient};

pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_OTHER_LABEL: &str = "other";

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("CompletionError: {0}")]
    Completion(#[from] CompletionError),
    #[error("ExceededRetryCount: {message} [{}]", join_errors(.errors))]
    ExceededRetryCount {
        message: String,
        errors: Vec<ResponseError>,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn join_errors(errors: &[ResponseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Knobs for one classification request.
///
/// `retry_after_fail_n_times` and `retry_delay` govern content retries
/// (unparseable or incomplete model output); transport retries are set on the
/// [`RetryingClient`].
#[derive(Clone, Debug)]
pub struct ClassifyConfig {
    pub batch_size: usize,
    pub other_label: String,
    /// Cap on refinement passes. Unbounded when `None`.
    pub max_iterations: Option<usize>,
    pub retry_after_fail_n_times: u32,
    pub retry_delay: Duration,
    /// Pause after every successful batch.
    pub request_delay: Duration,
    /// Feed each batch's labels into the next batch's prompt.
    pub catalog_propagation: bool,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            other_label: DEFAULT_OTHER_LABEL.to_string(),
            max_iterations: None,
            retry_after_fail_n_times: 3,
            retry_delay: Duration::from_secs(1),
            request_delay: Duration::from_secs(1),
            catalog_propagation: true,
        }
    }
}

impl ClassifyConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn other_label<S: Into<String>>(mut self, other_label: S) -> Self {
        self.other_label = other_label.into();
        self
    }

    pub fn max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn retry_after_fail_n_times(mut self, retry_after_fail_n_times: u32) -> Self {
        self.retry_after_fail_n_times = retry_after_fail_n_times;
        self
    }

    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }

    pub fn catalog_propagation(mut self, catalog_propagation: bool) -> Self {
        self.catalog_propagation = catalog_propagation;
        self
    }

    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.batch_size == 0 {
            return Err(ClassifyError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.other_label.trim().is_empty() {
            return Err(ClassifyError::InvalidConfig(
                "other_label must not be empty".to_string(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(ClassifyError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for ClassifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ClassifyConfig:")?;
        i_nln(f, format_args!("batch_size: {}", self.batch_size))?;
        i_nln(f, format_args!("other_label: {}", self.other_label))?;
        i_nln(f, format_args!("max_iterations: {:?}", self.max_iterations))?;
        i_nln(
            f,
            format_args!("retry_after_fail_n_times: {}", self.retry_after_fail_n_times),
        )?;
        i_nln(f, format_args!("retry_delay: {:?}", self.retry_delay))?;
        i_nln(f, format_args!("request_delay: {:?}", self.request_delay))?;
        i_nln(
            f,
            format_args!("catalog_propagation: {}", self.catalog_propagation),
        )
    }
}

/// Iterative LLM topic classification over a list of short texts.
///
/// ```ignore
/// let classifier = TopicClassifier::new(RetryingClient::new(backend), ClassifyConfig::new())?;
/// let partition = classifier.run(&texts).await?;
/// ```
pub struct TopicClassifier<G> {
    pub client: RetryingClient<G>,
    pub config: ClassifyConfig,
}

impl<G: LlmGenerate> TopicClassifier<G> {
    pub fn new(client: RetryingClient<G>, config: ClassifyConfig) -> Result<Self, ClassifyError> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// Refines `texts` until no progress is made, then folds labels holding a
    /// single text into the other label.
    ///
    /// Every input text appears exactly once in the result, and the other
    /// label is always present.
    pub async fn run(&self, texts: &[String]) -> Result<Partition, ClassifyError> {
        let refined = self.refine(texts).await?;
        let partition = consolidate::consolidate(refined, &self.config.other_label);
        crate::info!(
            "Classified {} texts into {} labels",
            partition.total_items(),
            partition.len()
        );
        Ok(partition)
    }
}
