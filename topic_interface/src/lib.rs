//! # topic_interface: the model-facing half of topic classification
//!
//! Wraps text-generation APIs behind a single [`LlmGenerate`] operation and
//! adds the bounded, fixed-delay [`RetryingClient`] used by the classifier.
//!
//! * Gemini and OpenAI-compatible HTTP backends
//! * API keys loaded from parameters or `.env`
//! * Aggregated retry errors
//! * Logging tools

#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod llms;
pub mod logging;
pub mod requests;

// Public exports
pub use llms::{
    api::{
        gemini::{builder::GeminiBackendBuilder, GeminiBackend, GeminiConfig},
        openai::{builder::OpenAiBackendBuilder, OpenAiBackend, OpenAiConfig},
        ApiConfig, ApiError, ClientError, LlmApiConfigTrait,
    },
    LlmBackend,
};
pub use logging::{i_nln, LoggingConfig, LoggingConfigTrait};
pub use requests::{CompletionError, LlmGenerate, RetryingClient};

pub struct LlmInterface {}

impl LlmInterface {
    pub fn gemini() -> GeminiBackendBuilder {
        GeminiBackendBuilder::default()
    }

    pub fn openai() -> OpenAiBackendBuilder {
        OpenAiBackendBuilder::default()
    }
}
