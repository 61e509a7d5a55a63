// Public modules
pub mod api;

// Internal imports
use crate::requests::LlmGenerate;
use api::ClientError;

pub enum LlmBackend {
    Gemini(api::gemini::GeminiBackend),
    OpenAi(api::openai::OpenAiBackend),
}

impl LlmBackend {
    pub fn model_id(&self) -> &str {
        match self {
            LlmBackend::Gemini(b) => &b.model_id,
            LlmBackend::OpenAi(b) => &b.model_id,
        }
    }
}

#[async_trait::async_trait]
impl LlmGenerate for LlmBackend {
    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        match self {
            LlmBackend::Gemini(b) => b.completion_request(prompt).await,
            LlmBackend::OpenAi(b) => b.completion_request(prompt).await,
        }
    }
}
