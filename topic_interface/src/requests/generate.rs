use crate::llms::api::ClientError;

/// A text-generation model: one prompt in, raw model text out.
///
/// Implementors report every failure as a [`ClientError`]; callers do not
/// distinguish transport failures from API-reported ones when retrying.
#[async_trait::async_trait]
pub trait LlmGenerate: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ClientError>;
}
