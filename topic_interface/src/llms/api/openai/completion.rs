use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Debug)]
pub struct OpenAiCompletionRequest {
    /// ID of the model to use.
    pub model: String,
    pub messages: Vec<CompletionRequestMessage>,
}

impl OpenAiCompletionRequest {
    pub fn from_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![CompletionRequestMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CompletionRequestMessage {
    pub role: String,
    pub content: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct OpenAiCompletionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<OpenAiChoice>,
    pub usage: Option<serde_json::Value>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct OpenAiChoice {
    pub index: u32,
    pub message: OpenAiResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct OpenAiResponseMessage {
    pub role: String,
    /// Null when the model refused or only called tools.
    pub content: Option<String>,
}

impl OpenAiCompletionResponse {
    /// Content of the first choice. `None` when there are no choices.
    pub fn text(&self) -> Option<String> {
        self.choices
            .first()
            .map(|c| c.message.content.clone().unwrap_or_default())
    }
}
