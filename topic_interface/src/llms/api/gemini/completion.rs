use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Serialize, Debug)]
pub struct GeminiCompletionRequest {
    /// The conversation so far. A single user turn for plain generation.
    pub contents: Vec<GeminiContent>,
}

impl GeminiCompletionRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![HashMap::from([("text".to_string(), prompt.to_string())])],
                role: None,
            }],
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Default, Debug)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl GeminiContent {
    /// First text part, or empty when the content carries none.
    pub fn text(&self) -> &str {
        self.parts
            .iter()
            .find_map(|part| part.get("text"))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: GeminiContent,
    pub finish_reason: Option<String>,
    pub avg_logprobs: Option<f64>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCompletionResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    pub usage_metadata: Option<serde_json::Value>,
    pub model_version: Option<String>,
    pub response_id: Option<String>,
}

impl GeminiCompletionResponse {
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| c.content.text().to_string())
            .unwrap_or_default()
    }
}
