mod classify;

use std::{collections::VecDeque, sync::Mutex, time::Duration};
use topic_classifier::prelude::*;

/// Answers prompts from a fixed script and records every prompt it saw.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String, ClientError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_results(responses.into_iter().map(|r| Ok(r.into())))
    }

    pub fn from_results<I: IntoIterator<Item = Result<String, ClientError>>>(results: I) -> Self {
        Self {
            responses: Mutex::new(results.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmGenerate for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ClientError::GenericError {
                    message: "script exhausted".to_string(),
                })
            })
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A classifier over `model` with no waiting and no transport retries.
pub fn classifier(model: ScriptedModel, config: ClassifyConfig) -> TopicClassifier<ScriptedModel> {
    let client = RetryingClient::new(model)
        .retry_after_fail_n_times(0)
        .retry_delay(Duration::ZERO);
    TopicClassifier::new(client, config).unwrap()
}

pub fn quick_config() -> ClassifyConfig {
    ClassifyConfig::new()
        .retry_delay(Duration::ZERO)
        .request_delay(Duration::ZERO)
}

pub fn to_json(partition: &Partition) -> String {
    serde_json::to_string(partition).unwrap()
}
