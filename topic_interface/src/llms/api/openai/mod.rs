pub mod builder;
pub mod completion;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait},
    error::ClientError,
};
use crate::logging::LoggingConfig;
use completion::{OpenAiCompletionRequest, OpenAiCompletionResponse};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

/// Default v1 API base url
pub const OPENAI_API_HOST: &str = "api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiBackend {
    pub(crate) client: ApiClient<OpenAiConfig>,
    pub model_id: String,
}

impl OpenAiBackend {
    pub fn new(mut config: OpenAiConfig, model_id: String) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        config.api_config.api_key = Some(config.api_config.load_api_key()?);
        Ok(Self {
            client: ApiClient::new(config),
            model_id,
        })
    }

    pub(crate) async fn completion_request(&self, prompt: &str) -> Result<String, ClientError> {
        let res: OpenAiCompletionResponse = self
            .client
            .post(
                "/chat/completions",
                OpenAiCompletionRequest::from_prompt(&self.model_id, prompt),
            )
            .await?;
        res.text().ok_or_else(|| ClientError::GenericError {
            message: "OpenAiBackend response had no choices".to_string(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: OPENAI_API_HOST.to_string(),
                port: None,
                api_key: None,
                api_key_env_var: "OPENAI_API_KEY".to_string(),
            },
            logging_config: LoggingConfig {
                logger_name: "openai".to_string(),
                logging_enabled: false,
                ..Default::default()
            },
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ApiConfigTrait for OpenAiConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = self.api_key() {
            if let Ok(header_value) =
                HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            {
                headers.insert(AUTHORIZATION, header_value);
            } else {
                crate::error!("Failed to create header value from authorization value");
            }
        }

        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_config.base_url(), path)
    }

    fn api_key(&self) -> &Option<Secret<String>> {
        &self.api_config.api_key
    }
}
