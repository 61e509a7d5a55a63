pub mod builder;
pub mod completion;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait},
    error::ClientError,
};
use crate::logging::LoggingConfig;
use completion::{GeminiCompletionRequest, GeminiCompletionResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, Secret};

/// Default v1beta API base url
pub const GEMINI_API_HOST: &str = "generativelanguage.googleapis.com/v1beta";
/// API key header
pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct GeminiBackend {
    pub(crate) client: ApiClient<GeminiConfig>,
    pub model_id: String,
}

impl GeminiBackend {
    pub fn new(mut config: GeminiConfig, model_id: String) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        config.api_config.api_key = Some(config.api_config.load_api_key()?);
        Ok(Self {
            client: ApiClient::new(config),
            model_id,
        })
    }

    pub(crate) async fn completion_request(&self, prompt: &str) -> Result<String, ClientError> {
        let path = format!("/models/{}:generateContent", self.model_id);
        let res: GeminiCompletionResponse = self
            .client
            .post(&path, GeminiCompletionRequest::from_prompt(prompt))
            .await?;
        Ok(res.text())
    }
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: GEMINI_API_HOST.to_string(),
                port: None,
                api_key: None,
                api_key_env_var: "GEMINI_API_KEY".to_string(),
            },
            logging_config: LoggingConfig {
                logger_name: "gemini".to_string(),
                // The binary owns the subscriber; backends log through it.
                logging_enabled: false,
                ..Default::default()
            },
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ApiConfigTrait for GeminiConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = self.api_key() {
            if let Ok(header_value) = HeaderValue::from_str(api_key.expose_secret()) {
                headers.insert(HeaderName::from_static(GEMINI_API_KEY_HEADER), header_value);
            } else {
                crate::error!("Failed to create header value from api_key value");
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
