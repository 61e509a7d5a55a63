use super::{OpenAiBackend, OpenAiConfig, OPENAI_DEFAULT_MODEL};
use crate::{
    llms::{
        api::config::{ApiConfig, LlmApiConfigTrait},
        LlmBackend,
    },
    logging::{LoggingConfig, LoggingConfigTrait},
};

pub struct OpenAiBackendBuilder {
    pub config: OpenAiConfig,
    pub model_id: String,
}

impl Default for OpenAiBackendBuilder {
    fn default() -> Self {
        Self {
            config: Default::default(),
            model_id: OPENAI_DEFAULT_MODEL.to_string(),
        }
    }
}

impl OpenAiBackendBuilder {
    pub fn model_id<S: Into<String>>(mut self, model_id: S) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn init(self) -> crate::Result<LlmBackend> {
        Ok(LlmBackend::OpenAi(OpenAiBackend::new(
            self.config,
            self.model_id,
        )?))
    }
}

impl LlmApiConfigTrait for OpenAiBackendBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl LoggingConfigTrait for OpenAiBackendBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}
