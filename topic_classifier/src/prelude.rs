pub use crate::{
    consolidate, load_text_items, write_partition, ClassifierSettings, ClassifyConfig,
    ClassifyError, InputError, Partition, ResponseError, Summary, TopicClassifier,
};
pub use topic_interface::{
    ClientError, CompletionError, LlmApiConfigTrait, LlmBackend, LlmGenerate, LlmInterface,
    LoggingConfig, LoggingConfigTrait, RetryingClient,
};
