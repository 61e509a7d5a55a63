//! # topic_classifier: group short texts by topic with an LLM
//!
//! Texts are sent to the model in batches and the model's groupings are
//! validated before they are kept. Whatever the model files under the other
//! label is sent back for another pass until nothing more can be placed, and
//! labels left holding a single text are folded into the other label.
//!
//! ```ignore
//! use topic_classifier::prelude::*;
//!
//! let backend = LlmInterface::gemini().init()?;
//! let classifier = TopicClassifier::new(RetryingClient::new(backend), ClassifyConfig::new())?;
//! let partition = classifier.run(&texts).await?;
//! ```

#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod components;
pub mod input;
pub mod prelude;
pub mod settings;
pub mod summary;
pub mod workflows;

pub use components::{
    partition::Partition,
    prompt::build_prompt,
    response::{parse_batch_response, strip_code_fence, ResponseError},
};
pub use input::{load_text_items, write_partition, InputError};
pub use settings::ClassifierSettings;
pub use summary::Summary;
pub use workflows::{
    consolidate::consolidate, ClassifyConfig, ClassifyError, TopicClassifier,
};
