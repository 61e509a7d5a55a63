// Internal modules
mod client;
mod config;
mod error;

// Public modules
pub mod gemini;
pub mod openai;

// Internal exports
pub(crate) use client::ApiClient;
pub(crate) use config::ApiConfigTrait;

// Public exports
pub use config::{ApiConfig, LlmApiConfigTrait};
pub use error::{ApiError, ClientError};
