// Internal modules
mod error;
mod generate;
mod retry;

// Public exports
pub use error::CompletionError;
pub use generate::LlmGenerate;
pub use retry::RetryingClient;
