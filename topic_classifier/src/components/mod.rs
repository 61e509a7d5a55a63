pub mod partition;
pub mod prompt;
pub mod response;
