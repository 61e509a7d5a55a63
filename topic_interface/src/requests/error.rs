use crate::llms::api::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("ClientError: {0}")]
    ClientError(#[from] ClientError),
    #[error("ExceededRetryCount: {message} [{}]", join_errors(.errors))]
    ExceededRetryCount {
        message: String,
        errors: Vec<ClientError>,
    },
}

fn join_errors(errors: &[ClientError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
