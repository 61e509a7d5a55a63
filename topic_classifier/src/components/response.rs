use super::partition::Partition;
use indexmap::IndexMap;

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Failed to parse model output as a label to texts object: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Model output does not cover the batch: expected {expected} items, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Strips one surrounding markdown code fence, e.g. "```json ... ```".
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Validates raw model output for a batch of `expected` items.
///
/// The output must be a JSON object mapping labels to arrays of strings, and
/// the arrays together must hold exactly `expected` entries. Item identity is
/// not checked.
pub fn parse_batch_response(raw: &str, expected: usize) -> Result<Partition, ResponseError> {
    let groups: IndexMap<String, Vec<String>> = serde_json::from_str(strip_code_fence(raw))?;
    let partition: Partition = groups.into_iter().collect();
    let actual = partition.total_items();
    if actual != expected {
        return Err(ResponseError::SizeMismatch { expected, actual });
    }
    Ok(partition)
}
