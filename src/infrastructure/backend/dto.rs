use serde::Deserialize;

/// Error body returned by the backend on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Either a message string or a list of validation errors.
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// Returns the detail as display text.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
