//! Backend request error types.

use std::time::Duration;

use thiserror::Error;

use super::LocationError;

/// Failure of a dashboard operation.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DashboardError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("backend returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("malformed response: {message}")]
    Decode { message: String },

    #[error("request timed out after {}s", .after.as_secs_f32())]
    Timeout { after: Duration },

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl DashboardError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub fn status(status: u16, detail: impl Into<String>) -> Self {
        Self::Status {
            status,
            detail: detail.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the user must acknowledge this error.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::Location(_))
    }
}
