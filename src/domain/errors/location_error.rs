//! Location service error types.

use thiserror::Error;

/// Reasons the device position could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No location source is available on this device.
    #[error("Geolocation not supported.")]
    Unsupported,

    /// The location source refused access.
    #[error("Could not get your location.")]
    Denied,

    /// The location source failed or returned nonsense. The reason is
    /// kept for logs only.
    #[error("Could not get your location.")]
    Unavailable(String),
}
