//! Operation request DTOs.

use crate::domain::entities::EMERGENCY_MESSAGE_BODY;

/// Where the weather lookup should point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherRequest {
    /// Look up by the typed city name.
    City(String),
    /// Look up by the device's position.
    CurrentLocation,
}

/// SOS dispatch request data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SosRequest {
    /// Incident category label, sent as chosen.
    pub category: String,
}

impl SosRequest {
    /// Creates new SOS request.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

/// Emergency contact message request data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyMessageRequest {
    /// Destination contact, sent as typed.
    pub to: String,
    /// Message body.
    pub message: String,
}

impl EmergencyMessageRequest {
    /// Creates a request carrying the standard emergency body.
    #[must_use]
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message: EMERGENCY_MESSAGE_BODY.to_string(),
        }
    }
}
