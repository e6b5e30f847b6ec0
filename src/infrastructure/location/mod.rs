//! Location adapters.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Coordinates;
use crate::domain::errors::LocationError;
use crate::domain::ports::LocationPort;

/// Location source backed by coordinates from configuration.
///
/// Terminals have no location service, so the device position is whatever
/// the user configured. Without one the platform counts as unsupported.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl ConfiguredLocation {
    /// Creates a provider from optional configured values.
    #[must_use]
    pub const fn new(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a provider with no position.
    #[must_use]
    pub const fn unsupported() -> Self {
        Self::new(None, None)
    }
}

#[async_trait]
impl LocationPort for ConfiguredLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        match (self.latitude, self.longitude) {
            (None, None) => Err(LocationError::Unsupported),
            (Some(latitude), Some(longitude)) => {
                let position = Coordinates::new(latitude, longitude).ok_or_else(|| {
                    LocationError::Unavailable(format!(
                        "configured position {latitude}, {longitude} is out of range"
                    ))
                })?;
                debug!(position = %position, "Resolved configured position");
                Ok(position)
            }
            _ => Err(LocationError::Unavailable(
                "both latitude and longitude must be configured".to_string(),
            )),
        }
    }
}
