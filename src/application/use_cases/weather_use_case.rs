//! Weather lookup.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::WeatherRequest;
use crate::domain::entities::{WeatherQuery, WeatherReport};
use crate::domain::errors::DashboardError;
use crate::domain::ports::{DashboardPort, LocationPort};

/// Fetches weather by city name or by the device position.
#[derive(Clone)]
pub struct WeatherUseCase {
    dashboard: Arc<dyn DashboardPort>,
    location: Arc<dyn LocationPort>,
}

impl WeatherUseCase {
    /// Creates new weather use case.
    #[must_use]
    pub const fn new(dashboard: Arc<dyn DashboardPort>, location: Arc<dyn LocationPort>) -> Self {
        Self {
            dashboard,
            location,
        }
    }

    /// Executes the lookup.
    ///
    /// # Errors
    /// Returns a location error before any request when the position is
    /// unavailable, otherwise the backend error if the request fails.
    pub async fn execute(&self, request: WeatherRequest) -> Result<WeatherReport, DashboardError> {
        let query = match request {
            WeatherRequest::City(city) => WeatherQuery::City(city),
            WeatherRequest::CurrentLocation => {
                let position = self.location.current_position().await.map_err(|e| {
                    warn!(error = ?e, "Geolocation error");
                    e
                })?;
                WeatherQuery::Position(position)
            }
        };

        debug!(query = ?query, "Fetching weather");

        self.dashboard.weather(&query).await.map_err(|e| {
            warn!(error = %e, "Error fetching weather");
            e
        })
    }
}
