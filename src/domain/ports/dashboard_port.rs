//! Backend port definition.

use async_trait::async_trait;

use crate::domain::entities::{Coordinates, SosDispatch, TrainStatus, WeatherQuery, WeatherReport};
use crate::domain::errors::DashboardError;

/// Port for the train dashboard backend.
#[async_trait]
pub trait DashboardPort: Send + Sync {
    /// Fetches live status for a train.
    async fn train_status(&self, train_no: &str) -> Result<TrainStatus, DashboardError>;

    /// Fetches current weather.
    async fn weather(&self, query: &WeatherQuery) -> Result<WeatherReport, DashboardError>;

    /// Dispatches an SOS for the given position and category.
    async fn dispatch_sos(
        &self,
        position: Coordinates,
        category: &str,
    ) -> Result<SosDispatch, DashboardError>;

    /// Sends a message to an emergency contact.
    async fn send_emergency_message(&self, to: &str, message: &str)
    -> Result<(), DashboardError>;
}
