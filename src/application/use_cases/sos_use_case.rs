//! SOS dispatch.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::dto::SosRequest;
use crate::domain::entities::SosDispatch;
use crate::domain::errors::DashboardError;
use crate::domain::ports::{DashboardPort, LocationPort};

/// Resolves the device position and dispatches an SOS for it.
#[derive(Clone)]
pub struct SosUseCase {
    dashboard: Arc<dyn DashboardPort>,
    location: Arc<dyn LocationPort>,
}

impl SosUseCase {
    /// Creates new SOS use case.
    #[must_use]
    pub const fn new(dashboard: Arc<dyn DashboardPort>, location: Arc<dyn LocationPort>) -> Self {
        Self {
            dashboard,
            location,
        }
    }

    /// Executes the dispatch.
    ///
    /// # Errors
    /// Returns a location error without contacting the backend when the
    /// position cannot be obtained, otherwise the backend error if the
    /// dispatch fails.
    pub async fn execute(&self, request: SosRequest) -> Result<SosDispatch, DashboardError> {
        let position = self.location.current_position().await.map_err(|e| {
            warn!(error = ?e, "Geolocation error");
            e
        })?;

        info!(
            category = %request.category,
            position = %position,
            "Dispatching SOS"
        );

        let dispatch = self
            .dashboard
            .dispatch_sos(position, &request.category)
            .await
            .map_err(|e| {
                warn!(error = %e, "Error sending SOS");
                e
            })?;

        info!(responder = %dispatch.responder_name, "SOS acknowledged");
        Ok(dispatch)
    }
}
