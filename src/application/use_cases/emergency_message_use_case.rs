//! Emergency contact messaging.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::dto::EmergencyMessageRequest;
use crate::domain::errors::DashboardError;
use crate::domain::ports::DashboardPort;

/// Sends the standard emergency message to a contact.
#[derive(Clone)]
pub struct EmergencyMessageUseCase {
    dashboard: Arc<dyn DashboardPort>,
}

impl EmergencyMessageUseCase {
    /// Creates new emergency message use case.
    #[must_use]
    pub const fn new(dashboard: Arc<dyn DashboardPort>) -> Self {
        Self { dashboard }
    }

    /// Executes the send.
    ///
    /// # Errors
    /// Returns error if the backend request fails.
    pub async fn execute(&self, request: EmergencyMessageRequest) -> Result<(), DashboardError> {
        self.dashboard
            .send_emergency_message(&request.to, &request.message)
            .await
            .map_err(|e| {
                warn!(error = %e, "Error sending emergency message");
                e
            })?;

        info!(to = %request.to, "Emergency message sent");
        Ok(())
    }
}
