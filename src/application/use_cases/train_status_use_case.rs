//! Train status lookup.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::TrainStatus;
use crate::domain::errors::DashboardError;
use crate::domain::ports::DashboardPort;

/// Fetches the live status of a train.
#[derive(Clone)]
pub struct TrainStatusUseCase {
    dashboard: Arc<dyn DashboardPort>,
}

impl TrainStatusUseCase {
    /// Creates new train status use case.
    #[must_use]
    pub const fn new(dashboard: Arc<dyn DashboardPort>) -> Self {
        Self { dashboard }
    }

    /// Executes the lookup for the given train number.
    ///
    /// # Errors
    /// Returns error if the backend request fails.
    pub async fn execute(&self, train_no: String) -> Result<TrainStatus, DashboardError> {
        debug!(train_no = %train_no, "Checking train status");

        let status = self.dashboard.train_status(&train_no).await.map_err(|e| {
            warn!(error = %e, train_no = %train_no, "Error fetching train status");
            e
        })?;

        debug!(
            train = %status.train_name,
            station = %status.current_station,
            "Train status received"
        );
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{BackendCall, MockDashboardPort};

    fn sample() -> TrainStatus {
        serde_json::from_str(
            r#"{"train_name": "Train 54321", "current_station": "Mumbai",
                "next_station": "Pune", "scheduled_arrival": "08:15",
                "delay_minutes": 3, "predicted_delay": 5, "platform": "P2"}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_passes_train_number_through() {
        let port = MockDashboardPort::new().with_train(sample());
        let use_case = TrainStatusUseCase::new(Arc::new(port.clone()));

        let status = use_case.execute("54321".into()).await.unwrap();

        assert_eq!(status.train_name, "Train 54321");
        assert_eq!(port.recorded(), vec![BackendCall::TrainStatus("54321".into())]);
    }

    #[tokio::test]
    async fn test_propagates_backend_failure() {
        let port = MockDashboardPort::new().failing();
        let use_case = TrainStatusUseCase::new(Arc::new(port));

        let result = use_case.execute("1".into()).await;

        assert!(matches!(result, Err(DashboardError::Network { .. })));
    }
}
