//! Dashboard backend HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::ErrorResponse;
use super::endpoints::Endpoint;
use crate::domain::entities::{Coordinates, SosDispatch, TrainStatus, WeatherQuery, WeatherReport};
use crate::domain::errors::DashboardError;
use crate::domain::ports::DashboardPort;

/// Default backend address.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const USER_AGENT: &str = concat!("onrails/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the train dashboard backend.
///
/// Carries no request timeout of its own; callers bound requests through
/// their request slot.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, DashboardError> {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DashboardError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the absolute URL for an endpoint.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path_and_query())
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, DashboardError> {
        let url = self.url(&endpoint);

        debug!(endpoint = endpoint.name(), method = %endpoint.method(), url = %url, "Sending request");

        let response = self
            .client
            .request(endpoint.method(), &url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = endpoint.name(), "Failed to reach backend");
                if e.is_timeout() {
                    DashboardError::network("request timed out")
                } else if e.is_connect() {
                    DashboardError::network("failed to connect to backend")
                } else {
                    DashboardError::network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, endpoint = endpoint.name(), "Failed to parse response");
            DashboardError::decode(e.to_string())
        })
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> DashboardError {
        let detail = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        warn!(status = %status, detail = %detail, "Backend returned an error");
        DashboardError::status(status.as_u16(), detail)
    }
}

#[async_trait]
impl DashboardPort for BackendClient {
    async fn train_status(&self, train_no: &str) -> Result<TrainStatus, DashboardError> {
        self.call(Endpoint::TrainStatus { train_no }).await
    }

    async fn weather(&self, query: &WeatherQuery) -> Result<WeatherReport, DashboardError> {
        self.call(Endpoint::Weather(query)).await
    }

    async fn dispatch_sos(
        &self,
        position: Coordinates,
        category: &str,
    ) -> Result<SosDispatch, DashboardError> {
        self.call(Endpoint::Sos { position, category }).await
    }

    async fn send_emergency_message(
        &self,
        to: &str,
        message: &str,
    ) -> Result<(), DashboardError> {
        // The acknowledgement body is unused, but it still has to be JSON.
        let _ack: serde_json::Value = self.call(Endpoint::EmergencyMessage { to, message }).await?;
        Ok(())
    }
}
