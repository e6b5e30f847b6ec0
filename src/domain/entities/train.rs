//! Train status entity.

use serde::Deserialize;

use super::{Coordinates, WeatherReport};
use crate::domain::serde_utils::scalar_text;

/// Text shown in place of a missing delay reason.
pub const DELAY_REASON_PLACEHOLDER: &str = "-";

/// Live status of a single train as reported by the backend.
///
/// Every display field holds the backend's value verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct TrainStatus {
    #[serde(with = "scalar_text")]
    pub train_name: String,
    #[serde(with = "scalar_text")]
    pub current_station: String,
    #[serde(with = "scalar_text")]
    pub next_station: String,
    #[serde(with = "scalar_text")]
    pub scheduled_arrival: String,
    #[serde(with = "scalar_text")]
    pub delay_minutes: String,
    #[serde(with = "scalar_text")]
    pub predicted_delay: String,
    #[serde(default, with = "scalar_text::option")]
    pub delay_reason: Option<String>,
    #[serde(with = "scalar_text")]
    pub platform: String,

    #[serde(default, with = "scalar_text::option")]
    pub actual_arrival: Option<String>,
    #[serde(default)]
    current_lat: Option<f64>,
    #[serde(default)]
    current_lon: Option<f64>,
    #[serde(default)]
    next_lat: Option<f64>,
    #[serde(default)]
    next_lon: Option<f64>,
    /// Weather at the current station, when the backend includes it.
    #[serde(default)]
    pub weather: Option<WeatherReport>,
}

impl TrainStatus {
    /// Returns the delay reason, or the placeholder when absent or empty.
    #[must_use]
    pub fn delay_reason_text(&self) -> &str {
        self.delay_reason
            .as_deref()
            .filter(|reason| !reason.is_empty())
            .unwrap_or(DELAY_REASON_PLACEHOLDER)
    }

    /// Returns the position of the current station if reported.
    #[must_use]
    pub fn current_position(&self) -> Option<Coordinates> {
        Coordinates::new(self.current_lat?, self.current_lon?)
    }

    /// Returns the position of the next station if reported.
    #[must_use]
    pub fn next_position(&self) -> Option<Coordinates> {
        Coordinates::new(self.next_lat?, self.next_lon?)
    }
}
