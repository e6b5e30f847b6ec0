//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Toasts and modal alerts.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Per-panel request lifecycle.
pub mod request_state;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{Coordinates, SosDispatch, TrainStatus, WeatherQuery, WeatherReport};
pub use errors::{DashboardError, LocationError};
pub use notification::{Alert, Notification, NotificationLevel};
pub use ports::{DashboardPort, LocationPort};
pub use request_state::RequestState;
