//! Domain error types.

mod dashboard_error;
mod location_error;

pub use dashboard_error::DashboardError;
pub use location_error::LocationError;
