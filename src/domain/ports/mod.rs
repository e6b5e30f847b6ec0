mod dashboard_port;
mod location_port;

pub use dashboard_port::DashboardPort;
pub use location_port::LocationPort;

#[cfg(test)]
pub mod mocks {
    pub use super::dashboard_port::mock::{BackendCall, MockDashboardPort};
    pub use super::location_port::mock::MockLocationPort;
}
