//! Data transfer objects for the application layer.

mod request_dto;

pub use request_dto::{EmergencyMessageRequest, SosRequest, WeatherRequest};
