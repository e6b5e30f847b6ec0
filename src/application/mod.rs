//! Application layer with use cases, DTOs and request plumbing.

/// Data transfer objects.
pub mod dto;
/// Notification queue and request slots.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{EmergencyMessageRequest, SosRequest, WeatherRequest};
pub use services::{Completion, NotificationManager, RequestSlot};
pub use use_cases::{EmergencyMessageUseCase, SosUseCase, TrainStatusUseCase, WeatherUseCase};
