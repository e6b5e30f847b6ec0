//! Use case implementations.

mod emergency_message_use_case;
mod sos_use_case;
mod train_status_use_case;
mod weather_use_case;

pub use emergency_message_use_case::EmergencyMessageUseCase;
pub use sos_use_case::SosUseCase;
pub use train_status_use_case::TrainStatusUseCase;
pub use weather_use_case::WeatherUseCase;
