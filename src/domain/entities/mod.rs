//! Domain entity definitions.

mod coordinates;
mod sos;
mod train;
mod weather;

pub use coordinates::Coordinates;
pub use sos::{EMERGENCY_MESSAGE_BODY, SosDispatch};
pub use train::{DELAY_REASON_PLACEHOLDER, TrainStatus};
pub use weather::{WeatherQuery, WeatherReport};
