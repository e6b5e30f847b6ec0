//! Weather entities.

use serde::Deserialize;

use super::Coordinates;
use crate::domain::serde_utils::scalar_text;

/// What to look the weather up by.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    /// A city name, sent as typed.
    City(String),
    /// A position, usually the device's own.
    Position(Coordinates),
}

/// Current conditions as reported by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[allow(missing_docs)]
pub struct WeatherReport {
    #[serde(with = "scalar_text")]
    pub city: String,
    #[serde(with = "scalar_text")]
    pub temperature: String,
    #[serde(with = "scalar_text")]
    pub condition: String,
    #[serde(with = "scalar_text")]
    pub humidity: String,
    #[serde(with = "scalar_text")]
    pub wind_speed: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_verbatim() {
        let json = r#"{
            "city": "Pune",
            "temperature": "24.3 °C",
            "condition": "Scattered Clouds",
            "humidity": "61%",
            "wind_speed": "3.1 m/s"
        }"#;
        let report: WeatherReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.city, "Pune");
        assert_eq!(report.temperature, "24.3 °C");
        assert_eq!(report.condition, "Scattered Clouds");
        assert_eq!(report.humidity, "61%");
        assert_eq!(report.wind_speed, "3.1 m/s");
    }
}
