//! Backend routes and query encoding.

use reqwest::Method;
use urlencoding::encode;

use crate::domain::entities::{Coordinates, WeatherQuery};

/// A single backend call, ready to be turned into a URL.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    /// `GET /train_status?train_no=`
    TrainStatus { train_no: &'a str },
    /// `GET /weather?city=` or `GET /weather?lat=&lon=`
    Weather(&'a WeatherQuery),
    /// `POST /sos?lat=&lon=&category=`
    Sos {
        position: Coordinates,
        category: &'a str,
    },
    /// `POST /send_emergency_message?to=&message=`
    EmergencyMessage { to: &'a str, message: &'a str },
}

impl Endpoint<'_> {
    /// Returns the HTTP method for the call.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::TrainStatus { .. } | Self::Weather(_) => Method::GET,
            Self::Sos { .. } | Self::EmergencyMessage { .. } => Method::POST,
        }
    }

    /// Returns the short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TrainStatus { .. } => "train_status",
            Self::Weather(_) => "weather",
            Self::Sos { .. } => "sos",
            Self::EmergencyMessage { .. } => "send_emergency_message",
        }
    }

    /// Returns the path with its percent-encoded query string.
    ///
    /// Text values are encoded per RFC 3986 so spaces travel as `%20`.
    /// Coordinates use the shortest representation that round-trips.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match self {
            Self::TrainStatus { train_no } => {
                format!("/train_status?train_no={}", encode(train_no))
            }
            Self::Weather(WeatherQuery::City(city)) => format!("/weather?city={}", encode(city)),
            Self::Weather(WeatherQuery::Position(position)) => format!(
                "/weather?lat={}&lon={}",
                position.latitude(),
                position.longitude()
            ),
            Self::Sos { position, category } => format!(
                "/sos?lat={}&lon={}&category={}",
                position.latitude(),
                position.longitude(),
                encode(category)
            ),
            Self::EmergencyMessage { to, message } => format!(
                "/send_emergency_message?to={}&message={}",
                encode(to),
                encode(message)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EMERGENCY_MESSAGE_BODY;

    #[test]
    fn test_train_status() {
        let endpoint = Endpoint::TrainStatus { train_no: "12345" };
        assert_eq!(endpoint.method(), Method::GET);
        assert_eq!(endpoint.path_and_query(), "/train_status?train_no=12345");
    }

    #[test]
    fn test_weather_by_city() {
        let query = WeatherQuery::City("New Delhi".into());
        let endpoint = Endpoint::Weather(&query);
        assert_eq!(endpoint.method(), Method::GET);
        assert_eq!(endpoint.path_and_query(), "/weather?city=New%20Delhi");
    }

    #[test]
    fn test_weather_by_position() {
        let query = WeatherQuery::Position(Coordinates::new(17.385, 78.4867).unwrap());
        assert_eq!(
            Endpoint::Weather(&query).path_and_query(),
            "/weather?lat=17.385&lon=78.4867"
        );
    }

    #[test]
    fn test_sos_keeps_full_precision() {
        let lat = 12.971_598_765_432_1;
        let lon = -0.000_012_345_678_9;
        let endpoint = Endpoint::Sos {
            position: Coordinates::new(lat, lon).unwrap(),
            category: "police",
        };
        let path = endpoint.path_and_query();

        assert_eq!(endpoint.method(), Method::POST);
        let query = path.strip_prefix("/sos?").unwrap();
        let params: Vec<(&str, &str)> = query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap())
            .collect();
        assert_eq!(params[0].0, "lat");
        assert_eq!(params[0].1.parse::<f64>().unwrap(), lat);
        assert_eq!(params[1].1.parse::<f64>().unwrap(), lon);
        assert_eq!(params[2], ("category", "police"));
    }

    #[test]
    fn test_emergency_message_is_percent_encoded() {
        let endpoint = Endpoint::EmergencyMessage {
            to: "9876543210",
            message: EMERGENCY_MESSAGE_BODY,
        };
        assert_eq!(endpoint.method(), Method::POST);
        assert_eq!(
            endpoint.path_and_query(),
            "/send_emergency_message?to=9876543210&message=This%20is%20an%20emergency%20message."
        );
    }

    #[test]
    fn test_contact_round_trips_verbatim() {
        let contact = "+91 98765&43210";
        let endpoint = Endpoint::EmergencyMessage {
            to: contact,
            message: "x",
        };
        let path = endpoint.path_and_query();
        let encoded = path
            .strip_prefix("/send_emergency_message?to=")
            .and_then(|rest| rest.split_once("&message="))
            .map(|(to, _)| to)
            .unwrap();

        assert_eq!(urlencoding::decode(encoded).unwrap(), contact);
    }
}
