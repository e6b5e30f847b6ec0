//! Serde utilities for backend payloads.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Deserializes any JSON scalar into the text a display slot should show.
///
/// Strings pass through untouched; numbers and booleans keep their JSON
/// spelling (`5`, `4.5`, `true`). Objects, arrays and `null` are rejected.
pub mod scalar_text {
    use super::{Deserializer, Visitor, de, fmt};

    pub(super) struct ScalarTextVisitor;

    impl Visitor<'_> for ScalarTextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    /// Deserializes a scalar as display text.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string, number or boolean.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarTextVisitor)
    }

    /// Optional variant: a missing field or `null` becomes `None`.
    pub mod option {
        use super::super::{Deserializer, Visitor, de, fmt};
        use super::ScalarTextVisitor;

        /// Deserializes an optional scalar as display text.
        ///
        /// # Errors
        ///
        /// Returns an error if a present value is not a scalar.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct OptionVisitor;

            impl<'de> Visitor<'de> for OptionVisitor {
                type Value = Option<String>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("an optional string, number or boolean")
                }

                fn visit_none<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_unit<E>(self) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    Ok(None)
                }

                fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer.deserialize_any(ScalarTextVisitor).map(Some)
                }
            }

            deserializer.deserialize_option(OptionVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(with = "super::scalar_text")]
        value: String,
        #[serde(default, with = "super::scalar_text::option")]
        extra: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).expect("probe should parse")
    }

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(probe(r#"{"value": "12 °C"}"#).value, "12 °C");
    }

    #[test]
    fn test_numbers_keep_json_spelling() {
        assert_eq!(probe(r#"{"value": 5}"#).value, "5");
        assert_eq!(probe(r#"{"value": -3}"#).value, "-3");
        assert_eq!(probe(r#"{"value": 4.5}"#).value, "4.5");
        assert_eq!(probe(r#"{"value": true}"#).value, "true");
    }

    #[test]
    fn test_optional_missing_and_null() {
        assert_eq!(probe(r#"{"value": "x"}"#).extra, None);
        assert_eq!(probe(r#"{"value": "x", "extra": null}"#).extra, None);
        assert_eq!(
            probe(r#"{"value": "x", "extra": 7}"#).extra.as_deref(),
            Some("7")
        );
    }

    #[test]
    fn test_rejects_structures() {
        assert!(serde_json::from_str::<Probe>(r#"{"value": [1, 2]}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"value": null}"#).is_err());
    }
}
