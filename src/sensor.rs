//! Measured temperature readings.
//!
//! A reading arrives either as a bare number (degrees Celsius) or as a Home Assistant
//! entity state object carrying a `unit_of_measurement` attribute.

use std::{collections::HashMap, str::FromStr};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;


#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorValueError {
    #[error("sensor is {0}")]
    Unavailable(String),
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("unknown temperature unit {0:?}")]
    UnknownUnit(String),
    #[error("invalid state object: {0}")]
    Json(String),
}


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn to_celsius(self, value: f32) -> f32 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = SensorValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "°c" | "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "°f" | "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(SensorValueError::UnknownUnit(s.to_string()))
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureReading {
    pub value: f32,
    pub unit: TemperatureUnit
}

impl TemperatureReading {
    /// Parse a state string and optional unit tag. A missing unit means Celsius.
    pub fn from_state(state: &str, unit: Option<&str>) -> Result<Self, SensorValueError> {
        let state = state.trim();

        if matches!(state, "unavailable" | "unknown" | "") {
            return Err(SensorValueError::Unavailable(state.to_string()));
        }

        let value = state.parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| SensorValueError::NotANumber(state.to_string()))?;

        let unit = unit.map(TemperatureUnit::from_str).transpose()?.unwrap_or_default();

        Ok(Self { value, unit })
    }

    pub fn celsius(&self) -> f32 {
        self.unit.to_celsius(self.value)
    }
}


/// An entity's state, as returned by `/api/states/<entity_id>` or published on MQTT.
#[derive(Clone, Debug, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub entity_id: Option<String>,
    pub state: Value,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl EntityState {
    pub fn state_text(&self) -> String {
        match &self.state {
            Value::String(state) => state.clone(),
            other => other.to_string()
        }
    }

    pub fn unit(&self) -> Option<&str> {
        self.attributes.get("unit_of_measurement").and_then(Value::as_str)
    }

    pub fn reading(&self) -> Result<TemperatureReading, SensorValueError> {
        TemperatureReading::from_state(&self.state_text(), self.unit())
    }
}


/// Parse a sensor payload: a bare number or an entity state object.
pub fn parse_reading(payload: &[u8]) -> Result<TemperatureReading, SensorValueError> {
    let text = std::str::from_utf8(payload)
        .map_err(|_| SensorValueError::NotANumber(String::from_utf8_lossy(payload).into_owned()))?
        .trim();

    if text.starts_with('{') {
        let state: EntityState = serde_json::from_str(text)
            .map_err(|err| SensorValueError::Json(err.to_string()))?;

        state.reading()
    } else {
        TemperatureReading::from_state(text, None)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn celsius(payload: &str) -> f32 {
        parse_reading(payload.as_bytes()).unwrap().celsius()
    }

    #[test]
    fn bare_numbers_are_celsius() {
        assert_eq!(celsius("21.5"), 21.5);
        assert_eq!(celsius(" 18\n"), 18.0);
        assert_eq!(celsius("-3"), -3.0);
    }

    #[test]
    fn state_objects_carry_units() {
        assert_eq!(celsius(r#"{"state": "23.0", "attributes": {"unit_of_measurement": "°C"}}"#), 23.0);
        assert_eq!(celsius(r#"{"state": "22.5"}"#), 22.5);
        assert_eq!(celsius(r#"{"state": 19.5, "attributes": {}}"#), 19.5);

        let fahrenheit = celsius(r#"{"state": "70.7", "attributes": {"unit_of_measurement": "°F"}}"#);
        assert!((fahrenheit - 21.5).abs() < 0.01);

        let kelvin = celsius(r#"{"state": "295.15", "attributes": {"unit_of_measurement": "K"}}"#);
        assert!((kelvin - 22.0).abs() < 0.01);
    }

    #[test]
    fn malformed_values() {
        assert_eq!(parse_reading(b"unavailable"), Err(SensorValueError::Unavailable("unavailable".into())));
        assert_eq!(
            parse_reading(br#"{"state": "unknown"}"#),
            Err(SensorValueError::Unavailable("unknown".into()))
        );
        assert_eq!(parse_reading(b"warm"), Err(SensorValueError::NotANumber("warm".into())));
        assert_eq!(parse_reading(b"NaN"), Err(SensorValueError::NotANumber("NaN".into())));
        assert_eq!(
            parse_reading(br#"{"state": "20", "attributes": {"unit_of_measurement": "%"}}"#),
            Err(SensorValueError::UnknownUnit("%".into()))
        );
        assert!(matches!(parse_reading(b"{\"state\":"), Err(SensorValueError::Json(_))));
    }
}
