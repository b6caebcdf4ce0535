//! Temperature units and conversions.
//!
//! The hub stores temperatures in one configured [`TemperatureUnit`]; callers
//! of the protocol may speak any [`TemperatureScale`]. Absolute values and
//! intervals (deltas) convert differently: an interval ignores the offset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const KELVIN_OFFSET: f64 = 273.15;

/// Lowest target temperature assumed when an entity declares none, in °C.
pub const DEFAULT_MIN_TEMP_CELSIUS: f64 = 7.0;
/// Highest target temperature assumed when an entity declares none, in °C.
pub const DEFAULT_MAX_TEMP_CELSIUS: f64 = 35.0;

/// The unit the hub uses internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// The unit-of-measurement symbol used in entity attributes.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Parse a unit-of-measurement symbol (`°C`, `°F`).
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "°C" => Some(Self::Celsius),
            "°F" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// The protocol scale naming this unit.
    #[must_use]
    pub fn scale(self) -> TemperatureScale {
        match self {
            Self::Celsius => TemperatureScale::Celsius,
            Self::Fahrenheit => TemperatureScale::Fahrenheit,
        }
    }

    /// Express a Celsius value in this unit.
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 1.8 + 32.0,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "celsius" | "c" => Ok(Self::Celsius),
            "fahrenheit" | "f" => Ok(Self::Fahrenheit),
            _ => Self::from_symbol(s).ok_or_else(|| ValidationError::UnknownTemperatureUnit(s.to_string())),
        }
    }
}

/// A temperature scale as named by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => f.write_str("CELSIUS"),
            Self::Fahrenheit => f.write_str("FAHRENHEIT"),
            Self::Kelvin => f.write_str("KELVIN"),
        }
    }
}

/// A protocol temperature object: `{"value": 21.5, "scale": "CELSIUS"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    pub scale: TemperatureScale,
}

impl Temperature {
    #[must_use]
    pub fn new(value: f64, scale: TemperatureScale) -> Self {
        Self { value, scale }
    }

    /// Convert an absolute temperature into the hub unit.
    #[must_use]
    pub fn to_unit(self, unit: TemperatureUnit) -> f64 {
        let celsius = match self.scale {
            TemperatureScale::Celsius => self.value,
            TemperatureScale::Fahrenheit => (self.value - 32.0) / 1.8,
            TemperatureScale::Kelvin => self.value - KELVIN_OFFSET,
        };
        match (self.scale, unit) {
            (TemperatureScale::Fahrenheit, TemperatureUnit::Fahrenheit) => self.value,
            _ => unit.from_celsius(celsius),
        }
    }

    /// Convert a temperature difference into the hub unit.
    #[must_use]
    pub fn interval_to_unit(self, unit: TemperatureUnit) -> f64 {
        match (self.scale, unit) {
            (TemperatureScale::Celsius | TemperatureScale::Kelvin, TemperatureUnit::Celsius)
            | (TemperatureScale::Fahrenheit, TemperatureUnit::Fahrenheit) => self.value,
            (TemperatureScale::Celsius | TemperatureScale::Kelvin, TemperatureUnit::Fahrenheit) => {
                self.value * 1.8
            }
            (TemperatureScale::Fahrenheit, TemperatureUnit::Celsius) => self.value / 1.8,
        }
    }
}

impl From<Temperature> for serde_json::Value {
    fn from(t: Temperature) -> Self {
        serde_json::json!({ "value": t.value, "scale": t.scale.to_string() })
    }
}
