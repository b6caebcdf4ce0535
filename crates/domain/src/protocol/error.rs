//! Protocol-level failures.
//!
//! [`ProtocolError`] means the message itself is unusable and is returned to
//! the transport as an `Err`. [`DirectiveError`] is a well-formed directive
//! that could not be carried out; it becomes an `ErrorResponse` message.

use std::fmt;

use serde_json::{Map, Value, json};

use super::NAMESPACE_ALEXA;
use crate::convert::ConversionError;
use crate::entity::{AttributeError, EntityId};
use crate::temperature::{Temperature, TemperatureUnit};

/// The inbound message violates the envelope contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unsupported payload version {0:?}")]
    UnsupportedPayloadVersion(String),

    #[error("malformed directive: {0}")]
    Malformed(String),
}

/// The `type` field of an `ErrorResponse` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoSuchEndpoint,
    InternalError,
    TemperatureValueOutOfRange,
    UnsupportedThermostatMode,
    InvalidValue,
    ValueOutOfRange,
    InvalidDirective,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoSuchEndpoint => "NO_SUCH_ENDPOINT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::TemperatureValueOutOfRange => "TEMPERATURE_VALUE_OUT_OF_RANGE",
            Self::UnsupportedThermostatMode => "UNSUPPORTED_THERMOSTAT_MODE",
            Self::InvalidValue => "INVALID_VALUE",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::InvalidDirective => "INVALID_DIRECTIVE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directive that failed in a way the caller is told about.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct DirectiveError {
    pub kind: ErrorKind,
    /// Namespace of the `ErrorResponse` event.
    pub namespace: &'static str,
    pub message: String,
    /// Extra payload fields besides `type` and `message`.
    pub extra: Map<String, Value>,
    /// Internal cause; logged and audited, never serialized.
    pub detail: Option<String>,
}

impl DirectiveError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            namespace: NAMESPACE_ALEXA,
            message: message.into(),
            extra: Map::new(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: &'static str) -> Self {
        self.namespace = namespace;
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn no_such_endpoint(entity_id: &str) -> Self {
        Self::new(
            ErrorKind::NoSuchEndpoint,
            format!("endpoint for {entity_id} does not exist"),
        )
    }

    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalError, "internal error").with_detail(detail)
    }

    #[must_use]
    pub fn invalid_directive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDirective, message)
    }

    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue, message)
    }

    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValueOutOfRange, message)
    }

    /// A setpoint outside `min..=max`, both expressed in the hub unit.
    #[must_use]
    pub fn temperature_out_of_range(value: f64, min: f64, max: f64, unit: TemperatureUnit) -> Self {
        let scale = unit.scale();
        let mut err = Self::new(
            ErrorKind::TemperatureValueOutOfRange,
            format!("requested temperature {value} is out of range"),
        );
        err.extra.insert(
            "validRange".to_string(),
            json!({
                "minimumValue": Temperature::new(min, scale),
                "maximumValue": Temperature::new(max, scale),
            }),
        );
        err
    }

    #[must_use]
    pub fn unsupported_thermostat_mode(mode: &str) -> Self {
        Self::new(
            ErrorKind::UnsupportedThermostatMode,
            format!("thermostat mode {mode} is not supported"),
        )
        .with_namespace("Alexa.ThermostatController")
    }

    /// The entity lacks an attribute the handler depends on.
    #[must_use]
    pub fn missing_attribute(entity_id: &EntityId, err: &AttributeError) -> Self {
        Self::internal(format!("{entity_id}: {err}"))
    }

    /// The `ErrorResponse` payload: `type`, `message` and any extras.
    #[must_use]
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("type".to_string(), Value::from(self.kind.as_str()));
        payload.insert("message".to_string(), Value::from(self.message.clone()));
        payload.extend(self.extra.clone());
        payload
    }
}

impl From<ConversionError> for DirectiveError {
    fn from(err: ConversionError) -> Self {
        Self::value_out_of_range(err.to_string())
    }
}
