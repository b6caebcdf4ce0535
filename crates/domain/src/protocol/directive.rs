//! Inbound directive envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DirectiveError, EndpointId, ProtocolError, ProtocolVersion};
use crate::temperature::Temperature;

/// `directive.header`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveHeader {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
    pub payload_version: String,
}

/// `directive.endpoint`; unknown fields (scope, cookie, ...) are kept so the
/// block can be echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRef {
    pub endpoint_id: EndpointId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A directive payload with typed field accessors.
///
/// Every accessor fails with `INVALID_DIRECTIVE` when the field is missing
/// or has the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when the field is absent.
    pub fn require(&self, key: &str) -> Result<&Value, DirectiveError> {
        self.0
            .get(key)
            .ok_or_else(|| DirectiveError::invalid_directive(format!("missing payload field {key}")))
    }

    /// Numeric field; floats are rounded and numeric strings accepted.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when absent or not numeric.
    pub fn require_i64(&self, key: &str) -> Result<i64, DirectiveError> {
        let value = self.require_f64(key)?;
        #[allow(clippy::cast_possible_truncation)]
        let rounded = value.round() as i64;
        Ok(rounded)
    }

    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when absent or not numeric.
    pub fn require_f64(&self, key: &str) -> Result<f64, DirectiveError> {
        let value = self.require(key)?;
        value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| invalid_field(key))
    }

    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when absent or not a boolean.
    pub fn require_bool(&self, key: &str) -> Result<bool, DirectiveError> {
        self.require(key)?.as_bool().ok_or_else(|| invalid_field(key))
    }

    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when absent or not a string.
    pub fn require_str(&self, key: &str) -> Result<&str, DirectiveError> {
        self.require(key)?.as_str().ok_or_else(|| invalid_field(key))
    }

    /// Nested object field.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when absent or not an object.
    pub fn require_object(&self, key: &str) -> Result<Payload, DirectiveError> {
        self.require(key)?
            .as_object()
            .map(|fields| Payload(fields.clone()))
            .ok_or_else(|| invalid_field(key))
    }

    /// A `{value, scale}` temperature field.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when absent or not a temperature object.
    pub fn require_temperature(&self, key: &str) -> Result<Temperature, DirectiveError> {
        Temperature::deserialize(self.require(key)?).map_err(|_| invalid_field(key))
    }

    /// Optional temperature field; present but malformed is still an error.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_DIRECTIVE` when present but not a temperature object.
    pub fn temperature(&self, key: &str) -> Result<Option<Temperature>, DirectiveError> {
        if self.0.contains_key(key) {
            self.require_temperature(key).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn invalid_field(key: &str) -> DirectiveError {
    DirectiveError::invalid_directive(format!("payload field {key} has an invalid value"))
}

/// A parsed, version-checked directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub header: DirectiveHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointRef>,
    #[serde(default)]
    pub payload: Payload,
}

#[derive(Deserialize)]
struct Envelope {
    directive: Option<Value>,
}

impl Directive {
    /// Parse `{"directive": {...}}` and check the payload version.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Malformed`] when the envelope does not
    /// deserialize and [`ProtocolError::UnsupportedPayloadVersion`] when the
    /// header's version is not `"3"`.
    pub fn from_message(message: &Value) -> Result<Self, ProtocolError> {
        let envelope = Envelope::deserialize(message)
            .map_err(|err| ProtocolError::Malformed(err.to_string()))?;
        let raw = envelope
            .directive
            .ok_or_else(|| ProtocolError::Malformed("missing directive".to_string()))?;
        let directive =
            Self::deserialize(&raw).map_err(|err| ProtocolError::Malformed(err.to_string()))?;
        if ProtocolVersion::parse(&directive.header.payload_version).is_none() {
            return Err(ProtocolError::UnsupportedPayloadVersion(
                directive.header.payload_version,
            ));
        }
        Ok(directive)
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.header.namespace
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.header.name
    }

    #[must_use]
    pub fn endpoint_id(&self) -> Option<&EndpointId> {
        self.endpoint.as_ref().map(|endpoint| &endpoint.endpoint_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::protocol::ErrorKind;

    fn message(version: &str) -> Value {
        json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.PowerController",
                    "name": "TurnOn",
                    "payloadVersion": version,
                    "messageId": "5f8a426e-01e4-4cc9-8b79-65f8bd0fd8a4",
                    "correlationToken": "dFMb0z+PgpgdDmluhJ1LddFvSqZ/jCc8ptlAKulUj90jSqg=="
                },
                "endpoint": {
                    "scope": {"type": "BearerToken", "token": "access-token"},
                    "endpointId": "switch#test",
                    "cookie": {}
                },
                "payload": {}
            }
        })
    }

    #[test]
    fn should_parse_valid_directive() {
        let directive = Directive::from_message(&message("3")).unwrap();
        assert_eq!(directive.namespace(), "Alexa.PowerController");
        assert_eq!(directive.name(), "TurnOn");
        assert_eq!(directive.endpoint_id().unwrap().as_str(), "switch#test");
        assert!(directive.header.correlation_token.is_some());
    }

    #[test]
    fn should_keep_unknown_endpoint_fields_for_echo() {
        let directive = Directive::from_message(&message("3")).unwrap();
        let endpoint = serde_json::to_value(directive.endpoint.unwrap()).unwrap();
        assert_eq!(endpoint["scope"]["type"], "BearerToken");
        assert_eq!(endpoint["endpointId"], "switch#test");
        assert!(endpoint.get("cookie").is_some());
    }

    #[test]
    fn should_reject_wrong_payload_version() {
        let result = Directive::from_message(&message("2"));
        assert_eq!(
            result,
            Err(ProtocolError::UnsupportedPayloadVersion("2".to_string()))
        );
    }

    #[test]
    fn should_reject_message_without_directive() {
        let result = Directive::from_message(&json!({"event": {}}));
        assert!(matches!(result, Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn should_read_typed_payload_fields() {
        let payload: Payload = serde_json::from_value(json!({
            "brightness": "42",
            "volume": 12.6,
            "mute": true,
            "input": "HDMI 1",
            "targetSetpoint": {"value": 21.5, "scale": "CELSIUS"}
        }))
        .unwrap();
        assert_eq!(payload.require_i64("brightness").unwrap(), 42);
        assert_eq!(payload.require_i64("volume").unwrap(), 13);
        assert!(payload.require_bool("mute").unwrap());
        assert_eq!(payload.require_str("input").unwrap(), "HDMI 1");
        assert_eq!(payload.require_temperature("targetSetpoint").unwrap().value, 21.5);
        assert_eq!(payload.temperature("lowerSetpoint").unwrap(), None);
    }

    #[test]
    fn should_report_invalid_directive_for_bad_fields() {
        let payload: Payload = serde_json::from_value(json!({"mute": "yes"})).unwrap();
        let err = payload.require_bool("mute").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDirective);
        let err = payload.require_i64("brightness").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDirective);
    }
}
