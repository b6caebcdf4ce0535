//! Outbound response envelope.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Directive, DirectiveError, EndpointRef, PAYLOAD_VERSION, Property};
use crate::id::MessageId;

/// `event.header`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    pub namespace: String,
    pub name: String,
    pub message_id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
    pub payload_version: &'static str,
}

/// `event`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEvent {
    pub header: ResponseHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointRef>,
    pub payload: Map<String, Value>,
}

/// `context`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Context {
    pub properties: Vec<Property>,
}

/// A complete outbound message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub event: ResponseEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl Response {
    /// A response to `directive` with a fresh message id, the directive's
    /// correlation token and its endpoint block.
    #[must_use]
    pub fn reply(directive: &Directive, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            event: ResponseEvent {
                header: ResponseHeader {
                    namespace: namespace.into(),
                    name: name.into(),
                    message_id: MessageId::new(),
                    correlation_token: directive.header.correlation_token.clone(),
                    payload_version: PAYLOAD_VERSION,
                },
                endpoint: directive.endpoint.clone(),
                payload: Map::new(),
            },
            context: None,
        }
    }

    /// An `ErrorResponse` describing `err`.
    #[must_use]
    pub fn error(directive: &Directive, err: &DirectiveError) -> Self {
        Self::reply(directive, err.namespace, "ErrorResponse").with_payload(err.payload())
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.event.payload = payload;
        self
    }

    /// Attach a `context` block; an empty list still produces the block.
    #[must_use]
    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.context = Some(Context { properties });
        self
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.event.header.namespace
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.event.header.name
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.event.header.name == "ErrorResponse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Interface;
    use serde_json::json;

    fn directive(with_token: bool) -> Directive {
        let mut header = json!({
            "namespace": "Alexa.PowerController",
            "name": "TurnOn",
            "payloadVersion": "3",
            "messageId": "5f8a426e-01e4-4cc9-8b79-65f8bd0fd8a4"
        });
        if with_token {
            header["correlationToken"] = json!("token-1");
        }
        Directive::from_message(&json!({
            "directive": {
                "header": header,
                "endpoint": {"endpointId": "switch#test"},
                "payload": {}
            }
        }))
        .unwrap()
    }

    #[test]
    fn should_copy_correlation_token_and_endpoint() {
        let request = directive(true);
        let response = Response::reply(&request, "Alexa", "Response");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["event"]["header"]["correlationToken"], "token-1");
        assert_eq!(json["event"]["header"]["payloadVersion"], "3");
        assert_eq!(json["event"]["endpoint"]["endpointId"], "switch#test");
        assert_ne!(
            json["event"]["header"]["messageId"],
            "5f8a426e-01e4-4cc9-8b79-65f8bd0fd8a4"
        );
        assert!(json.get("context").is_none());
    }

    #[test]
    fn should_omit_absent_correlation_token() {
        let response = Response::reply(&directive(false), "Alexa", "Response");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["event"]["header"].get("correlationToken").is_none());
    }

    #[test]
    fn should_build_error_response() {
        let err = DirectiveError::no_such_endpoint("switch.test");
        let response = Response::error(&directive(true), &err);
        assert!(response.is_error());
        assert_eq!(response.namespace(), "Alexa");
        assert_eq!(response.event.payload["type"], "NO_SUCH_ENDPOINT");
    }

    #[test]
    fn should_serialize_context_properties() {
        let response = Response::reply(&directive(true), "Alexa", "Response")
            .with_properties(vec![Property::new(Interface::PowerController, "powerState", "ON")]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["context"]["properties"][0]["name"], "powerState");
        assert_eq!(json["context"]["properties"][0]["value"], "ON");
    }
}
