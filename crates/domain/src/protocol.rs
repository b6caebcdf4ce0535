//! The voice-assistant smart-home protocol, version 3.
//!
//! Inbound messages are [`Directive`]s; outbound messages are
//! [`Response`]s. Capability interfaces and display categories are kept in
//! an explicit versioned table ([`interface`]).

mod directive;
mod endpoint;
mod error;
pub mod interface;
mod kind;
mod message;
mod property;

pub use directive::{Directive, DirectiveHeader, EndpointRef, Payload};
pub use endpoint::{Capability, Endpoint, EndpointId};
pub use error::{DirectiveError, ErrorKind, ProtocolError};
pub use interface::{DisplayCategory, Interface, InterfaceSpec, ProtocolVersion};
pub use kind::DirectiveKind;
pub use message::{Context, Response, ResponseEvent, ResponseHeader};
pub use property::{LockState, PowerState, Property};

/// The only payload version the bridge speaks.
pub const PAYLOAD_VERSION: &str = ProtocolVersion::CURRENT.as_str();

/// Namespace of generic responses and errors.
pub const NAMESPACE_ALEXA: &str = "Alexa";
/// Namespace of discovery directives.
pub const NAMESPACE_DISCOVERY: &str = "Alexa.Discovery";
/// Namespace of scene activation responses.
pub const NAMESPACE_SCENE: &str = "Alexa.SceneController";
