//! Event bus port: publish audit events.

use std::future::Future;

use voxbridge_domain::error::BridgeError;
use voxbridge_domain::event::SmartHomeEvent;

/// Publishes audit events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: SmartHomeEvent) -> impl Future<Output = Result<(), BridgeError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: SmartHomeEvent) -> impl Future<Output = Result<(), BridgeError>> + Send {
        (**self).publish(event)
    }
}
