//! Service dispatcher port: hand state changes to the hub.

use std::future::Future;

use voxbridge_domain::error::BridgeError;
use voxbridge_domain::event::RequestContext;
use voxbridge_domain::service::ServiceCall;

/// Executes service calls against the hub.
///
/// Implementations complete once the hub has accepted the call; the bridge
/// never retries a failed call.
pub trait ServiceDispatcher {
    fn call(
        &self,
        call: ServiceCall,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;
}

impl<T: ServiceDispatcher + Send + Sync> ServiceDispatcher for std::sync::Arc<T> {
    fn call(
        &self,
        call: ServiceCall,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send {
        (**self).call(call, context)
    }
}
