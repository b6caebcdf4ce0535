//! Shared application state for axum handlers.

use std::sync::Arc;

use voxbridge_app::ports::{EventPublisher, ServiceDispatcher, StateStore};
use voxbridge_app::smart_home::SmartHome;

/// State handed to the smart-home handlers.
///
/// Generic over the dispatcher's collaborators to avoid dynamic dispatch.
/// `Clone` is implemented manually so the collaborators themselves do not
/// need to be `Clone`.
pub struct AppState<S, D, P> {
    pub smart_home: Arc<SmartHome<S, D, P>>,
}

impl<S, D, P> Clone for AppState<S, D, P> {
    fn clone(&self) -> Self {
        Self {
            smart_home: Arc::clone(&self.smart_home),
        }
    }
}

impl<S, D, P> AppState<S, D, P>
where
    S: StateStore + Send + Sync + 'static,
    D: ServiceDispatcher + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    pub fn new(smart_home: SmartHome<S, D, P>) -> Self {
        Self::from_arc(Arc::new(smart_home))
    }

    /// Use this when the dispatcher is shared with other tasks.
    pub fn from_arc(smart_home: Arc<SmartHome<S, D, P>>) -> Self {
        Self { smart_home }
    }
}
