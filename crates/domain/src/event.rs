//! Audit events: one immutable record per handled directive.

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::id::{ContextId, EventId};
use crate::time::{Timestamp, now};

/// Identity of whoever caused a request.
///
/// Carried into every [`ServiceCall`](crate::service::ServiceCall) dispatch
/// and every [`SmartHomeEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestContext {
    pub id: ContextId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl RequestContext {
    /// A fresh anonymous context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// The request half of an audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub namespace: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
}

/// The response half of an audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    pub namespace: String,
    pub name: String,
}

/// Record of one directive and the response it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartHomeEvent {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub request: RequestInfo,
    pub response: ResponseInfo,
    pub context: RequestContext,
    /// Internal failure detail for error responses; never sent to the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SmartHomeEvent {
    #[must_use]
    pub fn new(request: RequestInfo, response: ResponseInfo, context: RequestContext) -> Self {
        Self {
            id: EventId::new(),
            timestamp: now(),
            request,
            response,
            context,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
