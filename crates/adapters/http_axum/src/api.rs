//! Smart-home directive endpoint.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use voxbridge_app::ports::{EventPublisher, ServiceDispatcher, StateStore};
use voxbridge_domain::event::RequestContext;
use voxbridge_domain::protocol::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Routes mounted under `/api`.
pub fn routes<S, D, P>() -> Router<AppState<S, D, P>>
where
    S: StateStore + Send + Sync + 'static,
    D: ServiceDispatcher + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Router::new().route("/alexa/smart_home", post(handle_directive::<S, D, P>))
}

/// `POST /api/alexa/smart_home`: dispatch one directive message.
async fn handle_directive<S, D, P>(
    State(state): State<AppState<S, D, P>>,
    Json(message): Json<Value>,
) -> Result<Json<Response>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    D: ServiceDispatcher + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let response = state
        .smart_home
        .handle_message(&message, RequestContext::new())
        .await?;
    Ok(Json(response))
}
