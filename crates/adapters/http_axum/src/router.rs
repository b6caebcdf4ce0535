//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use voxbridge_app::ports::{EventPublisher, ServiceDispatcher, StateStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `GET /health` is always served. The smart-home routes are nested under
/// `/api` only when `state` is present, i.e. when the bridge is enabled.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, D, P>(state: Option<AppState<S, D, P>>) -> Router
where
    S: StateStore + Send + Sync + 'static,
    D: ServiceDispatcher + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let router = Router::new().route("/health", get(health_check));
    let router = match state {
        Some(state) => router.nest("/api", crate::api::routes().with_state(state)),
        None => {
            tracing::info!("smart home bridge disabled, directive route not mounted");
            router
        }
    };
    router.layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use voxbridge_app::smart_home::{SmartHome, SmartHomeConfig};
    use voxbridge_domain::entity::{EntityId, HubEntity};
    use voxbridge_domain::error::BridgeError;
    use voxbridge_domain::event::{RequestContext, SmartHomeEvent};
    use voxbridge_domain::service::ServiceCall;

    struct StubStore;
    struct StubDispatcher;
    struct StubPublisher;

    fn test_switch() -> HubEntity {
        HubEntity::builder()
            .entity_id("switch.test")
            .state("off")
            .attribute("friendly_name", "Test switch")
            .build()
            .unwrap()
    }

    impl StateStore for StubStore {
        fn get(
            &self,
            entity_id: &EntityId,
        ) -> impl Future<Output = Result<Option<HubEntity>, BridgeError>> + Send {
            let found = (entity_id.as_str() == "switch.test").then(test_switch);
            async { Ok(found) }
        }

        fn all(&self) -> impl Future<Output = Result<Vec<HubEntity>, BridgeError>> + Send {
            async { Ok(vec![test_switch()]) }
        }
    }

    impl ServiceDispatcher for StubDispatcher {
        fn call(
            &self,
            _call: ServiceCall,
            _context: &RequestContext,
        ) -> impl Future<Output = Result<(), BridgeError>> + Send {
            async { Ok(()) }
        }
    }

    impl EventPublisher for StubPublisher {
        fn publish(&self, _event: SmartHomeEvent) -> impl Future<Output = Result<(), BridgeError>> + Send {
            async { Ok(()) }
        }
    }

    fn test_state() -> AppState<StubStore, StubDispatcher, StubPublisher> {
        AppState::new(SmartHome::new(
            StubStore,
            StubDispatcher,
            StubPublisher,
            SmartHomeConfig::default(),
        ))
    }

    fn directive_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/alexa/smart_home")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn discover_message(payload_version: &str) -> Value {
        json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.Discovery",
                    "name": "Discover",
                    "messageId": "msg-1",
                    "payloadVersion": payload_version
                },
                "payload": {}
            }
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(Some(test_state()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_answer_discovery_directive() {
        let app = build(Some(test_state()));
        let response = app.oneshot(directive_request(&discover_message("3"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["event"]["header"]["name"], "Discover.Response");
        assert_eq!(json["event"]["payload"]["endpoints"][0]["endpointId"], "switch#test");
    }

    #[tokio::test]
    async fn should_return_error_response_inside_ok_status() {
        let app = build(Some(test_state()));
        let message = json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.PowerController",
                    "name": "TurnOn",
                    "messageId": "msg-2",
                    "payloadVersion": "3"
                },
                "endpoint": {"endpointId": "switch#missing"},
                "payload": {}
            }
        });
        let response = app.oneshot(directive_request(&message)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["event"]["payload"]["type"], "NO_SUCH_ENDPOINT");
    }

    #[tokio::test]
    async fn should_reject_unsupported_payload_version() {
        let app = build(Some(test_state()));
        let response = app.oneshot(directive_request(&discover_message("2"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("payload version"));
    }

    #[tokio::test]
    async fn should_reject_message_without_directive() {
        let app = build(Some(test_state()));
        let response = app.oneshot(directive_request(&json!({"hello": "world"}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_not_mount_directive_route_when_disabled() {
        let app = build::<StubStore, StubDispatcher, StubPublisher>(None);
        let response = app.oneshot(directive_request(&discover_message("3"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
