//! Smart-home directive dispatcher.
//!
//! [`SmartHome`] is the driving port: the transport hands it a raw JSON
//! message and gets back a [`Response`] to serialize. A message follows
//! `received → validated → resolved → executed → responded`; anything that
//! goes wrong after validation becomes an `ErrorResponse`, and every
//! directive produces one audit [`SmartHomeEvent`].

mod attr;
pub mod capabilities;
mod config;
mod handlers;
pub mod properties;

pub use config::{EntityOverrides, SmartHomeConfig};

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use voxbridge_domain::entity::{EntityId, HubEntity};
use voxbridge_domain::event::{RequestContext, RequestInfo, ResponseInfo, SmartHomeEvent};
use voxbridge_domain::protocol::{
    Directive, DirectiveError, DirectiveKind, Endpoint, ErrorKind, NAMESPACE_ALEXA,
    NAMESPACE_DISCOVERY, ProtocolError, Response,
};

use crate::ports::{EventPublisher, ServiceDispatcher, StateStore};
use handlers::{EntityHandler, HandlerInput, Route};

/// The directive dispatcher, generic over its three collaborators.
pub struct SmartHome<S, D, P> {
    store: S,
    dispatcher: D,
    publisher: P,
    config: Arc<SmartHomeConfig>,
}

impl<S, D, P> SmartHome<S, D, P>
where
    S: StateStore + Send + Sync,
    D: ServiceDispatcher + Send + Sync,
    P: EventPublisher + Send + Sync,
{
    pub fn new(store: S, dispatcher: D, publisher: P, config: SmartHomeConfig) -> Self {
        Self {
            store,
            dispatcher,
            publisher,
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SmartHomeConfig {
        &self.config
    }

    /// Handle one inbound message.
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolError`] when the message has no usable
    /// `directive.header` or its payload version is not `"3"`. Every other
    /// failure is reported inside the returned `ErrorResponse`.
    pub async fn handle_message(
        &self,
        message: &Value,
        context: RequestContext,
    ) -> Result<Response, ProtocolError> {
        debug!(request = %message, "smart home request");
        let directive = Directive::from_message(message)?;

        let entity_id = directive
            .endpoint_id()
            .and_then(|endpoint_id| endpoint_id.to_entity_id().ok());
        let (response, detail) = match self.execute(&directive, entity_id.as_ref(), &context).await {
            Ok(response) => (response, None),
            Err(err) => {
                info!(
                    namespace = directive.namespace(),
                    name = directive.name(),
                    error_type = %err.kind,
                    reason = %err.message,
                    "smart home error response"
                );
                (Response::error(&directive, &err), err.detail)
            }
        };

        self.audit(&directive, entity_id, &response, detail, context).await;
        debug!(
            response = %serde_json::to_string(&response).unwrap_or_default(),
            "smart home response"
        );
        Ok(response)
    }

    async fn execute(
        &self,
        directive: &Directive,
        entity_id: Option<&EntityId>,
        context: &RequestContext,
    ) -> Result<Response, DirectiveError> {
        let Some(kind) = DirectiveKind::parse(directive.namespace(), directive.name()) else {
            warn!(
                namespace = directive.namespace(),
                name = directive.name(),
                "unsupported directive"
            );
            return Err(DirectiveError::internal(format!(
                "unsupported directive {}/{}",
                directive.namespace(),
                directive.name()
            )));
        };

        match handlers::route(kind) {
            Route::Discover => self.discover(directive).await,
            Route::ReportState => {
                let (entity, endpoint) = self.resolve(directive, entity_id).await?;
                let properties = properties::retrievable(&entity, &endpoint, self.config.temperature_unit);
                Ok(Response::reply(directive, NAMESPACE_ALEXA, "StateReport").with_properties(properties))
            }
            Route::Entity(handler) => {
                let (entity, endpoint) = self.resolve(directive, entity_id).await?;
                self.run_handler(directive, kind, handler, &entity, &endpoint, context)
                    .await
            }
        }
    }

    async fn discover(&self, directive: &Directive) -> Result<Response, DirectiveError> {
        let entities = self.store.all().await.map_err(|err| {
            error!(error = ?err, "failed to read entities for discovery");
            DirectiveError::internal(format!("state store failed: {err}"))
        })?;

        let endpoints: Vec<Endpoint> = entities
            .iter()
            .filter(|entity| self.config.policy.should_expose(&entity.entity_id))
            .filter_map(|entity| {
                capabilities::build_endpoint(entity, self.config.overrides(&entity.entity_id))
            })
            .collect();
        debug!(count = endpoints.len(), "discovered endpoints");

        let endpoints = serde_json::to_value(&endpoints)
            .map_err(|err| DirectiveError::internal(format!("cannot serialize endpoints: {err}")))?;
        let mut payload = Map::new();
        payload.insert("endpoints".to_string(), endpoints);
        Ok(Response::reply(directive, NAMESPACE_DISCOVERY, "Discover.Response").with_payload(payload))
    }

    /// Look up the targeted entity and build its endpoint.
    async fn resolve(
        &self,
        directive: &Directive,
        entity_id: Option<&EntityId>,
    ) -> Result<(HubEntity, Endpoint), DirectiveError> {
        let endpoint_id = directive
            .endpoint_id()
            .ok_or_else(|| DirectiveError::invalid_directive("directive has no endpoint"))?;
        let not_found = || DirectiveError::no_such_endpoint(endpoint_id.as_str());

        let entity_id = entity_id.ok_or_else(not_found)?;
        if !self.config.policy.should_expose(entity_id) {
            debug!(%entity_id, "entity hidden by exposure policy");
            return Err(not_found());
        }

        let entity = self
            .store
            .get(entity_id)
            .await
            .map_err(|err| {
                error!(%entity_id, error = ?err, "failed to read entity");
                DirectiveError::internal(format!("state store failed: {err}"))
            })?
            .ok_or_else(not_found)?;
        let endpoint = capabilities::build_endpoint(&entity, self.config.overrides(entity_id))
            .ok_or_else(not_found)?;
        Ok((entity, endpoint))
    }

    async fn run_handler(
        &self,
        directive: &Directive,
        kind: DirectiveKind,
        handler: EntityHandler,
        entity: &HubEntity,
        endpoint: &Endpoint,
        context: &RequestContext,
    ) -> Result<Response, DirectiveError> {
        if !endpoint.interfaces().into_iter().any(|interface| interface.accepts(kind)) {
            return Err(DirectiveError::invalid_directive(format!(
                "{} does not support {kind}",
                entity.entity_id
            )));
        }

        let input = HandlerInput {
            entity,
            payload: &directive.payload,
            unit: self.config.temperature_unit,
        };
        let outcome = handler(&input).inspect_err(|err| {
            if err.kind == ErrorKind::InternalError {
                error!(
                    entity_id = %entity.entity_id,
                    directive = %kind,
                    detail = err.detail.as_deref().unwrap_or_default(),
                    "handler fault"
                );
            }
        })?;

        if let Some(call) = outcome.call {
            let data = Value::Object(call.data.clone());
            debug!(%call, %data, "dispatching service call");
            let name = call.qualified_name();
            self.dispatcher.call(call, context).await.map_err(|err| {
                error!(service = %name, error = ?err, "service call failed");
                DirectiveError::internal(format!("service call {name} failed: {err}"))
            })?;
        }

        let mut properties = outcome.properties;
        for reading in properties::proactive(entity, endpoint, self.config.temperature_unit) {
            if !properties.iter().any(|existing| existing.same_key(&reading)) {
                properties.push(reading);
            }
        }

        Ok(Response::reply(directive, outcome.namespace, outcome.name)
            .with_payload(outcome.payload)
            .with_properties(properties))
    }

    async fn audit(
        &self,
        directive: &Directive,
        entity_id: Option<EntityId>,
        response: &Response,
        detail: Option<String>,
        context: RequestContext,
    ) {
        let mut event = SmartHomeEvent::new(
            RequestInfo {
                namespace: directive.namespace().to_string(),
                name: directive.name().to_string(),
                entity_id,
            },
            ResponseInfo {
                namespace: response.namespace().to_string(),
                name: response.name().to_string(),
            },
            context,
        );
        event.detail = detail;
        if let Err(err) = self.publisher.publish(event).await {
            warn!(error = ?err, "failed to publish smart home event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    use serde_json::json;
    use voxbridge_domain::entity::{ATTR_FRIENDLY_NAME, ATTR_SUPPORTED_FEATURES};
    use voxbridge_domain::error::BridgeError;
    use voxbridge_domain::filter::{ExposurePolicy, FilterConfig};
    use voxbridge_domain::service::ServiceCall;
    use voxbridge_domain::temperature::TemperatureUnit;

    use crate::event_bus::InProcessEventBus;

    #[derive(Default)]
    struct InMemoryStore {
        entities: Mutex<HashMap<EntityId, HubEntity>>,
    }

    impl InMemoryStore {
        fn with(entities: Vec<HubEntity>) -> Self {
            let store = Self::default();
            {
                let mut map = store.entities.lock().unwrap();
                for entity in entities {
                    map.insert(entity.entity_id.clone(), entity);
                }
            }
            store
        }
    }

    impl StateStore for InMemoryStore {
        fn get(
            &self,
            entity_id: &EntityId,
        ) -> impl Future<Output = Result<Option<HubEntity>, BridgeError>> + Send {
            let result = self.entities.lock().unwrap().get(entity_id).cloned();
            async { Ok(result) }
        }

        fn all(&self) -> impl Future<Output = Result<Vec<HubEntity>, BridgeError>> + Send {
            let mut result: Vec<HubEntity> = self.entities.lock().unwrap().values().cloned().collect();
            result.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
            async { Ok(result) }
        }
    }

    #[derive(Default)]
    struct RecordingDispatcher {
        calls: Mutex<Vec<ServiceCall>>,
        fail: bool,
    }

    impl ServiceDispatcher for RecordingDispatcher {
        fn call(
            &self,
            call: ServiceCall,
            _context: &RequestContext,
        ) -> impl Future<Output = Result<(), BridgeError>> + Send {
            self.calls.lock().unwrap().push(call);
            let fail = self.fail;
            async move {
                if fail {
                    Err(BridgeError::Collaborator("hub offline".into()))
                } else {
                    Ok(())
                }
            }
        }
    }

    type TestHome = SmartHome<Arc<InMemoryStore>, Arc<RecordingDispatcher>, Arc<InProcessEventBus>>;

    struct Fixture {
        home: TestHome,
        dispatcher: Arc<RecordingDispatcher>,
        bus: Arc<InProcessEventBus>,
    }

    fn fixture_with(entities: Vec<HubEntity>, config: SmartHomeConfig, fail: bool) -> Fixture {
        let store = Arc::new(InMemoryStore::with(entities));
        let dispatcher = Arc::new(RecordingDispatcher {
            fail,
            ..RecordingDispatcher::default()
        });
        let bus = Arc::new(InProcessEventBus::new(16));
        Fixture {
            home: SmartHome::new(store, Arc::clone(&dispatcher), Arc::clone(&bus), config),
            dispatcher,
            bus,
        }
    }

    fn fixture(entities: Vec<HubEntity>) -> Fixture {
        fixture_with(entities, SmartHomeConfig::default(), false)
    }

    fn entity(id: &str, state: &str, attrs: &[(&str, Value)]) -> HubEntity {
        attrs
            .iter()
            .fold(HubEntity::builder().entity_id(id).state(state), |b, (k, v)| {
                b.attribute(*k, v.clone())
            })
            .build()
            .unwrap()
    }

    fn test_switch() -> HubEntity {
        entity("switch.test", "off", &[(ATTR_FRIENDLY_NAME, json!("Test switch"))])
    }

    fn message(namespace: &str, name: &str, endpoint: Option<&str>, payload: Value) -> Value {
        let mut directive = json!({
            "header": {
                "namespace": namespace,
                "name": name,
                "messageId": "5f8a426e-01e4-4cc9-8b79-65f8bd0fd8a4",
                "correlationToken": "dFMb0z+PgpgdDmluhJ1LddFvSqZ/jCc8ptlAKulUj90jSqg==",
                "payloadVersion": "3"
            },
            "payload": payload
        });
        if let Some(endpoint_id) = endpoint {
            directive["endpoint"] = json!({
                "scope": {"type": "BearerToken", "token": "some-access-token"},
                "endpointId": endpoint_id,
                "cookie": {}
            });
        }
        json!({ "directive": directive })
    }

    async fn send(home: &TestHome, message: &Value) -> Value {
        let response = home.handle_message(message, RequestContext::new()).await.unwrap();
        serde_json::to_value(response).unwrap()
    }

    async fn discover(home: &TestHome) -> Vec<Value> {
        let msg = message("Alexa.Discovery", "Discover", None, json!({"scope": {"type": "BearerToken"}}));
        let response = send(home, &msg).await;
        assert_eq!(response["event"]["header"]["name"], "Discover.Response");
        assert_eq!(response["event"]["header"]["namespace"], "Alexa.Discovery");
        response["event"]["payload"]["endpoints"].as_array().unwrap().clone()
    }

    #[tokio::test]
    async fn should_discover_switch() {
        let fx = fixture(vec![test_switch()]);
        let endpoints = discover(&fx.home).await;
        assert_eq!(endpoints.len(), 1);
        let switch = &endpoints[0];
        assert_eq!(switch["endpointId"], "switch#test");
        assert_eq!(switch["friendlyName"], "Test switch");
        assert_eq!(switch["description"], "switch.test");
        assert_eq!(switch["manufacturerName"], "voxbridge");
        assert_eq!(switch["displayCategories"], json!(["SWITCH"]));
        assert_eq!(switch["capabilities"][0]["interface"], "Alexa.PowerController");
        assert_eq!(switch["capabilities"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_discover_light_capabilities_from_features() {
        let light = entity("light.test", "on", &[(ATTR_SUPPORTED_FEATURES, json!(19))]);
        let fx = fixture(vec![light, entity("zone.home", "zoning", &[])]);
        let endpoints = discover(&fx.home).await;
        assert_eq!(endpoints.len(), 1);
        let interfaces: Vec<&str> = endpoints[0]["capabilities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|cap| cap["interface"].as_str().unwrap())
            .collect();
        assert_eq!(
            interfaces,
            vec![
                "Alexa.PowerController",
                "Alexa.BrightnessController",
                "Alexa.ColorController",
                "Alexa.ColorTemperatureController",
            ]
        );
    }

    #[tokio::test]
    async fn should_discover_only_exposed_entities() {
        let config = SmartHomeConfig {
            policy: ExposurePolicy::new(&FilterConfig {
                exclude_domains: vec!["script".to_string()],
                exclude_entities: vec!["cover.deny".to_string()],
                ..FilterConfig::default()
            }),
            ..SmartHomeConfig::default()
        };
        let fx = fixture_with(
            vec![
                test_switch(),
                entity("script.deny", "off", &[]),
                entity("cover.deny", "open", &[]),
            ],
            config,
            false,
        );
        let endpoints = discover(&fx.home).await;
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0]["endpointId"], "switch#test");
    }

    #[tokio::test]
    async fn should_apply_entity_overrides_in_discovery() {
        let mut entity_config = HashMap::new();
        entity_config.insert(
            "switch.test".to_string(),
            EntityOverrides {
                name: Some("Config name".to_string()),
                description: Some("Config description".to_string()),
                display_categories: Some(voxbridge_domain::protocol::DisplayCategory::Light),
            },
        );
        let config = SmartHomeConfig {
            entity_config,
            ..SmartHomeConfig::default()
        };
        let fx = fixture_with(vec![test_switch()], config, false);
        let endpoints = discover(&fx.home).await;
        assert_eq!(endpoints[0]["friendlyName"], "Config name");
        assert_eq!(endpoints[0]["description"], "Config description");
        assert_eq!(endpoints[0]["displayCategories"], json!(["LIGHT"]));
    }

    #[tokio::test]
    async fn should_turn_on_switch() {
        let fx = fixture(vec![test_switch()]);
        let msg = message("Alexa.PowerController", "TurnOn", Some("switch#test"), json!({}));
        let response = send(&fx.home, &msg).await;

        let calls = fx.dispatcher.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].qualified_name(), "switch.turn_on");
        assert_eq!(calls[0].entity_id.as_str(), "switch.test");

        let header = &response["event"]["header"];
        assert_eq!(header["namespace"], "Alexa");
        assert_eq!(header["name"], "Response");
        assert_eq!(header["payloadVersion"], "3");
        assert_eq!(header["correlationToken"], msg["directive"]["header"]["correlationToken"]);
        assert_ne!(header["messageId"], msg["directive"]["header"]["messageId"]);
        assert_eq!(response["event"]["endpoint"]["endpointId"], "switch#test");
        assert_eq!(response["event"]["endpoint"]["scope"]["type"], "BearerToken");

        let properties = response["context"]["properties"].as_array().unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0]["namespace"], "Alexa.PowerController");
        assert_eq!(properties[0]["name"], "powerState");
        assert_eq!(properties[0]["value"], "ON");
    }

    #[tokio::test]
    async fn should_reject_wrong_payload_version() {
        let fx = fixture(vec![test_switch()]);
        let mut msg = message("Alexa.PowerController", "TurnOn", Some("switch#test"), json!({}));
        msg["directive"]["header"]["payloadVersion"] = json!("2");
        let result = fx.home.handle_message(&msg, RequestContext::new()).await;
        assert_eq!(
            result.unwrap_err(),
            ProtocolError::UnsupportedPayloadVersion("2".to_string())
        );
        assert!(fx.dispatcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_answer_unknown_directive_with_internal_error() {
        let fx = fixture(vec![test_switch()]);
        let mut rx = fx.bus.subscribe();
        let msg = message("Alexa.HAHAAH", "Sweet", Some("switch#test"), json!({}));
        let response = send(&fx.home, &msg).await;

        assert_eq!(response["event"]["header"]["name"], "ErrorResponse");
        assert_eq!(response["event"]["header"]["namespace"], "Alexa");
        assert_eq!(response["event"]["payload"]["type"], "INTERNAL_ERROR");

        let event = rx.recv().await.unwrap();
        assert_eq!(event.request.namespace, "Alexa.HAHAAH");
        assert_eq!(event.response.name, "ErrorResponse");
        assert!(event.detail.unwrap().contains("unsupported directive"));
    }

    #[tokio::test]
    async fn should_answer_missing_entity_with_no_such_endpoint() {
        let fx = fixture(vec![]);
        let msg = message("Alexa.PowerController", "TurnOn", Some("switch#missing"), json!({}));
        let response = send(&fx.home, &msg).await;
        assert_eq!(response["event"]["payload"]["type"], "NO_SUCH_ENDPOINT");
        assert!(response.get("context").is_none());
    }

    #[tokio::test]
    async fn should_hide_filtered_entities_from_directives() {
        let config = SmartHomeConfig {
            policy: ExposurePolicy::new(&FilterConfig {
                exclude_entities: vec!["switch.test".to_string()],
                ..FilterConfig::default()
            }),
            ..SmartHomeConfig::default()
        };
        let fx = fixture_with(vec![test_switch()], config, false);
        let msg = message("Alexa.PowerController", "TurnOn", Some("switch#test"), json!({}));
        let response = send(&fx.home, &msg).await;
        assert_eq!(response["event"]["payload"]["type"], "NO_SUCH_ENDPOINT");
        assert!(fx.dispatcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_directive_for_undeclared_interface() {
        let fx = fixture(vec![test_switch()]);
        let msg = message(
            "Alexa.BrightnessController",
            "SetBrightness",
            Some("switch#test"),
            json!({"brightness": 50}),
        );
        let response = send(&fx.home, &msg).await;
        assert_eq!(response["event"]["payload"]["type"], "INVALID_DIRECTIVE");
        assert!(fx.dispatcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_failed_service_call_as_internal_error() {
        let fx = fixture_with(vec![test_switch()], SmartHomeConfig::default(), true);
        let msg = message("Alexa.PowerController", "TurnOff", Some("switch#test"), json!({}));
        let response = send(&fx.home, &msg).await;
        assert_eq!(response["event"]["payload"]["type"], "INTERNAL_ERROR");
        assert_eq!(fx.dispatcher.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_report_state_of_thermostat() {
        let climate = entity(
            "climate.hall",
            "heat",
            &[
                (ATTR_SUPPORTED_FEATURES, json!(129)),
                ("operation_mode", json!("heat")),
                ("temperature", json!(21.5)),
                ("current_temperature", json!(20)),
            ],
        );
        let fx = fixture(vec![climate]);
        let msg = message("Alexa", "ReportState", Some("climate#hall"), json!({}));
        let response = send(&fx.home, &msg).await;

        assert_eq!(response["event"]["header"]["name"], "StateReport");
        let properties = response["context"]["properties"].as_array().unwrap();
        let names: Vec<&str> = properties.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["thermostatMode", "targetSetpoint", "temperature"]);
        assert_eq!(properties[0]["value"], "HEAT");
        assert_eq!(properties[1]["value"], json!({"value": 21.5, "scale": "CELSIUS"}));
        assert!(fx.dispatcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_append_proactive_readings_to_context() {
        let climate = entity(
            "climate.hall",
            "cool",
            &[
                (ATTR_SUPPORTED_FEATURES, json!(129)),
                ("operation_list", json!(["heat", "cool", "off"])),
                ("current_temperature", json!(77)),
            ],
        );
        let config = SmartHomeConfig {
            temperature_unit: TemperatureUnit::Fahrenheit,
            ..SmartHomeConfig::default()
        };
        let fx = fixture_with(vec![climate], config, false);
        let msg = message(
            "Alexa.ThermostatController",
            "SetThermostatMode",
            Some("climate#hall"),
            json!({"thermostatMode": {"value": "HEAT"}}),
        );
        let response = send(&fx.home, &msg).await;

        let properties = response["context"]["properties"].as_array().unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0]["name"], "thermostatMode");
        assert_eq!(properties[0]["value"], "HEAT");
        assert_eq!(properties[1]["namespace"], "Alexa.TemperatureSensor");
        assert_eq!(properties[1]["value"], json!({"value": 77.0, "scale": "FAHRENHEIT"}));
    }

    #[tokio::test]
    async fn should_activate_scene() {
        let fx = fixture(vec![entity("scene.movie", "scening", &[])]);
        let msg = message("Alexa.SceneController", "Activate", Some("scene#movie"), json!({}));
        let response = send(&fx.home, &msg).await;

        assert_eq!(response["event"]["header"]["namespace"], "Alexa.SceneController");
        assert_eq!(response["event"]["header"]["name"], "ActivationStarted");
        assert_eq!(response["event"]["payload"]["cause"]["type"], "VOICE_INTERACTION");
        assert_eq!(fx.dispatcher.calls.lock().unwrap()[0].qualified_name(), "scene.turn_on");
    }

    #[tokio::test]
    async fn should_publish_audit_event_for_directive() {
        let fx = fixture(vec![test_switch()]);
        let mut rx = fx.bus.subscribe();
        let context = RequestContext::new().with_user("user-1");
        let msg = message("Alexa.PowerController", "TurnOn", Some("switch#test"), json!({}));
        fx.home.handle_message(&msg, context.clone()).await.unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.request.namespace, "Alexa.PowerController");
        assert_eq!(event.request.name, "TurnOn");
        assert_eq!(event.request.entity_id.unwrap().as_str(), "switch.test");
        assert_eq!(event.response.namespace, "Alexa");
        assert_eq!(event.response.name, "Response");
        assert_eq!(event.context, context);
        assert!(event.detail.is_none());
    }

    #[tokio::test]
    async fn should_publish_audit_event_without_entity_for_discovery() {
        let fx = fixture(vec![test_switch()]);
        let mut rx = fx.bus.subscribe();
        discover(&fx.home).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.request.name, "Discover");
        assert!(event.request.entity_id.is_none());
        assert_eq!(event.response.name, "Discover.Response");
    }
}
