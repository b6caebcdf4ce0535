//! `Alexa.SceneController` for scenes and scripts.

use serde_json::{Map, Value, json};

use voxbridge_domain::entity::Domain;
use voxbridge_domain::protocol::{DirectiveError, NAMESPACE_SCENE};
use voxbridge_domain::service::{SERVICE_TURN_OFF, SERVICE_TURN_ON, ServiceCall};
use voxbridge_domain::time::{now, to_protocol_string};

use super::{HandlerInput, Outcome};

fn started_payload() -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("cause".to_string(), json!({"type": "VOICE_INTERACTION"}));
    payload.insert("timestamp".to_string(), Value::from(to_protocol_string(now())));
    payload
}

pub fn activate(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    Ok(Outcome::respond(ServiceCall::new(&input.entity.entity_id, SERVICE_TURN_ON))
        .named(NAMESPACE_SCENE, "ActivationStarted")
        .with_payload(started_payload()))
}

pub fn deactivate(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    if input.entity.domain() != Domain::Script {
        return Err(DirectiveError::invalid_directive(format!(
            "{} cannot be deactivated",
            input.entity.entity_id
        )));
    }
    Ok(Outcome::respond(ServiceCall::new(&input.entity.entity_id, SERVICE_TURN_OFF))
        .named(NAMESPACE_SCENE, "DeactivationStarted")
        .with_payload(started_payload()))
}
