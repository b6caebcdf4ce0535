//! How the virtual hub reacts to each service.

use serde_json::{Map, Value};

use voxbridge_domain::convert::{SPEED_OFF, percent_to_brightness};
use voxbridge_domain::entity::state::{
    STATE_CLOSED, STATE_IDLE, STATE_LOCKED, STATE_OFF, STATE_ON, STATE_OPEN, STATE_PAUSED,
    STATE_PLAYING, STATE_UNLOCKED,
};
use voxbridge_domain::entity::{Domain, HubEntity};
use voxbridge_domain::error::BridgeError;
use voxbridge_domain::service::{
    GENERIC_DOMAIN, SERVICE_CLOSE_COVER, SERVICE_LOCK, SERVICE_MEDIA_NEXT_TRACK,
    SERVICE_MEDIA_PAUSE, SERVICE_MEDIA_PLAY, SERVICE_MEDIA_PREVIOUS_TRACK, SERVICE_MEDIA_STOP,
    SERVICE_OPEN_COVER, SERVICE_SELECT_SOURCE, SERVICE_SET_COVER_POSITION,
    SERVICE_SET_OPERATION_MODE, SERVICE_SET_SPEED, SERVICE_SET_TEMPERATURE, SERVICE_TURN_OFF,
    SERVICE_TURN_ON, SERVICE_UNLOCK, SERVICE_VOLUME_DOWN, SERVICE_VOLUME_MUTE, SERVICE_VOLUME_SET,
    SERVICE_VOLUME_UP, ServiceCall,
};
use voxbridge_domain::time::now;

const VOLUME_STEP: f64 = 0.1;

/// Apply `call` to `entity`.
///
/// # Errors
///
/// Fails when the service does not exist for the entity's domain or its data
/// is unusable, the way a real hub rejects such calls.
pub fn apply(entity: &mut HubEntity, call: &ServiceCall) -> Result<(), BridgeError> {
    if call.domain != entity.entity_id.domain_str() && call.domain != GENERIC_DOMAIN {
        return Err(rejected(call, "domain does not match entity"));
    }

    let data = &call.data;
    match call.service.as_str() {
        SERVICE_TURN_ON => turn_on(entity, data),
        SERVICE_TURN_OFF => {
            if entity.domain() != Domain::Scene {
                set_state(entity, STATE_OFF);
            }
        }
        SERVICE_OPEN_COVER => {
            set_state(entity, STATE_OPEN);
            entity.attributes.insert("current_position", 100);
        }
        SERVICE_CLOSE_COVER => {
            set_state(entity, STATE_CLOSED);
            entity.attributes.insert("current_position", 0);
        }
        SERVICE_SET_COVER_POSITION => {
            let position = number(call, "position")?;
            #[allow(clippy::cast_possible_truncation)]
            let position = position.round() as i64;
            set_state(entity, if position > 0 { STATE_OPEN } else { STATE_CLOSED });
            entity.attributes.insert("current_position", position);
        }
        SERVICE_SET_SPEED => {
            let speed = text(call, "speed")?;
            set_state(entity, if speed == SPEED_OFF { STATE_OFF } else { STATE_ON });
            entity.attributes.insert("speed", speed);
        }
        SERVICE_SET_TEMPERATURE => {
            let mut updated = false;
            for key in ["temperature", "target_temp_low", "target_temp_high"] {
                if let Some(value) = data.get(key).and_then(Value::as_f64) {
                    entity.attributes.insert(key, value);
                    updated = true;
                }
            }
            if !updated {
                return Err(rejected(call, "no temperature given"));
            }
        }
        SERVICE_SET_OPERATION_MODE => {
            let mode = text(call, "operation_mode")?;
            set_state(entity, mode);
            entity.attributes.insert("operation_mode", mode);
        }
        SERVICE_LOCK => set_state(entity, STATE_LOCKED),
        SERVICE_UNLOCK => set_state(entity, STATE_UNLOCKED),
        SERVICE_VOLUME_SET => {
            let level = number(call, "volume_level")?;
            entity.attributes.insert("volume_level", level.clamp(0.0, 1.0));
        }
        SERVICE_VOLUME_UP | SERVICE_VOLUME_DOWN => {
            let step = if call.service == SERVICE_VOLUME_UP { VOLUME_STEP } else { -VOLUME_STEP };
            let level = entity.attributes.f64("volume_level").unwrap_or(0.0);
            entity.attributes.insert("volume_level", (level + step).clamp(0.0, 1.0));
        }
        SERVICE_VOLUME_MUTE => {
            let muted = data
                .get("is_volume_muted")
                .and_then(Value::as_bool)
                .ok_or_else(|| rejected(call, "is_volume_muted must be a boolean"))?;
            entity.attributes.insert("is_volume_muted", muted);
        }
        SERVICE_MEDIA_PLAY => set_state(entity, STATE_PLAYING),
        SERVICE_MEDIA_PAUSE => set_state(entity, STATE_PAUSED),
        SERVICE_MEDIA_STOP => set_state(entity, STATE_IDLE),
        SERVICE_MEDIA_NEXT_TRACK | SERVICE_MEDIA_PREVIOUS_TRACK => {}
        SERVICE_SELECT_SOURCE => {
            let source = text(call, "source")?;
            entity.attributes.insert("source", source);
        }
        _ => return Err(rejected(call, "unknown service")),
    }

    entity.last_updated = now();
    Ok(())
}

fn turn_on(entity: &mut HubEntity, data: &Map<String, Value>) {
    match entity.domain() {
        Domain::Scene => return,
        Domain::Light => {
            if let Some(percent) = data.get("brightness_pct").and_then(Value::as_i64) {
                entity.attributes.insert("brightness", percent_to_brightness(percent));
            }
            if let Some(mireds) = data.get("color_temp").and_then(Value::as_i64) {
                entity.attributes.insert("color_temp", mireds);
            }
            if let Some(rgb) = data.get("rgb_color") {
                entity.attributes.insert("rgb_color", rgb.clone());
            }
        }
        Domain::Fan => {
            if let Some(speed) = data.get("speed").and_then(Value::as_str) {
                entity.attributes.insert("speed", speed);
            }
        }
        _ => {}
    }
    set_state(entity, STATE_ON);
}

fn set_state(entity: &mut HubEntity, state: &str) {
    state.clone_into(&mut entity.state);
}

fn number(call: &ServiceCall, key: &str) -> Result<f64, BridgeError> {
    call.data
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| rejected(call, &format!("{key} must be a number")))
}

fn text<'a>(call: &'a ServiceCall, key: &str) -> Result<&'a str, BridgeError> {
    call.data
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| rejected(call, &format!("{key} must be a string")))
}

fn rejected(call: &ServiceCall, reason: &str) -> BridgeError {
    BridgeError::Collaborator(format!("{call} rejected: {reason}").into())
}
