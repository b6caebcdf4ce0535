//! `Alexa.Speaker`, `Alexa.StepSpeaker`, `Alexa.PlaybackController` and
//! `Alexa.InputController` for media players.

use voxbridge_domain::convert::{adjust_volume_level, volume_level_to_percent, volume_percent_to_level};
use voxbridge_domain::entity::AttributeError;
use voxbridge_domain::protocol::{DirectiveError, Interface, Property};
use voxbridge_domain::service::{
    SERVICE_MEDIA_NEXT_TRACK, SERVICE_MEDIA_PAUSE, SERVICE_MEDIA_PLAY, SERVICE_MEDIA_PREVIOUS_TRACK,
    SERVICE_MEDIA_STOP, SERVICE_SELECT_SOURCE, SERVICE_VOLUME_DOWN, SERVICE_VOLUME_MUTE,
    SERVICE_VOLUME_SET, SERVICE_VOLUME_UP, ServiceCall,
};

use super::{HandlerInput, Outcome, missing_attribute};
use crate::smart_home::attr;

const ATTR_SOURCE: &str = "source";

fn volume_outcome(input: &HandlerInput<'_>, level: f64) -> Outcome {
    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_VOLUME_SET).with(attr::VOLUME_LEVEL, level);
    Outcome::respond(call).with_property(Property::new(
        Interface::Speaker,
        "volume",
        volume_level_to_percent(level),
    ))
}

pub fn set_volume(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let volume = input.payload.require_i64("volume")?;
    if !(0..=100).contains(&volume) {
        return Err(DirectiveError::value_out_of_range(format!(
            "volume {volume} is outside 0..=100"
        )));
    }
    Ok(volume_outcome(input, volume_percent_to_level(volume)))
}

pub fn adjust_volume(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let delta = input.payload.require_i64("volume")?;
    let current = input
        .entity
        .attributes
        .require_f64(attr::VOLUME_LEVEL)
        .map_err(missing_attribute(input.entity))?;
    Ok(volume_outcome(input, adjust_volume_level(current, delta)))
}

fn mute_call(input: &HandlerInput<'_>) -> Result<(ServiceCall, bool), DirectiveError> {
    let mute = input.payload.require_bool("mute")?;
    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_VOLUME_MUTE).with(attr::IS_VOLUME_MUTED, mute);
    Ok((call, mute))
}

pub fn set_mute(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let (call, mute) = mute_call(input)?;
    Ok(Outcome::respond(call).with_property(Property::new(Interface::Speaker, "muted", mute)))
}

pub fn step_set_mute(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let (call, _) = mute_call(input)?;
    Ok(Outcome::respond(call))
}

pub fn step_adjust_volume(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let steps = input.payload.require_i64("volumeSteps")?;
    let service = match steps {
        0 => return Ok(Outcome::empty()),
        s if s > 0 => SERVICE_VOLUME_UP,
        _ => SERVICE_VOLUME_DOWN,
    };
    Ok(Outcome::respond(ServiceCall::new(&input.entity.entity_id, service)))
}

fn playback(input: &HandlerInput<'_>, service: &str) -> Result<Outcome, DirectiveError> {
    Ok(Outcome::respond(ServiceCall::new(&input.entity.entity_id, service)))
}

pub fn play(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    playback(input, SERVICE_MEDIA_PLAY)
}

pub fn pause(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    playback(input, SERVICE_MEDIA_PAUSE)
}

pub fn stop(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    playback(input, SERVICE_MEDIA_STOP)
}

pub fn next(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    playback(input, SERVICE_MEDIA_NEXT_TRACK)
}

pub fn previous(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    playback(input, SERVICE_MEDIA_PREVIOUS_TRACK)
}

/// Pick the first source whose normalized name appears in the requested input.
fn match_source<'a>(sources: &'a [String], requested: &str) -> Option<&'a str> {
    let requested = requested.to_lowercase();
    sources
        .iter()
        .find(|source| {
            let normalized = source.to_lowercase().replace(['-', '_'], " ");
            requested.contains(&normalized)
        })
        .map(String::as_str)
}

pub fn select_input(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let requested = input.payload.require_str("input")?;
    let sources = input
        .entity
        .attributes
        .str_list(attr::SOURCE_LIST)
        .ok_or_else(|| AttributeError::Missing(attr::SOURCE_LIST.to_string()))
        .map_err(missing_attribute(input.entity))?;
    let source = match_source(&sources, requested)
        .ok_or_else(|| DirectiveError::invalid_value(format!("unknown input {requested}")))?;
    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_SELECT_SOURCE).with(ATTR_SOURCE, source);
    Ok(Outcome::respond(call))
}
