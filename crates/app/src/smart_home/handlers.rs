//! Capability handlers and the directive routing table.
//!
//! Handlers are pure: they read an entity snapshot and the directive
//! payload and return an [`Outcome`] (at most one service call plus what to
//! answer) or a [`DirectiveError`]. The dispatcher performs the call.

pub(crate) mod brightness;
pub(crate) mod color;
pub(crate) mod lock;
pub(crate) mod media;
pub(crate) mod percentage;
pub(crate) mod power;
pub(crate) mod scene;
pub(crate) mod thermostat;

use serde_json::{Map, Value};

use voxbridge_domain::entity::{AttributeError, HubEntity};
use voxbridge_domain::protocol::{DirectiveError, DirectiveKind, NAMESPACE_ALEXA, Payload, Property};
use voxbridge_domain::service::ServiceCall;
use voxbridge_domain::temperature::TemperatureUnit;

/// Everything a handler may look at.
pub struct HandlerInput<'a> {
    pub entity: &'a HubEntity,
    pub payload: &'a Payload,
    pub unit: TemperatureUnit,
}

/// What a handler decided.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub call: Option<ServiceCall>,
    pub namespace: &'static str,
    pub name: &'static str,
    pub payload: Map<String, Value>,
    pub properties: Vec<Property>,
}

impl Outcome {
    /// A plain `Alexa / Response` carrying `call`.
    #[must_use]
    pub fn respond(call: ServiceCall) -> Self {
        Self {
            call: Some(call),
            ..Self::empty()
        }
    }

    /// A plain `Alexa / Response` with nothing to execute.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            call: None,
            namespace: NAMESPACE_ALEXA,
            name: "Response",
            payload: Map::new(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn named(mut self, namespace: &'static str, name: &'static str) -> Self {
        self.namespace = namespace;
        self.name = name;
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }
}

pub type EntityHandler = fn(&HandlerInput<'_>) -> Result<Outcome, DirectiveError>;

/// How the dispatcher treats a directive.
pub enum Route {
    Discover,
    ReportState,
    Entity(EntityHandler),
}

/// The routing table.
#[must_use]
pub fn route(kind: DirectiveKind) -> Route {
    match kind {
        DirectiveKind::Discover => Route::Discover,
        DirectiveKind::ReportState => Route::ReportState,
        DirectiveKind::TurnOn => Route::Entity(power::turn_on),
        DirectiveKind::TurnOff => Route::Entity(power::turn_off),
        DirectiveKind::SetBrightness => Route::Entity(brightness::set_brightness),
        DirectiveKind::AdjustBrightness => Route::Entity(brightness::adjust_brightness),
        DirectiveKind::SetColor => Route::Entity(color::set_color),
        DirectiveKind::SetColorTemperature => Route::Entity(color::set_color_temperature),
        DirectiveKind::IncreaseColorTemperature => Route::Entity(color::increase_color_temperature),
        DirectiveKind::DecreaseColorTemperature => Route::Entity(color::decrease_color_temperature),
        DirectiveKind::SetPercentage => Route::Entity(percentage::set_percentage),
        DirectiveKind::AdjustPercentage => Route::Entity(percentage::adjust_percentage),
        DirectiveKind::SetTargetTemperature => Route::Entity(thermostat::set_target_temperature),
        DirectiveKind::AdjustTargetTemperature => Route::Entity(thermostat::adjust_target_temperature),
        DirectiveKind::SetThermostatMode => Route::Entity(thermostat::set_thermostat_mode),
        DirectiveKind::Lock => Route::Entity(lock::lock),
        DirectiveKind::Unlock => Route::Entity(lock::unlock),
        DirectiveKind::Activate => Route::Entity(scene::activate),
        DirectiveKind::Deactivate => Route::Entity(scene::deactivate),
        DirectiveKind::SetVolume => Route::Entity(media::set_volume),
        DirectiveKind::AdjustVolume => Route::Entity(media::adjust_volume),
        DirectiveKind::SetMute => Route::Entity(media::set_mute),
        DirectiveKind::StepAdjustVolume => Route::Entity(media::step_adjust_volume),
        DirectiveKind::StepSetMute => Route::Entity(media::step_set_mute),
        DirectiveKind::Play => Route::Entity(media::play),
        DirectiveKind::Pause => Route::Entity(media::pause),
        DirectiveKind::Stop => Route::Entity(media::stop),
        DirectiveKind::Next => Route::Entity(media::next),
        DirectiveKind::Previous => Route::Entity(media::previous),
        DirectiveKind::SelectInput => Route::Entity(media::select_input),
    }
}

/// Wrap a missing or unusable attribute as an internal fault.
pub(crate) fn missing_attribute(
    entity: &HubEntity,
) -> impl Fn(AttributeError) -> DirectiveError + '_ {
    move |err| DirectiveError::missing_attribute(&entity.entity_id, &err)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_route_discovery_and_report_state_to_dispatcher() {
        assert!(matches!(route(DirectiveKind::Discover), Route::Discover));
        assert!(matches!(route(DirectiveKind::ReportState), Route::ReportState));
    }

    #[test]
    fn should_route_every_other_directive_to_an_entity_handler() {
        let entity_routes = DirectiveKind::ALL
            .into_iter()
            .filter(|kind| matches!(route(*kind), Route::Entity(_)))
            .count();
        assert_eq!(entity_routes, DirectiveKind::ALL.len() - 2);
    }
}
