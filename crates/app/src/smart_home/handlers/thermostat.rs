//! `Alexa.ThermostatController`.

use serde_json::Value;

use voxbridge_domain::protocol::{DirectiveError, Interface, Property};
use voxbridge_domain::service::{SERVICE_SET_OPERATION_MODE, SERVICE_SET_TEMPERATURE, ServiceCall};
use voxbridge_domain::temperature::{
    DEFAULT_MAX_TEMP_CELSIUS, DEFAULT_MIN_TEMP_CELSIUS, Temperature, TemperatureUnit,
};

use super::{HandlerInput, Outcome, missing_attribute};
use crate::smart_home::attr;

/// Hub operation modes and the protocol mode each one reports as.
///
/// Order matters when several hub modes share a protocol mode: the first one
/// the entity supports is chosen.
const MODES: [(&str, &str); 8] = [
    ("heat", "HEAT"),
    ("cool", "COOL"),
    ("auto", "AUTO"),
    ("eco", "ECO"),
    ("off", "OFF"),
    ("idle", "OFF"),
    ("fan_only", "OFF"),
    ("dry", "OFF"),
];

/// Protocol mode for a hub operation mode.
pub(crate) fn protocol_mode(hub_mode: &str) -> Option<&'static str> {
    MODES
        .iter()
        .find(|(hub, _)| *hub == hub_mode)
        .map(|(_, protocol)| *protocol)
}

/// Allowed setpoints in the hub unit.
struct Bounds {
    min: f64,
    max: f64,
    unit: TemperatureUnit,
}

impl Bounds {
    fn of(input: &HandlerInput<'_>) -> Self {
        let attrs = &input.entity.attributes;
        Self {
            min: attrs
                .f64(attr::MIN_TEMP)
                .unwrap_or_else(|| input.unit.from_celsius(DEFAULT_MIN_TEMP_CELSIUS)),
            max: attrs
                .f64(attr::MAX_TEMP)
                .unwrap_or_else(|| input.unit.from_celsius(DEFAULT_MAX_TEMP_CELSIUS)),
            unit: input.unit,
        }
    }

    fn out_of_range(&self, value: f64) -> DirectiveError {
        DirectiveError::temperature_out_of_range(value, self.min, self.max, self.unit)
    }

    fn check(&self, value: f64) -> Result<f64, DirectiveError> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(self.out_of_range(value))
        }
    }
}

fn setpoint_property(name: &'static str, value: f64, unit: TemperatureUnit) -> Property {
    Property::new(
        Interface::ThermostatController,
        name,
        Temperature::new(value, unit.scale()),
    )
}

pub fn set_target_temperature(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let bounds = Bounds::of(input);
    let unit = input.unit;
    let mut call = ServiceCall::new(&input.entity.entity_id, SERVICE_SET_TEMPERATURE);
    let mut properties = Vec::new();

    if let Some(target) = input.payload.temperature("targetSetpoint")? {
        let value = bounds.check(target.to_unit(unit))?;
        call = call.with(attr::TEMPERATURE, value);
        properties.push(setpoint_property("targetSetpoint", value, unit));
    }

    let lower = input.payload.temperature("lowerSetpoint")?;
    let upper = input.payload.temperature("upperSetpoint")?;
    match (lower, upper) {
        (Some(lower), Some(upper)) => {
            let low = bounds.check(lower.to_unit(unit))?;
            let high = bounds.check(upper.to_unit(unit))?;
            if low > high {
                return Err(bounds.out_of_range(low));
            }
            call = call
                .with(attr::TARGET_TEMP_LOW, low)
                .with(attr::TARGET_TEMP_HIGH, high);
            properties.push(setpoint_property("lowerSetpoint", low, unit));
            properties.push(setpoint_property("upperSetpoint", high, unit));
        }
        (Some(single), None) | (None, Some(single)) => {
            return Err(bounds.out_of_range(single.to_unit(unit)));
        }
        (None, None) => {}
    }

    if call.data.is_empty() {
        return Err(DirectiveError::invalid_directive("no setpoint in payload"));
    }
    let mut outcome = Outcome::respond(call);
    outcome.properties = properties;
    Ok(outcome)
}

pub fn adjust_target_temperature(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let bounds = Bounds::of(input);
    let delta = input
        .payload
        .require_temperature("targetSetpointDelta")?
        .interval_to_unit(input.unit);
    let current = input
        .entity
        .attributes
        .require_f64(attr::TEMPERATURE)
        .map_err(missing_attribute(input.entity))?;
    let value = bounds.check(current + delta)?;

    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_SET_TEMPERATURE).with(attr::TEMPERATURE, value);
    Ok(Outcome::respond(call).with_property(setpoint_property("targetSetpoint", value, input.unit)))
}

pub fn set_thermostat_mode(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let requested = match input.payload.require("thermostatMode")? {
        Value::String(mode) => mode.as_str(),
        Value::Object(fields) => fields
            .get("value")
            .and_then(Value::as_str)
            .ok_or_else(|| DirectiveError::invalid_directive("thermostatMode has no value"))?,
        _ => return Err(DirectiveError::invalid_directive("thermostatMode must be a string")),
    };

    let supported = input
        .entity
        .attributes
        .str_list(attr::OPERATION_LIST)
        .unwrap_or_default();
    let hub_mode = MODES
        .iter()
        .find(|(hub, protocol)| *protocol == requested && supported.iter().any(|s| s.as_str() == *hub))
        .map(|(hub, _)| *hub)
        .ok_or_else(|| DirectiveError::unsupported_thermostat_mode(requested))?;

    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_SET_OPERATION_MODE).with(attr::OPERATION_MODE, hub_mode);
    Ok(Outcome::respond(call).with_property(Property::new(
        Interface::ThermostatController,
        "thermostatMode",
        requested,
    )))
}
