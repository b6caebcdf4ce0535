//! Property readers: the current value of each reportable property.

use serde_json::Value;

use voxbridge_domain::convert::{SpeedSteps, brightness_to_percent, mired_to_kelvin, volume_level_to_percent};
use voxbridge_domain::entity::{Domain, HubEntity};
use voxbridge_domain::protocol::{Capability, Endpoint, Interface, LockState, PowerState, Property};
use voxbridge_domain::temperature::{Temperature, TemperatureUnit};

use super::attr;
use super::handlers::thermostat::protocol_mode;

/// Read one property from an entity snapshot.
///
/// Returns `None` when the entity currently has no value for it (an unknown
/// sensor reading, a light without a color temperature, ...).
#[must_use]
pub fn read(entity: &HubEntity, interface: Interface, name: &str, unit: TemperatureUnit) -> Option<Value> {
    let attrs = &entity.attributes;
    match (interface, name) {
        (Interface::PowerController, "powerState") => Some(PowerState::from_state(&entity.state).into()),
        (Interface::BrightnessController, "brightness") => {
            Some(brightness_to_percent(attrs.f64(attr::BRIGHTNESS).unwrap_or(0.0)).into())
        }
        (Interface::ColorTemperatureController, "colorTemperatureInKelvin") => attrs
            .f64(attr::COLOR_TEMP)
            .and_then(|mired| mired_to_kelvin(mired).ok())
            .map(Value::from),
        (Interface::PercentageController, "percentage") => percentage(entity).map(Value::from),
        (Interface::ThermostatController, "thermostatMode") => attrs
            .str(attr::OPERATION_MODE)
            .and_then(protocol_mode)
            .map(Value::from),
        (Interface::ThermostatController, "targetSetpoint") => setpoint(entity, attr::TEMPERATURE, unit),
        (Interface::ThermostatController, "lowerSetpoint") => setpoint(entity, attr::TARGET_TEMP_LOW, unit),
        (Interface::ThermostatController, "upperSetpoint") => setpoint(entity, attr::TARGET_TEMP_HIGH, unit),
        (Interface::TemperatureSensor, "temperature") => temperature(entity, unit),
        (Interface::LockController, "lockState") => Some(LockState::from_state(&entity.state).into()),
        (Interface::Speaker, "volume") => attrs
            .f64(attr::VOLUME_LEVEL)
            .map(|level| Value::from(volume_level_to_percent(level))),
        (Interface::Speaker, "muted") => Some(attrs.flag(attr::IS_VOLUME_MUTED).into()),
        _ => None,
    }
}

fn percentage(entity: &HubEntity) -> Option<i64> {
    let attrs = &entity.attributes;
    match entity.domain() {
        Domain::Cover => attrs.i64(attr::CURRENT_POSITION).or_else(|| attrs.i64(attr::POSITION)),
        Domain::Fan => {
            let steps = attrs.str_list(attr::SPEED_LIST).map(SpeedSteps::new).unwrap_or_default();
            Some(attrs.str(attr::SPEED).and_then(|speed| steps.percentage_of(speed)).unwrap_or(0))
        }
        _ => None,
    }
}

fn setpoint(entity: &HubEntity, key: &str, unit: TemperatureUnit) -> Option<Value> {
    let value = entity.attributes.f64(key)?;
    Some(Temperature::new(value, unit.scale()).into())
}

fn temperature(entity: &HubEntity, unit: TemperatureUnit) -> Option<Value> {
    let reading = match entity.domain() {
        Domain::Climate => Temperature::new(entity.attributes.f64(attr::CURRENT_TEMPERATURE)?, unit.scale()),
        _ => {
            let sensor_unit = entity
                .attributes
                .str(attr::UNIT_OF_MEASUREMENT)
                .and_then(TemperatureUnit::from_symbol)?;
            let value: f64 = entity.state.trim().parse().ok()?;
            Temperature::new(value, sensor_unit.scale())
        }
    };
    Some(reading.into())
}

/// Every retrievable property the endpoint declares.
#[must_use]
pub fn retrievable(entity: &HubEntity, endpoint: &Endpoint, unit: TemperatureUnit) -> Vec<Property> {
    collect(entity, endpoint, unit, |cap| cap.interface.spec().retrievable)
}

/// Readings of the endpoint's proactively reported interfaces.
#[must_use]
pub fn proactive(entity: &HubEntity, endpoint: &Endpoint, unit: TemperatureUnit) -> Vec<Property> {
    collect(entity, endpoint, unit, |cap| cap.interface.spec().proactively_reported)
}

fn collect(
    entity: &HubEntity,
    endpoint: &Endpoint,
    unit: TemperatureUnit,
    include: impl Fn(&Capability) -> bool,
) -> Vec<Property> {
    endpoint
        .capabilities
        .iter()
        .filter(|cap| include(cap))
        .flat_map(|cap| {
            cap.supported.iter().filter_map(move |&name| {
                read(entity, cap.interface, name, unit).map(|value| Property::new(cap.interface, name, value))
            })
        })
        .collect()
}
