//! `Alexa.ColorController` and `Alexa.ColorTemperatureController`.

use serde_json::Value;

use voxbridge_domain::convert::{hsb_to_rgb, kelvin_to_mired, mired_to_kelvin};
use voxbridge_domain::protocol::{DirectiveError, Interface, Property};
use voxbridge_domain::service::{SERVICE_TURN_ON, ServiceCall};

use super::{HandlerInput, Outcome, missing_attribute};
use crate::smart_home::attr;

const ATTR_RGB_COLOR: &str = "rgb_color";

/// Mireds added or removed by one increase/decrease step.
const MIRED_STEP: i64 = 50;

pub fn set_color(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let color = input.payload.require_object("color")?;
    let rgb = hsb_to_rgb(
        color.require_f64("hue")?,
        color.require_f64("saturation")?,
        color.require_f64("brightness")?,
    )?;
    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_TURN_ON)
        .with(ATTR_RGB_COLOR, Value::from(rgb.to_vec()));
    let reported = input.payload.require("color")?.clone();
    Ok(Outcome::respond(call).with_property(Property::new(Interface::ColorController, "color", reported)))
}

fn color_temp_outcome(input: &HandlerInput<'_>, mireds: i64) -> Result<Outcome, DirectiveError> {
    #[allow(clippy::cast_precision_loss)]
    let kelvin = mired_to_kelvin(mireds as f64)?;
    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_TURN_ON).with(attr::COLOR_TEMP, mireds);
    Ok(Outcome::respond(call).with_property(Property::new(
        Interface::ColorTemperatureController,
        "colorTemperatureInKelvin",
        kelvin,
    )))
}

pub fn set_color_temperature(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let kelvin = input.payload.require_i64("colorTemperatureInKelvin")?;
    color_temp_outcome(input, kelvin_to_mired(kelvin)?)
}

pub fn increase_color_temperature(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let attrs = &input.entity.attributes;
    let current = attrs.require_i64(attr::COLOR_TEMP).map_err(missing_attribute(input.entity))?;
    let min = attrs.require_i64(attr::MIN_MIREDS).map_err(missing_attribute(input.entity))?;
    color_temp_outcome(input, min.max(current.saturating_sub(MIRED_STEP)))
}

pub fn decrease_color_temperature(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let attrs = &input.entity.attributes;
    let current = attrs.require_i64(attr::COLOR_TEMP).map_err(missing_attribute(input.entity))?;
    let max = attrs.require_i64(attr::MAX_MIREDS).map_err(missing_attribute(input.entity))?;
    color_temp_outcome(input, max.min(current.saturating_add(MIRED_STEP)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smart_home::handlers::test_support::{entity, payload};
    use serde_json::json;
    use voxbridge_domain::protocol::ErrorKind;
    use voxbridge_domain::temperature::TemperatureUnit;

    fn run(
        handler: fn(&HandlerInput<'_>) -> Result<Outcome, DirectiveError>,
        attrs: &[(&str, Value)],
        body: Value,
    ) -> Result<Outcome, DirectiveError> {
        let entity = entity("light.test", "on", attrs);
        let payload = payload(body);
        handler(&HandlerInput {
            entity: &entity,
            payload: &payload,
            unit: TemperatureUnit::Celsius,
        })
    }

    #[test]
    fn should_convert_color_to_rgb() {
        let outcome = run(
            set_color,
            &[],
            json!({"color": {"hue": "120", "saturation": "0.612", "brightness": "0.342"}}),
        )
        .unwrap();
        let call = outcome.call.unwrap();
        assert_eq!(call.qualified_name(), "light.turn_on");
        assert_eq!(call.data["rgb_color"], json!([33, 87, 33]));
    }

    #[test]
    fn should_reject_out_of_range_color() {
        let err = run(
            set_color,
            &[],
            json!({"color": {"hue": 120, "saturation": 2.0, "brightness": 0.5}}),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueOutOfRange);
    }

    #[test]
    fn should_set_color_temperature_in_mireds() {
        let outcome = run(set_color_temperature, &[], json!({"colorTemperatureInKelvin": "7500"})).unwrap();
        assert_eq!(outcome.call.unwrap().data["color_temp"], 133);
        assert_eq!(outcome.properties[0].name, "colorTemperatureInKelvin");
    }

    #[test]
    fn should_increase_color_temperature_down_to_min_mireds() {
        let step = run(
            increase_color_temperature,
            &[(attr::COLOR_TEMP, json!(333)), (attr::MIN_MIREDS, json!(142))],
            json!({}),
        )
        .unwrap();
        assert_eq!(step.call.unwrap().data["color_temp"], 283);

        let bounded = run(
            increase_color_temperature,
            &[(attr::COLOR_TEMP, json!(142)), (attr::MIN_MIREDS, json!(142))],
            json!({}),
        )
        .unwrap();
        assert_eq!(bounded.call.unwrap().data["color_temp"], 142);
    }

    #[test]
    fn should_decrease_color_temperature_up_to_max_mireds() {
        let step = run(
            decrease_color_temperature,
            &[(attr::COLOR_TEMP, json!(333)), (attr::MAX_MIREDS, json!(500))],
            json!({}),
        )
        .unwrap();
        assert_eq!(step.call.unwrap().data["color_temp"], 383);

        let bounded = run(
            decrease_color_temperature,
            &[(attr::COLOR_TEMP, json!(500)), (attr::MAX_MIREDS, json!(500))],
            json!({}),
        )
        .unwrap();
        assert_eq!(bounded.call.unwrap().data["color_temp"], 500);
    }

    #[test]
    fn should_fail_internally_without_color_temp_attribute() {
        let err = run(increase_color_temperature, &[(attr::MIN_MIREDS, json!(142))], json!({})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InternalError);
        assert!(err.detail.unwrap().contains("color_temp"));
    }
}
