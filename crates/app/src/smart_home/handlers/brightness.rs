//! `Alexa.BrightnessController`.

use voxbridge_domain::convert::adjust_brightness_percent;
use voxbridge_domain::protocol::{DirectiveError, Interface, Property};
use voxbridge_domain::service::{SERVICE_TURN_ON, ServiceCall};

use super::{HandlerInput, Outcome};
use crate::smart_home::attr;

const ATTR_BRIGHTNESS_PCT: &str = "brightness_pct";

fn brightness_outcome(input: &HandlerInput<'_>, percent: i64) -> Outcome {
    let call = ServiceCall::new(&input.entity.entity_id, SERVICE_TURN_ON).with(ATTR_BRIGHTNESS_PCT, percent);
    Outcome::respond(call).with_property(Property::new(
        Interface::BrightnessController,
        "brightness",
        percent,
    ))
}

pub fn set_brightness(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let percent = input.payload.require_i64("brightness")?;
    if !(0..=100).contains(&percent) {
        return Err(DirectiveError::value_out_of_range(format!(
            "brightness {percent} is outside 0..=100"
        )));
    }
    Ok(brightness_outcome(input, percent))
}

pub fn adjust_brightness(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let delta = input.payload.require_i64("brightnessDelta")?;
    let current = input.entity.attributes.f64(attr::BRIGHTNESS).unwrap_or(0.0);
    Ok(brightness_outcome(input, adjust_brightness_percent(current, delta)))
}
