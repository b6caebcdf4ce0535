//! `Alexa.PercentageController` for covers (position) and fans (speed steps).

use voxbridge_domain::convert::{SpeedSteps, clamp_percent};
use voxbridge_domain::entity::{Domain, HubEntity};
use voxbridge_domain::protocol::{DirectiveError, Interface, Property};
use voxbridge_domain::service::{SERVICE_SET_COVER_POSITION, SERVICE_SET_SPEED, ServiceCall};

use super::{HandlerInput, Outcome, missing_attribute};
use crate::smart_home::attr;

fn speed_steps(entity: &HubEntity) -> SpeedSteps {
    entity
        .attributes
        .str_list(attr::SPEED_LIST)
        .map(SpeedSteps::new)
        .unwrap_or_default()
}

fn percentage_outcome(input: &HandlerInput<'_>, percentage: i64) -> Result<Outcome, DirectiveError> {
    let entity = input.entity;
    let call = match entity.domain() {
        Domain::Cover => ServiceCall::new(&entity.entity_id, SERVICE_SET_COVER_POSITION)
            .with(attr::POSITION, percentage),
        Domain::Fan => ServiceCall::new(&entity.entity_id, SERVICE_SET_SPEED)
            .with(attr::SPEED, speed_steps(entity).speed_for(percentage)),
        other => {
            return Err(DirectiveError::invalid_directive(format!(
                "{other} entities have no percentage"
            )));
        }
    };
    Ok(Outcome::respond(call).with_property(Property::new(
        Interface::PercentageController,
        "percentage",
        percentage,
    )))
}

pub fn set_percentage(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let percentage = input.payload.require_i64("percentage")?;
    if !(0..=100).contains(&percentage) {
        return Err(DirectiveError::value_out_of_range(format!(
            "percentage {percentage} is outside 0..=100"
        )));
    }
    percentage_outcome(input, percentage)
}

pub fn adjust_percentage(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    let delta = input.payload.require_i64("percentageDelta")?;
    let entity = input.entity;
    let current = match entity.domain() {
        Domain::Cover => entity
            .attributes
            .require_i64(attr::CURRENT_POSITION)
            .or_else(|err| entity.attributes.i64(attr::POSITION).ok_or(err))
            .map_err(missing_attribute(entity))?,
        Domain::Fan => entity
            .attributes
            .str(attr::SPEED)
            .and_then(|speed| speed_steps(entity).percentage_of(speed))
            .unwrap_or(0),
        _ => 0,
    };
    percentage_outcome(input, clamp_percent(current.saturating_add(delta)))
}
