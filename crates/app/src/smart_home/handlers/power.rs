//! `Alexa.PowerController`.

use voxbridge_domain::entity::{Domain, HubEntity};
use voxbridge_domain::protocol::{DirectiveError, Interface, PowerState, Property};
use voxbridge_domain::service::{
    GENERIC_DOMAIN, SERVICE_CLOSE_COVER, SERVICE_OPEN_COVER, SERVICE_TURN_OFF, SERVICE_TURN_ON,
    ServiceCall,
};

use super::{HandlerInput, Outcome};

fn power_call(entity: &HubEntity, on: bool) -> ServiceCall {
    let id = &entity.entity_id;
    match (entity.domain(), on) {
        (Domain::Cover, true) => ServiceCall::new(id, SERVICE_OPEN_COVER),
        (Domain::Cover, false) => ServiceCall::new(id, SERVICE_CLOSE_COVER),
        (Domain::Group, true) => ServiceCall::in_domain(GENERIC_DOMAIN, SERVICE_TURN_ON, id),
        (Domain::Group, false) => ServiceCall::in_domain(GENERIC_DOMAIN, SERVICE_TURN_OFF, id),
        (_, true) => ServiceCall::new(id, SERVICE_TURN_ON),
        (_, false) => ServiceCall::new(id, SERVICE_TURN_OFF),
    }
}

fn power(input: &HandlerInput<'_>, state: PowerState) -> Outcome {
    Outcome::respond(power_call(input.entity, state == PowerState::On))
        .with_property(Property::new(Interface::PowerController, "powerState", state))
}

pub fn turn_on(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    Ok(power(input, PowerState::On))
}

pub fn turn_off(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    Ok(power(input, PowerState::Off))
}
