//! `Alexa.LockController`.

use voxbridge_domain::protocol::{DirectiveError, Interface, LockState, Property};
use voxbridge_domain::service::{SERVICE_LOCK, SERVICE_UNLOCK, ServiceCall};

use super::{HandlerInput, Outcome};

fn lock_outcome(input: &HandlerInput<'_>, service: &str, state: LockState) -> Outcome {
    Outcome::respond(ServiceCall::new(&input.entity.entity_id, service))
        .with_property(Property::new(Interface::LockController, "lockState", state))
}

pub fn lock(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    Ok(lock_outcome(input, SERVICE_LOCK, LockState::Locked))
}

pub fn unlock(input: &HandlerInput<'_>) -> Result<Outcome, DirectiveError> {
    Ok(lock_outcome(input, SERVICE_UNLOCK, LockState::Unlocked))
}
