//! Well-known entity state strings.

pub const STATE_ON: &str = "on";
pub const STATE_OFF: &str = "off";
pub const STATE_OPEN: &str = "open";
pub const STATE_CLOSED: &str = "closed";
pub const STATE_LOCKED: &str = "locked";
pub const STATE_UNLOCKED: &str = "unlocked";
pub const STATE_PLAYING: &str = "playing";
pub const STATE_PAUSED: &str = "paused";
pub const STATE_IDLE: &str = "idle";
pub const STATE_UNKNOWN: &str = "unknown";
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// Whether a state string means the entity is powered (on-like).
#[must_use]
pub fn is_powered(state: &str) -> bool {
    matches!(state, STATE_ON | STATE_OPEN | STATE_PLAYING | STATE_PAUSED)
}
