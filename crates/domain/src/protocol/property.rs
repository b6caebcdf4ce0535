//! Reported property values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Interface;
use crate::entity::state;
use crate::time::{Timestamp, now, serialize_protocol};

/// One property reading in a response `context`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub namespace: &'static str,
    pub name: &'static str,
    pub value: Value,
    #[serde(serialize_with = "serialize_protocol")]
    pub time_of_sample: Timestamp,
    pub uncertainty_in_milliseconds: u32,
}

impl Property {
    /// A reading sampled now.
    #[must_use]
    pub fn new(interface: Interface, name: &'static str, value: impl Into<Value>) -> Self {
        Self {
            namespace: interface.namespace(),
            name,
            value: value.into(),
            time_of_sample: now(),
            uncertainty_in_milliseconds: 0,
        }
    }

    /// Whether this reading has the same namespace and name as `other`.
    #[must_use]
    pub fn same_key(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.name == other.name
    }
}

/// `powerState` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    #[must_use]
    pub fn from_state(state: &str) -> Self {
        if state::is_powered(state) {
            Self::On
        } else {
            Self::Off
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl From<PowerState> for Value {
    fn from(value: PowerState) -> Self {
        Self::from(value.as_str())
    }
}

/// `lockState` values; anything the hub reports that is neither locked nor
/// unlocked is [`Jammed`](Self::Jammed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockState {
    Locked,
    Unlocked,
    Jammed,
}

impl LockState {
    #[must_use]
    pub fn from_state(value: &str) -> Self {
        match value {
            state::STATE_LOCKED => Self::Locked,
            state::STATE_UNLOCKED => Self::Unlocked,
            _ => Self::Jammed,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "LOCKED",
            Self::Unlocked => "UNLOCKED",
            Self::Jammed => "JAMMED",
        }
    }
}

impl From<LockState> for Value {
    fn from(value: LockState) -> Self {
        Self::from(value.as_str())
    }
}
