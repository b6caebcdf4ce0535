//! `domain.object_id` entity identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Domain;
use crate::error::ValidationError;

/// Separator between domain and object id in hub entity ids.
pub const HUB_SEPARATOR: char = '.';

/// A validated hub entity identifier such as `light.kitchen`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId {
    raw: String,
    split: usize,
}

impl EntityId {
    /// The domain tag (`light` in `light.kitchen`).
    #[must_use]
    pub fn domain(&self) -> Domain {
        Domain::from(self.domain_str())
    }

    /// The raw domain string.
    #[must_use]
    pub fn domain_str(&self) -> &str {
        &self.raw[..self.split]
    }

    /// The object id (`kitchen` in `light.kitchen`).
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::EmptyEntityId);
        }
        match s.find(HUB_SEPARATOR) {
            Some(split) if split > 0 && split + 1 < s.len() => Ok(Self {
                raw: s.to_string(),
                split,
            }),
            _ => Err(ValidationError::MalformedEntityId(s.to_string())),
        }
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.raw
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
