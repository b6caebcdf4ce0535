//! Attribute bag with typed accessors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::AttributeValue;
use crate::feature::FeatureSet;

/// Attribute key holding the supported-features bitmask.
pub const ATTR_SUPPORTED_FEATURES: &str = "supported_features";

/// A required attribute was missing or had an unusable type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("attribute {0:?} is missing")]
    Missing(String),

    #[error("attribute {0:?} has an unexpected type")]
    Invalid(String),
}

/// The attributes of a hub entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(HashMap<String, AttributeValue>);

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttributeValue::as_f64)
    }

    #[must_use]
    pub fn i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(AttributeValue::as_i64)
    }

    #[must_use]
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_str)
    }

    /// Truthiness of an attribute; missing counts as `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(AttributeValue::is_truthy)
    }

    #[must_use]
    pub fn str_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).and_then(AttributeValue::as_str_list)
    }

    /// Numeric attribute a handler cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Missing`] when absent and
    /// [`AttributeError::Invalid`] when not numeric.
    pub fn require_f64(&self, key: &str) -> Result<f64, AttributeError> {
        let value = self
            .get(key)
            .ok_or_else(|| AttributeError::Missing(key.to_string()))?;
        value
            .as_f64()
            .ok_or_else(|| AttributeError::Invalid(key.to_string()))
    }

    /// Integer attribute a handler cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Missing`] when absent and
    /// [`AttributeError::Invalid`] when not numeric.
    pub fn require_i64(&self, key: &str) -> Result<i64, AttributeError> {
        let value = self
            .get(key)
            .ok_or_else(|| AttributeError::Missing(key.to_string()))?;
        value
            .as_i64()
            .ok_or_else(|| AttributeError::Invalid(key.to_string()))
    }

    /// The `supported_features` bitmask, empty when absent.
    #[must_use]
    pub fn features(&self) -> FeatureSet {
        self.i64(ATTR_SUPPORTED_FEATURES)
            .and_then(|bits| u64::try_from(bits).ok())
            .map_or_else(FeatureSet::empty, FeatureSet::from_bits)
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
