//! Typed attribute values attached to entities.

use serde::{Deserialize, Serialize};

/// A single typed attribute value.
///
/// Hub integrations are not consistent about types: numeric attributes
/// sometimes arrive as strings (`"333"`), so the numeric accessors accept
/// both representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Numeric view of the value (ints, floats and numeric strings).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::String(v) => v.trim().parse().ok(),
            Self::Bool(_) | Self::Json(_) => None,
        }
    }

    /// Integer view of the value; floats are truncated.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(v) => Some(*v as i64),
            Self::String(v) => {
                let v = v.trim();
                v.parse()
                    .ok()
                    .or_else(|| v.parse::<f64>().ok().map(|f| f as i64))
            }
            Self::Bool(_) | Self::Json(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            Self::Json(serde_json::Value::String(v)) => Some(v),
            _ => None,
        }
    }

    /// Truthiness: `true`, non-zero numbers and non-empty strings.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(v) => *v,
            Self::Int(v) => *v != 0,
            Self::Float(v) => *v != 0.0,
            Self::String(v) => !v.is_empty(),
            Self::Json(v) => !v.is_null(),
        }
    }

    /// List-of-strings view (for `speed_list`, `source_list`, …).
    #[must_use]
    pub fn as_str_list(&self) -> Option<Vec<String>> {
        match self {
            Self::Json(serde_json::Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Json(serde_json::Value::from(value))
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(v) => Self::Bool(v),
            serde_json::Value::String(v) => Self::String(v),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(v) => Self::Int(v),
                None => n.as_f64().map_or(Self::Json(serde_json::Value::Number(n)), Self::Float),
            },
            other => Self::Json(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_string_variant_as_plain_string() {
        let val = AttributeValue::String("hello".to_string());
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "\"hello\"");
    }

    #[test]
    fn should_serialize_float_variant_as_number() {
        let val = AttributeValue::Float(21.5);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "21.5");
    }

    #[test]
    fn should_deserialize_json_array_as_json_variant() {
        let val: AttributeValue = serde_json::from_str(r#"["low", "high"]"#).unwrap();
        assert!(matches!(val, AttributeValue::Json(_)));
        assert_eq!(
            val.as_str_list(),
            Some(vec!["low".to_string(), "high".to_string()])
        );
    }

    #[test]
    fn should_read_numeric_strings_as_numbers() {
        let val = AttributeValue::from("333");
        assert_eq!(val.as_f64(), Some(333.0));
        assert_eq!(val.as_i64(), Some(333));
    }

    #[test]
    fn should_truncate_floats_when_reading_integers() {
        assert_eq!(AttributeValue::Float(0.75).as_i64(), Some(0));
        assert_eq!(AttributeValue::from("12.9").as_i64(), Some(12));
    }

    #[test]
    fn should_not_read_booleans_as_numbers() {
        assert_eq!(AttributeValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn should_normalize_json_values() {
        assert_eq!(
            AttributeValue::from(serde_json::json!(42)),
            AttributeValue::Int(42)
        );
        assert_eq!(
            AttributeValue::from(serde_json::json!(0.5)),
            AttributeValue::Float(0.5)
        );
        assert_eq!(
            AttributeValue::from(serde_json::json!(true)),
            AttributeValue::Bool(true)
        );
    }

    #[test]
    fn should_evaluate_truthiness() {
        assert!(AttributeValue::Bool(true).is_truthy());
        assert!(!AttributeValue::Int(0).is_truthy());
        assert!(!AttributeValue::String(String::new()).is_truthy());
    }
}
