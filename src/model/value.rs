use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::parser::step::StepValue;

/// Cell value of an extracted property or table column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

/// Property name -> value for one property or quantity set.
pub type PropertyMap = BTreeMap<String, Value>;

/// Set name -> properties.
pub type PropertySets = BTreeMap<String, PropertyMap>;

impl Value {
    /// Converts a STEP attribute value; lists are joined with `", "` and
    /// references become `#id`.
    #[must_use]
    pub fn from_step(value: &StepValue) -> Self {
        match value.untyped() {
            StepValue::String(s) | StepValue::Enum(s) => Value::Text(s.clone()),
            StepValue::Real(f) => Value::Real(*f),
            StepValue::Integer(i) => Value::Integer(*i),
            StepValue::Boolean(b) => Value::Bool(*b),
            StepValue::Reference(id) => Value::Text(format!("#{id}")),
            StepValue::List(items) => Value::Text(
                items
                    .iter()
                    .map(|item| Value::from_step(item).to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            StepValue::Null | StepValue::Derived | StepValue::Typed { .. } => Value::Null,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view used by aggregation.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Option<&str>> for Value {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Value::Null, Value::from)
    }
}
