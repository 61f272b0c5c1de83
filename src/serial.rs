//! JSON persistence of condition and step definitions.
//!
//! This is the shape form builders store and the renderer reads back. The
//! operator and combinator spellings are load-bearing: they must match the
//! enumerations in [`Operator`] and [`Combinator`] exactly, or decoding fails
//! with [`ConditionError`].
//!
//! ## Wire shape
//!
//! ```json
//! [
//!   { "field": "country", "operator": "equals", "value": "US", "combinator": "AND" },
//!   { "field": "state", "operator": "is_not_empty", "value": null }
//! ]
//! ```
//!
//! `value` is a bare JSON scalar, `null` (no value), or an array of scalars;
//! `combinator` defaults to `"AND"` when omitted. A step serializes as
//! `{ "order", "title", "required", "conditions" }`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Combinator, Condition, ConditionError, ConditionSet, Operator, Step, Value};

/// Errors from encoding or decoding persisted definitions.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid condition JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was well formed but named an operator or combinator outside
    /// the supported enumeration — a data-integrity problem upstream.
    #[error(transparent)]
    Condition(#[from] ConditionError),
}

// ---------------------------------------------------------------------------
// Serialized type hierarchy
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct WireCondition {
    field: String,
    operator: String,
    #[serde(default)]
    value: WireValue,
    #[serde(default = "default_combinator")]
    combinator: String,
}

fn default_combinator() -> String {
    Combinator::And.as_str().to_owned()
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(untagged)]
enum WireValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<WireValue>),
    #[default]
    Empty,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireStep {
    order: u32,
    title: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    conditions: Vec<WireCondition>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<&Value> for WireValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Text(s) => WireValue::Text(s.clone()),
            Value::Number(n) => WireValue::Number(*n),
            Value::Bool(b) => WireValue::Bool(*b),
            Value::List(items) => WireValue::List(items.iter().map(WireValue::from).collect()),
            Value::Empty => WireValue::Empty,
        }
    }
}

impl From<WireValue> for Value {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::Text(s) => Value::Text(s),
            WireValue::Number(n) => Value::Number(n),
            WireValue::Bool(b) => Value::Bool(b),
            WireValue::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            WireValue::Empty => Value::Empty,
        }
    }
}

impl From<&Condition> for WireCondition {
    fn from(condition: &Condition) -> Self {
        WireCondition {
            field: condition.field.clone(),
            operator: condition.operator.as_str().to_owned(),
            value: WireValue::from(&condition.value),
            combinator: condition.combinator.as_str().to_owned(),
        }
    }
}

impl TryFrom<WireCondition> for Condition {
    type Error = ConditionError;

    fn try_from(wire: WireCondition) -> Result<Self, Self::Error> {
        Ok(Condition {
            field: wire.field,
            operator: Operator::from_str(&wire.operator)?,
            value: Value::from(wire.value),
            combinator: Combinator::from_str(&wire.combinator)?,
        })
    }
}

fn set_to_wire(set: &ConditionSet) -> Vec<WireCondition> {
    set.iter().map(WireCondition::from).collect()
}

fn set_from_wire(wire: Vec<WireCondition>) -> Result<ConditionSet, ConditionError> {
    let conditions: Vec<Condition> = wire
        .into_iter()
        .map(Condition::try_from)
        .collect::<Result<_, _>>()?;
    Ok(ConditionSet::from(conditions))
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl ConditionSet {
    /// Serialize this set to its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] if encoding fails.
    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(&set_to_wire(self))?)
    }

    /// Deserialize a set from its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] on malformed JSON or on an operator/combinator
    /// spelling outside the supported enumeration.
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        let wire: Vec<WireCondition> = serde_json::from_str(json)?;
        Ok(set_from_wire(wire)?)
    }
}

impl Step {
    /// Serialize this step definition to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] if encoding fails.
    pub fn to_json(&self) -> Result<String, WireError> {
        let wire = WireStep {
            order: self.order,
            title: self.title.clone(),
            required: self.required,
            conditions: set_to_wire(&self.conditions),
        };
        Ok(serde_json::to_string(&wire)?)
    }

    /// Deserialize a step definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] on malformed JSON or an unknown
    /// operator/combinator spelling.
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        let wire: WireStep = serde_json::from_str(json)?;
        Ok(Step {
            order: wire.order,
            title: wire.title,
            required: wire.required,
            conditions: set_from_wire(wire.conditions)?,
        })
    }
}
