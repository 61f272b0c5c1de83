use std::fmt;
use std::str::FromStr;

use super::error::ConditionError;
use super::value::Value;

/// Comparison operators supported in visibility conditions.
///
/// The `snake_case` spellings returned by [`as_str`](Self::as_str) are the
/// persisted wire names and must never change; existing form definitions
/// depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Loose equality: both sides are normalized with [`Value::to_text`]
    /// before comparing, mirroring free-form form input (`5` equals `"5"`).
    Equals,
    NotEquals,
    /// Substring test over the canonical text of both sides.
    Contains,
    NotContains,
    /// Numeric comparison; fails closed when either side is non-numeric.
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    /// True when the answer is absent, the empty string, or an empty list.
    IsEmpty,
    IsNotEmpty,
}

impl Operator {
    /// The persisted wire spelling of this operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::GreaterThanOrEqual => "greater_than_or_equal",
            Operator::LessThanOrEqual => "less_than_or_equal",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
        }
    }

    /// Whether this operator compares against an expected value.
    /// `is_empty` / `is_not_empty` inspect the answer alone.
    #[must_use]
    pub fn takes_value(self) -> bool {
        !matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }
}

impl FromStr for Operator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Operator::Equals),
            "not_equals" => Ok(Operator::NotEquals),
            "contains" => Ok(Operator::Contains),
            "not_contains" => Ok(Operator::NotContains),
            "greater_than" => Ok(Operator::GreaterThan),
            "less_than" => Ok(Operator::LessThan),
            "greater_than_or_equal" => Ok(Operator::GreaterThanOrEqual),
            "less_than_or_equal" => Ok(Operator::LessThanOrEqual),
            "is_empty" => Ok(Operator::IsEmpty),
            "is_not_empty" => Ok(Operator::IsNotEmpty),
            other => Err(ConditionError::UnknownOperator {
                name: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a condition's result is folded with the condition that follows it.
///
/// The combinator stored on the last condition of a set has nothing to bind
/// to and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    /// The persisted wire spelling of this combinator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

impl FromStr for Combinator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Combinator::And),
            "OR" => Ok(Combinator::Or),
            other => Err(ConditionError::UnknownCombinator {
                name: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comparison over one answered field.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Identifier of the field whose answer is inspected.
    pub field: String,
    pub operator: Operator,
    /// Expected operand. [`Value::Empty`] for value-less operators.
    pub value: Value,
    /// Joins this condition with the next one in the set.
    pub combinator: Combinator,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.takes_value() {
            write!(f, "{} {} {}", self.field, self.operator, self.value)
        } else {
            write!(f, "{} {}", self.field, self.operator)
        }
    }
}

/// An ordered chain of [`Condition`]s combined strictly left to right.
///
/// There is no operator precedence and no grouping: the running result is
/// folded with each next condition using the combinator carried by the
/// condition before it. An empty set means "no restriction" and always
/// evaluates to `true`.
///
/// # Example
///
/// ```
/// use stepgate::{field, Answers, ConditionSet};
///
/// let set = ConditionSet::new()
///     .when(field("country").eq("US"))
///     .and(field("state").is_not_empty());
///
/// let answers = Answers::new().set("country", "US").set("state", "CA");
/// assert!(set.evaluate(&answers));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionSet {
    conditions: Vec<Condition>,
}

impl ConditionSet {
    /// Create an empty set (always visible).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the chain with a first condition.
    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Append a condition joined to the previous one with `AND`.
    ///
    /// On an empty set this behaves like [`when`](Self::when).
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        if let Some(last) = self.conditions.last_mut() {
            last.combinator = Combinator::And;
        }
        self.conditions.push(condition);
        self
    }

    /// Append a condition joined to the previous one with `OR`.
    ///
    /// On an empty set this behaves like [`when`](Self::when).
    #[must_use]
    pub fn or(mut self, condition: Condition) -> Self {
        if let Some(last) = self.conditions.last_mut() {
            last.combinator = Combinator::Or;
        }
        self.conditions.push(condition);
        self
    }

    /// Append a condition as-is, keeping the combinator it already carries.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }

    /// Evaluate this set against an answer snapshot.
    ///
    /// Convenience for [`evaluate`](crate::evaluate).
    #[must_use]
    pub fn evaluate(&self, answers: &super::Answers) -> bool {
        crate::evaluate::evaluate(self, answers)
    }

    /// Parse a condition chain from its DSL form, e.g.
    /// `country equals "US" AND state is_not_empty`.
    ///
    /// # Errors
    ///
    /// Returns [`StepgateError`](crate::StepgateError) if the input is not a
    /// valid condition chain.
    pub fn from_dsl(input: &str) -> Result<Self, crate::StepgateError> {
        Ok(crate::parse::parse(input)?)
    }
}

impl From<Vec<Condition>> for ConditionSet {
    fn from(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }
}

impl<'a> IntoIterator for &'a ConditionSet {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

/// Renders the chain in its DSL form, parseable back via
/// [`from_dsl`](Self::from_dsl) as long as every value is a scalar. List
/// values have no DSL literal and render for display only.
impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                // The combinator printed between two conditions lives on the
                // earlier of the pair.
                write!(f, " {} ", self.conditions[i - 1].combinator)?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

/// Intermediate builder for a single condition.
/// Created by [`field()`]; requires an operator method to produce a
/// [`Condition`].
#[derive(Debug, Clone)]
pub struct ConditionBuilder {
    field: String,
}

impl ConditionBuilder {
    fn build(self, operator: Operator, value: Value) -> Condition {
        Condition {
            field: self.field,
            operator,
            value,
            combinator: Combinator::And,
        }
    }

    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::Equals, value.into())
    }

    #[must_use]
    pub fn neq(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::NotEquals, value.into())
    }

    #[must_use]
    pub fn contains(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::Contains, value.into())
    }

    #[must_use]
    pub fn not_contains(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::NotContains, value.into())
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::GreaterThan, value.into())
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::GreaterThanOrEqual, value.into())
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::LessThan, value.into())
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Condition {
        self.build(Operator::LessThanOrEqual, value.into())
    }

    #[must_use]
    pub fn is_empty(self) -> Condition {
        self.build(Operator::IsEmpty, Value::Empty)
    }

    #[must_use]
    pub fn is_not_empty(self) -> Condition {
        self.build(Operator::IsNotEmpty, Value::Empty)
    }
}

#[must_use]
pub fn field(id: &str) -> ConditionBuilder {
    ConditionBuilder {
        field: id.to_owned(),
    }
}
