use crate::{Answers, Combinator, Condition, ConditionSet, Operator, Value};

/// Decide whether a [`ConditionSet`]'s owner is visible under `answers`.
///
/// An empty set is "no restriction" and returns `true`. A non-empty set is
/// folded strictly left to right: the combinator carried by condition `i - 1`
/// joins condition `i` into the running result. There is no precedence
/// between `AND` and `OR` — the chain is a sequential rule list, not an
/// expression tree. Folding short-circuits, which cannot change the outcome
/// because conditions are pure.
///
/// Total and deterministic: no input panics or errors.
#[must_use]
pub fn evaluate(set: &ConditionSet, answers: &Answers) -> bool {
    let mut conditions = set.iter();
    let Some(first) = conditions.next() else {
        return true;
    };

    let mut result = eval_condition(first, answers);
    let mut combinator = first.combinator;
    for condition in conditions {
        match combinator {
            Combinator::And => {
                if result {
                    result = eval_condition(condition, answers);
                }
            }
            Combinator::Or => {
                if !result {
                    result = eval_condition(condition, answers);
                }
            }
        }
        combinator = condition.combinator;
    }
    result
}

/// Evaluate a single [`Condition`] against the answer snapshot.
///
/// A missing answer reads as [`Value::Empty`]. Equality and substring
/// operators compare canonical text ([`Value::to_text`]); ordering operators
/// compare numbers and fail closed (`false`) when either side has no numeric
/// reading.
#[must_use]
pub fn eval_condition(condition: &Condition, answers: &Answers) -> bool {
    let answer = answers.get(&condition.field).unwrap_or(&Value::Empty);

    match condition.operator {
        Operator::Equals => answer.to_text() == condition.value.to_text(),
        Operator::NotEquals => answer.to_text() != condition.value.to_text(),
        Operator::Contains => answer.to_text().contains(&condition.value.to_text()),
        Operator::NotContains => !answer.to_text().contains(&condition.value.to_text()),
        Operator::GreaterThan => ordered(answer, &condition.value, |a, b| a > b),
        Operator::LessThan => ordered(answer, &condition.value, |a, b| a < b),
        Operator::GreaterThanOrEqual => ordered(answer, &condition.value, |a, b| a >= b),
        Operator::LessThanOrEqual => ordered(answer, &condition.value, |a, b| a <= b),
        Operator::IsEmpty => answer.is_empty(),
        Operator::IsNotEmpty => !answer.is_empty(),
    }
}

/// Numeric comparison, failing closed when either side is non-numeric.
fn ordered(lhs: &Value, rhs: &Value, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (lhs.to_number(), rhs.to_number()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}
