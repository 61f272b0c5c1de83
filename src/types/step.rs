use std::fmt;

use super::{Answers, ConditionSet};

/// One page of a multi-step form, optionally gated by a [`ConditionSet`].
///
/// Steps are totally ordered by `order`, which is a sort key rather than a
/// dense index: gaps are fine. Uniqueness of `order` within a form is an
/// invariant of the owning form aggregate and is not validated here; the
/// sequencer resolves duplicates with a first-in-input-wins tie-break.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub order: u32,
    pub title: String,
    pub required: bool,
    pub conditions: ConditionSet,
}

impl Step {
    /// Create a step with no restrictions: optional and always visible.
    #[must_use]
    pub fn new(order: u32, title: impl Into<String>) -> Self {
        Self {
            order,
            title: title.into(),
            required: false,
            conditions: ConditionSet::new(),
        }
    }

    /// Mark whether this step must be completed before final submission.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Gate this step's visibility behind a condition set.
    #[must_use]
    pub fn gated_by(mut self, conditions: ConditionSet) -> Self {
        self.conditions = conditions;
        self
    }

    /// Whether this step is visible under the given answers.
    #[must_use]
    pub fn visible(&self, answers: &Answers) -> bool {
        self.conditions.evaluate(answers)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} ({})", self.order, self.title)
    }
}
