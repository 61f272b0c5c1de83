use std::collections::HashMap;

use super::Value;

/// A read-only snapshot of the answers submitted so far, keyed by field id.
///
/// The owning web layer collects one of these per request; the evaluator only
/// ever reads it. A field with no entry reads as [`Value::Empty`], which is a
/// policy (the field was not reached yet), not an error.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    data: HashMap<String, Value>,
}

impl Answers {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous one for the same field.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value.into());
        self
    }

    /// Record an answer (mutable reference version).
    pub fn insert(&mut self, field: &str, value: Value) {
        self.data.insert(field.to_owned(), value);
    }

    /// Clear a field's answer, as when the user navigates back and empties it.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.data.remove(field)
    }

    /// Look up an answer. `None` means the field has not been answered.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
