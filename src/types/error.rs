use thiserror::Error;

/// Data-integrity errors in persisted condition definitions.
///
/// These surface at the decode boundary (wire format, DSL, `FromStr`), never
/// during evaluation: a condition that decoded successfully always evaluates
/// to a plain boolean. The caller decides whether a corrupted definition hides
/// the step, shows it, or raises an admin-facing warning.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConditionError {
    #[error("unknown operator '{name}'")]
    UnknownOperator { name: String },

    #[error("unknown combinator '{name}'")]
    UnknownCombinator { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operator_message() {
        let err = ConditionError::UnknownOperator {
            name: "matches_regex".into(),
        };
        assert_eq!(err.to_string(), "unknown operator 'matches_regex'");
    }

    #[test]
    fn unknown_combinator_message() {
        let err = ConditionError::UnknownCombinator { name: "XOR".into() };
        assert_eq!(err.to_string(), "unknown combinator 'XOR'");
    }
}
