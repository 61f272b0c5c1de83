use thiserror::Error;

use crate::parse::ParseError;
use crate::ConditionError;

/// Unified error type covering DSL parsing, persisted-definition decoding,
/// and the JSON wire codec.
///
/// Returned by convenience methods like
/// [`ConditionSet::from_dsl()`](crate::ConditionSet::from_dsl).
#[derive(Debug, Error)]
pub enum StepgateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Wire(#[from] crate::serial::WireError),
}
