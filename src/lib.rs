mod error;
mod evaluate;
mod parse;
mod sequence;
#[cfg(feature = "json")]
mod serial;
mod types;

pub use error::StepgateError;
pub use evaluate::{eval_condition, evaluate};
pub use parse::ParseError;
pub use sequence::{
    is_first_step, is_last_step, next_step, previous_step, progress_percentage, visible_steps,
};
#[cfg(feature = "json")]
pub use serial::WireError;
pub use types::{
    Answers, Combinator, Condition, ConditionBuilder, ConditionError, ConditionSet, Operator, Step,
    Value, field,
};
