mod answers;
mod condition;
mod error;
mod step;
mod value;

pub use answers::Answers;
pub use condition::{Combinator, Condition, ConditionBuilder, ConditionSet, Operator, field};
pub use error::ConditionError;
pub use step::Step;
pub use value::Value;
