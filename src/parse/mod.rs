mod error;
mod grammar;

pub use error::ParseError;

use crate::ConditionSet;

/// Parse a condition chain from its DSL form into a [`ConditionSet`].
///
/// Blank input (or comments only) parses as the empty set, which always
/// evaluates to visible.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a valid condition chain,
/// pointing at the offset where the grammar gave up.
pub fn parse(input: &str) -> Result<ConditionSet, ParseError> {
    use winnow::Parser;
    grammar::condition_chain
        .parse(input)
        .map_err(|e| ParseError::new(e.offset(), e.inner().to_string()))
}
