use thiserror::Error;

/// A condition chain that failed to parse.
///
/// Carries the byte offset into the input where the chain stopped making
/// sense plus the grammar's expectation at that point, so admin tooling can
/// point at the offending spot in an authored gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid condition chain at offset {offset}: {message}")]
pub struct ParseError {
    offset: usize,
    message: String,
}

impl ParseError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }

    /// Byte offset into the input at which parsing failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
