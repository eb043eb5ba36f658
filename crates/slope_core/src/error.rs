use thiserror::Error;

/// The parser's one diagnostic. Kept as data so wording can be asserted on
/// independently of where in the grammar the failure happened.
pub const PARSE_DIAGNOSTIC: &str =
    "Failed during parsing. The equation isn't grammatically correct.";

/// Errors from the scanner. Both carry the byte offset into the input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that no scanner state can classify.
    #[error("Unknown input '{ch}' at position {pos}")]
    UnknownChar { ch: char, pos: usize },
    /// The line ended partway through a keyword (`si`, `co`, `sq`, `ta`).
    #[error("Unexpected end of input at position {pos}")]
    UnexpectedEof { pos: usize },
}

/// Grammar failure. There is deliberately one message for every failure
/// mode; the operator's remedy is always the same (retype the equation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new() -> Self {
        Self {
            message: PARSE_DIAGNOSTIC.to_string(),
        }
    }
}

impl Default for ParseError {
    fn default() -> Self {
        Self::new()
    }
}

/// Umbrella for the single build pass (tokenize then parse) that precedes
/// any evaluation. A tree that reaches the evaluator is well-formed by
/// construction, so evaluation itself has no error kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
