use thiserror::Error;

/// Errors that can occur while parsing an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Malformed number literal: '{0}'")]
    MalformedNumber(String),
    #[error("Operator without an operand")]
    UnexpectedOperatorPlacement,
    #[error("Expression nesting exceeds {0} levels")]
    NestingTooDeep(usize),
}
