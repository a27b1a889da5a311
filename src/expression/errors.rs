use thiserror::Error;

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Negative base with fractional exponent has no real result")]
    DomainError,
    #[error("Result exceeds the representable range")]
    Overflow,
}
