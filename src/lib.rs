//! Safemath - safe evaluation of arithmetic expressions
//!
//! This library parses and computes plain arithmetic from untrusted text.
//! The grammar knows only decimal literals, the eight arithmetic operators
//! (`+`, `-`, `*`, `/`, `^`, `%` and the unary signs), and parenthesized
//! grouping. Name lookups, attribute access, and function calls have no
//! production rule at all, so they are rejected before anything is evaluated
//! rather than filtered after the fact.

pub mod expression;
pub mod normalize;
pub mod parser;

use thiserror::Error;

// Re-export the main public API
pub use expression::{BinaryOperator, EvalError, Expression, UnaryOperator};
pub use normalize::normalize;
pub use parser::{parse, ParseError};

/// Any failure the evaluation pipeline can produce
///
/// Callers are expected to map every variant to one uniform fallback message
/// rather than surface the detail to end users; the variants exist so the
/// failure mode stays inspectable and testable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Normalize, parse, and evaluate an arithmetic expression
///
/// This is a convenience function that runs the full pipeline on a candidate
/// string. The caller is responsible for extracting the candidate from a
/// larger message and stripping wrapper phrases ("calculate", "what is")
/// beforehand.
///
/// # Errors
///
/// Returns a [`CalcError`] when the input is not a well-formed arithmetic
/// expression or when evaluation hits division by zero, a domain error, or
/// overflow. No partial result is ever produced.
///
/// # Examples
///
/// ```
/// use safemath::evaluate_expression;
///
/// let value = evaluate_expression("3 * -2 + (4 - 1)");
/// assert!(value.is_ok());
/// if let Ok(value) = value {
///     assert!((value - -3.0).abs() < 1e-9);
/// }
/// ```
pub fn evaluate_expression(input: &str) -> Result<f64, CalcError> {
    let canonical = normalize(input);
    let expression = parse(&canonical)?;
    let value = expression.evaluate()?;
    Ok(value)
}
