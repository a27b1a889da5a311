//! Expression tree and its evaluation, split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{BinaryOperator, Expression, UnaryOperator};
pub use errors::EvalError;

#[cfg(test)]
mod tests;
