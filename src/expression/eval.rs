use log::debug;

use crate::expression::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::expression::errors::EvalError;

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

impl BinaryOperator {
    /// Apply the operator's fixed numeric function to evaluated operands
    ///
    /// The mapping is total over the enum; every operator has exactly one
    /// numeric function.
    fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    debug!("Division by zero attempted");
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            BinaryOperator::Mod => {
                if right == 0.0 {
                    debug!("Modulo by zero attempted");
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left % right)
                }
            }
            BinaryOperator::Pow => {
                if left < 0.0 && !is_integer(right) {
                    debug!(
                        "Negative base with fractional exponent: {}^{}",
                        left, right
                    );
                    Err(EvalError::DomainError)
                } else {
                    Ok(left.powf(right))
                }
            }
        }
    }
}

impl UnaryOperator {
    fn apply(self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Plus => operand,
            UnaryOperator::Minus => -operand,
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division or modulo by zero
    /// - Raising a negative base to a fractional exponent (no real result)
    /// - Any operation whose result is not representable as a finite `f64`
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                let value = op.apply(left, right)?;
                if value.is_finite() {
                    Ok(value)
                } else {
                    debug!("Non-finite result from {} {:?} {}", left, op, right);
                    Err(EvalError::Overflow)
                }
            }
            Expression::Unary { op, operand } => Ok(op.apply(operand.evaluate()?)),
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::is_integer;

    #[test]
    fn test_is_integer() {
        assert!(is_integer(1.0));
        assert!(is_integer(42.0));
        assert!(is_integer(-17.0));
        assert!(!is_integer(1.5));
        assert!(!is_integer(0.333_333));

        assert!(is_integer(2_f64.powi(53)));
        assert!(is_integer(1e15));
    }
}
