use crate::expression::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::expression::errors::EvalError;

fn num(value: f64) -> Expression {
    Expression::Number(value)
}

#[test]
fn test_literal_evaluates_to_itself() {
    let result = num(42.5).evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 42.5).abs() < 1e-9);
    }
}

#[test]
fn test_basic_binary_operations() {
    let cases = [
        (BinaryOperator::Add, 7.0, 3.0, 10.0),
        (BinaryOperator::Sub, 7.0, 3.0, 4.0),
        (BinaryOperator::Mul, 7.0, 3.0, 21.0),
        (BinaryOperator::Div, 7.0, 2.0, 3.5),
        (BinaryOperator::Pow, 2.0, 10.0, 1024.0),
        (BinaryOperator::Mod, 7.0, 3.0, 1.0),
    ];
    for (op, left, right, expected) in cases {
        let result = Expression::binary(op, num(left), num(right)).evaluate();
        assert!(result.is_ok(), "{:?} failed: {:?}", op, result);
        if let Ok(value) = result {
            assert!(
                (value - expected).abs() < 1e-9,
                "{} {:?} {} = {}, expected {}",
                left,
                op,
                right,
                value,
                expected
            );
        }
    }
}

#[test]
fn test_unary_operators() {
    let result = Expression::unary(UnaryOperator::Minus, num(5.0)).evaluate();
    assert_eq!(result, Ok(-5.0));

    let result = Expression::unary(UnaryOperator::Plus, num(5.0)).evaluate();
    assert_eq!(result, Ok(5.0));

    let nested = Expression::unary(
        UnaryOperator::Minus,
        Expression::unary(UnaryOperator::Minus, num(4.0)),
    );
    assert_eq!(nested.evaluate(), Ok(4.0));
}

#[test]
fn test_division_by_zero() {
    let result = Expression::binary(BinaryOperator::Div, num(10.0), num(0.0)).evaluate();
    assert_eq!(result, Err(EvalError::DivisionByZero));

    let result = Expression::binary(BinaryOperator::Div, num(10.0), num(-0.0)).evaluate();
    assert_eq!(result, Err(EvalError::DivisionByZero));
}

#[test]
fn test_modulo_by_zero() {
    let result = Expression::binary(BinaryOperator::Mod, num(10.0), num(0.0)).evaluate();
    assert_eq!(result, Err(EvalError::DivisionByZero));
}

#[test]
fn test_division_by_near_zero_succeeds() {
    // Only exact zero is rejected; tiny divisors are legal arithmetic.
    let result = Expression::binary(BinaryOperator::Div, num(1.0), num(1e-300)).evaluate();
    assert!(result.is_ok());
}

#[test]
fn test_fractional_power() {
    let result = Expression::binary(BinaryOperator::Pow, num(2.0), num(0.5)).evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - std::f64::consts::SQRT_2).abs() < 1e-9);
    }
}

#[test]
fn test_negative_base_fractional_exponent_is_domain_error() {
    let result = Expression::binary(BinaryOperator::Pow, num(-8.0), num(0.5)).evaluate();
    assert_eq!(result, Err(EvalError::DomainError));
}

#[test]
fn test_negative_base_integer_exponent_is_fine() {
    let result = Expression::binary(BinaryOperator::Pow, num(-8.0), num(2.0)).evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 64.0).abs() < 1e-9);
    }

    let result = Expression::binary(BinaryOperator::Pow, num(-2.0), num(3.0)).evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - -8.0).abs() < 1e-9);
    }
}

#[test]
fn test_overflow_is_reported() {
    let result = Expression::binary(BinaryOperator::Mul, num(1e308), num(1e308)).evaluate();
    assert_eq!(result, Err(EvalError::Overflow));

    let result = Expression::binary(BinaryOperator::Pow, num(10.0), num(5000.0)).evaluate();
    assert_eq!(result, Err(EvalError::Overflow));
}

#[test]
fn test_errors_propagate_from_subtrees() {
    let inner = Expression::binary(BinaryOperator::Div, num(1.0), num(0.0));
    let outer = Expression::binary(BinaryOperator::Add, num(5.0), inner);
    assert_eq!(outer.evaluate(), Err(EvalError::DivisionByZero));
}

#[test]
fn test_evaluation_is_deterministic() {
    let expr = Expression::binary(
        BinaryOperator::Add,
        Expression::binary(BinaryOperator::Div, num(1.0), num(3.0)),
        Expression::binary(BinaryOperator::Pow, num(2.0), num(0.5)),
    );
    let first = expr.evaluate();
    let second = expr.evaluate();
    assert!(first.is_ok());
    if let (Ok(a), Ok(b)) = (first, second) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_display_minimal_parentheses() {
    let expr = Expression::binary(
        BinaryOperator::Add,
        num(2.0),
        Expression::binary(BinaryOperator::Mul, num(3.0), num(4.0)),
    );
    assert_eq!(expr.to_string(), "2 + 3 * 4");

    let expr = Expression::binary(
        BinaryOperator::Mul,
        Expression::binary(BinaryOperator::Add, num(2.0), num(3.0)),
        num(4.0),
    );
    assert_eq!(expr.to_string(), "(2 + 3) * 4");
}

#[test]
fn test_display_unary() {
    let expr = Expression::binary(
        BinaryOperator::Mul,
        num(3.0),
        Expression::unary(UnaryOperator::Minus, num(2.0)),
    );
    assert_eq!(expr.to_string(), "3 * -2");

    let expr = Expression::unary(
        UnaryOperator::Minus,
        Expression::binary(BinaryOperator::Pow, num(2.0), num(2.0)),
    );
    assert_eq!(expr.to_string(), "-(2 ^ 2)");
}
