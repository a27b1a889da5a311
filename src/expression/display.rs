use std::fmt;

use crate::expression::ast::{BinaryOperator, Expression, UnaryOperator};

impl BinaryOperator {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Pow => "^",
            BinaryOperator::Mod => "%",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 1,
            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 2,
            BinaryOperator::Pow => 3,
        }
    }
}

/// Renders trees in the grammar's own notation, parenthesizing only where
/// precedence demands it, so a formatted tree re-parses to an equal tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Number(_) => 5,
                Expression::Unary { .. } => 4,
                Expression::Binary { op, .. } => op.precedence(),
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Binary { op, left, right } => {
                    let p = op.precedence();
                    // Power is right-associative; the other binaries are
                    // left-associative.
                    let (need_left, need_right) = if *op == BinaryOperator::Pow {
                        (precedence(left) <= p, precedence(right) < p)
                    } else {
                        (precedence(left) < p, precedence(right) <= p)
                    };
                    write_with_parens(f, left, need_left)?;
                    write!(f, " {} ", op.symbol())?;
                    write_with_parens(f, right, need_right)
                }
                Expression::Unary { op, operand } => {
                    match op {
                        UnaryOperator::Plus => write!(f, "+")?,
                        UnaryOperator::Minus => write!(f, "-")?,
                    }
                    write_with_parens(f, operand, precedence(operand) < 4)
                }
            }
        }

        fmt_expression(f, self)
    }
}
