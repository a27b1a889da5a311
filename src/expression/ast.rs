/// Binary arithmetic operations the evaluator is willing to perform
///
/// The set is closed: the parser has no production rule that could yield
/// anything outside it, so no runtime filtering is ever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
}

/// Unary sign operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

/// A parsed arithmetic expression
///
/// Trees are built bottom-up in a single parse pass, never mutated, and
/// dropped after one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}
