use log::debug;

use crate::expression::{BinaryOperator, Expression, UnaryOperator};
use crate::parser::errors::ParseError;
use crate::parser::token::{tokenize, Token};

/// Hard cap on grammar recursion (parentheses, sign chains, power towers),
/// so pathological inputs such as thousands of nested parentheses cannot
/// exhaust the stack.
const MAX_NESTING_DEPTH: usize = 128;

/// Parse normalized text into an expression tree
///
/// The grammar, tightest binding first: parenthesized groups, unary signs,
/// `^` (right-associative), then `*` `/` `%`, then `+` `-` (both
/// left-associative). Only decimal literals, the eight operators, and
/// parentheses have production rules; identifiers, calls, and every other
/// construct are unrepresentable and fail the parse outright.
///
/// # Errors
///
/// Returns a [`ParseError`] for empty input, characters outside the accepted
/// alphabet, malformed literals, unbalanced parentheses, operators without
/// operands, and nesting beyond [`MAX_NESTING_DEPTH`]. Nothing is evaluated
/// on the error path and no prefix of the input is silently accepted.
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser {
        tokens: &tokens,
        cursor: 0,
        open_parens: 0,
    };
    let expression = parser.parse_sum(0)?;

    // The whole token stream must form one expression; a leftover token
    // means the input was not pure arithmetic.
    match parser.peek() {
        None => {
            debug!("Parsed '{}' into {}", text, expression);
            Ok(expression)
        }
        Some(Token::CloseParen) => Err(ParseError::UnbalancedParentheses),
        Some(_) => Err(ParseError::UnexpectedOperatorPlacement),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    open_parens: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn parse_sum(&mut self, depth: usize) -> Result<Expression, ParseError> {
        let mut left = self.parse_product(depth)?;
        while let Some(token) = self.peek() {
            let op = match token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.cursor += 1;
            let right = self.parse_product(depth)?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_product(&mut self, depth: usize) -> Result<Expression, ParseError> {
        let mut left = self.parse_power(depth)?;
        while let Some(token) = self.peek() {
            let op = match token {
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
                Token::Percent => BinaryOperator::Mod,
                _ => break,
            };
            self.cursor += 1;
            let right = self.parse_power(depth)?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_power(&mut self, depth: usize) -> Result<Expression, ParseError> {
        let base = self.parse_unary(depth)?;
        if self.peek() == Some(Token::Caret) {
            self.cursor += 1;
            // Right-associative: the exponent swallows any further tower.
            let exponent = self.parse_power(deeper(depth)?)?;
            Ok(Expression::binary(BinaryOperator::Pow, base, exponent))
        } else {
            Ok(base)
        }
    }

    fn parse_unary(&mut self, depth: usize) -> Result<Expression, ParseError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.cursor += 1;
                let operand = self.parse_unary(deeper(depth)?)?;
                Ok(Expression::unary(UnaryOperator::Plus, operand))
            }
            Some(Token::Minus) => {
                self.cursor += 1;
                let operand = self.parse_unary(deeper(depth)?)?;
                Ok(Expression::unary(UnaryOperator::Minus, operand))
            }
            _ => self.parse_atom(depth),
        }
    }

    fn parse_atom(&mut self, depth: usize) -> Result<Expression, ParseError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expression::Number(value)),
            Some(Token::OpenParen) => {
                self.open_parens += 1;
                let inner = self.parse_sum(deeper(depth)?)?;
                match self.advance() {
                    Some(Token::CloseParen) => {
                        self.open_parens -= 1;
                        Ok(inner)
                    }
                    _ => Err(ParseError::UnbalancedParentheses),
                }
            }
            Some(Token::CloseParen) => {
                // `)` where an operand belongs: a stray closer at top level,
                // or a missing operand inside a group such as `()` or `(2+)`.
                if self.open_parens > 0 {
                    Err(ParseError::UnexpectedOperatorPlacement)
                } else {
                    Err(ParseError::UnbalancedParentheses)
                }
            }
            Some(_) => Err(ParseError::UnexpectedOperatorPlacement),
            None => {
                // Ran out of tokens where an operand was required.
                if self.open_parens > 0 {
                    Err(ParseError::UnbalancedParentheses)
                } else {
                    Err(ParseError::UnexpectedOperatorPlacement)
                }
            }
        }
    }
}

fn deeper(depth: usize) -> Result<usize, ParseError> {
    if depth >= MAX_NESTING_DEPTH {
        Err(ParseError::NestingTooDeep(MAX_NESTING_DEPTH))
    } else {
        Ok(depth + 1)
    }
}
