use log::{debug, warn};

use crate::parser::errors::ParseError;

/// Lexical tokens of the arithmetic grammar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    OpenParen,
    CloseParen,
}

/// Split normalized text into tokens
///
/// The accepted alphabet is exactly: ASCII digits, `.`, the six binary
/// operator symbols, parentheses, and whitespace. Everything else is
/// rejected here, before any tree is built.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedCharacter`] for any character outside the
/// alphabet and [`ParseError::MalformedNumber`] for digit/dot runs that do
/// not form a valid finite literal (e.g. `1.2.3` or a lone `.`).
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    debug!("Tokenizing: '{}'", text);

    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '%' => {
                chars.next();
                tokens.push(Token::Percent);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::OpenParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::CloseParen);
            }
            '0'..='9' | '.' => {
                let mut end = position;
                while let Some(&(next_position, next_ch)) = chars.peek() {
                    if next_ch.is_ascii_digit() || next_ch == '.' {
                        end = next_position + next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &text[position..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::MalformedNumber(literal.to_string()))?;
                // A literal too large for f64 parses to infinity; treat it
                // as malformed rather than letting a non-finite value into
                // the tree.
                if !value.is_finite() {
                    return Err(ParseError::MalformedNumber(literal.to_string()));
                }
                tokens.push(Token::Number(value));
            }
            other => {
                warn!(
                    "Rejecting character '{}' at position {} in '{}'",
                    other, position, text
                );
                return Err(ParseError::UnexpectedCharacter {
                    character: other,
                    position,
                });
            }
        }
    }

    debug!("Tokenized into {} tokens", tokens.len());
    Ok(tokens)
}
