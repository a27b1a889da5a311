//! Restricted arithmetic grammar, split into tokenizer and parser

mod errors;
mod grammar;
mod token;

pub use errors::ParseError;
pub use grammar::parse;
