/*!
# Rust Language Module

This Rust module provides lexical analysis, validation and decoding
of The Golden source text.

*/

#[macro_use]
mod error;
mod lex;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use parse::parse;
pub use parse::validate;
pub use token::Position;
pub use token::Token;
pub use token::TokenKind;

pub mod ast;
