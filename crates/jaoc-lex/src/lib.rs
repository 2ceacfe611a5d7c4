//! Lexical analysis for JaoLang source text.
//!
//! Turns a source string into a stream of [`Token`]s via a single-token
//! lookahead cursor ([`Lexer::current`] / [`Lexer::advance`]).

mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
