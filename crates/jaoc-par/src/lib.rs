//! Recursive-descent parser for JaoLang: a token stream to an AST.
//!
//! One-token lookahead throughout, driven directly by [`jaoc_lex::Lexer`]'s
//! `current`/`advance` contract. There is no error recovery (spec.md §1
//! non-goals): the first structural fault returns and the caller aborts.

pub mod ast;
#[cfg(test)]
mod edge_cases;
mod expr;
mod stmt;

use jaoc_lex::{Lexer, Token, TokenKind};
use jaoc_util::{Interner, JaoResult, ParseError, Span};

use ast::Program;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, interner: &'a mut Interner) -> JaoResult<Self> {
        Ok(Self {
            lexer: Lexer::new(source, interner)?,
        })
    }

    /// Parses the whole program: a root block followed by `EOF`.
    pub fn parse_program(&mut self) -> JaoResult<Program> {
        let block = self.parse_block()?;
        if self.current().kind != TokenKind::Eof {
            return Err(ParseError::TrailingGarbage {
                span: self.current().span,
            }
            .into());
        }
        Ok(block)
    }

    fn current(&self) -> &Token {
        self.lexer.current()
    }

    fn advance(&mut self) -> JaoResult<Token> {
        let tok = self.lexer.current().clone();
        self.lexer.advance()?;
        Ok(tok)
    }

    /// Consumes the current token if it matches `kind`, otherwise a
    /// [`ParseError::UnexpectedToken`].
    fn expect(&mut self, kind: TokenKind) -> JaoResult<Token> {
        if self.current().kind == kind {
            self.advance()
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind.describe(),
                found: self.current().kind.describe(),
                span: self.current().span,
            }
            .into())
        }
    }

    fn at(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    fn merged_span(&self, start: Span) -> Span {
        start.merge(self.current().span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> JaoResult<Program> {
        let mut interner = Interner::new();
        Parser::new(source, &mut interner)?.parse_program()
    }

    #[test]
    fn parses_empty_program() {
        let program = parse("<< >>").unwrap();
        assert!(program.stmts.is_empty());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse("<< >> inteirao").is_err());
    }

    #[test]
    fn rejects_missing_rblock() {
        assert!(parse("<<").is_err());
    }
}
