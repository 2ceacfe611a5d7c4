//! Core lexer implementation.

use jaoc_util::{Interner, JaoResult, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for JaoLang source text.
///
/// Exposes the two operations spec.md §4.1 calls for: [`Lexer::current`]
/// returns the most recently produced token, [`Lexer::advance`] produces the
/// next one. The lexer starts already positioned on the token at position 0.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) interner: &'a mut Interner,
    current: Token,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, interner: &'a mut Interner) -> JaoResult<Self> {
        let mut lexer = Self {
            cursor: Cursor::new(source),
            interner,
            current: Token::new(TokenKind::Eof, Span::DUMMY),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        };
        lexer.current = lexer.scan_token()?;
        Ok(lexer)
    }

    /// The most recently produced token.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Produces the next token and makes it the new [`Lexer::current`].
    pub fn advance(&mut self) -> JaoResult<()> {
        self.current = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> JaoResult<Token> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, self.token_span()));
        }

        let c = self.cursor.current_char();
        let kind = match c {
            '<' => self.lex_lt_or_lblock(),
            '>' => self.lex_gt_or_rblock(),
            '(' => {
                self.cursor.advance();
                Ok(TokenKind::LPar)
            }
            ')' => {
                self.cursor.advance();
                Ok(TokenKind::RPar)
            }
            '{' => {
                self.cursor.advance();
                Ok(TokenKind::LBrace)
            }
            '}' => {
                self.cursor.advance();
                Ok(TokenKind::RBrace)
            }
            ',' => {
                self.cursor.advance();
                Ok(TokenKind::Comma)
            }
            '+' => {
                self.cursor.advance();
                Ok(TokenKind::Plus)
            }
            '-' => {
                self.cursor.advance();
                Ok(TokenKind::Minus)
            }
            '*' => {
                self.cursor.advance();
                Ok(TokenKind::Mult)
            }
            '/' => {
                self.cursor.advance();
                Ok(TokenKind::Div)
            }
            '=' => self.lex_eq(),
            '&' => self.lex_and(),
            '|' => self.lex_or(),
            '!' => {
                self.cursor.advance();
                Ok(TokenKind::Not)
            }
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => Ok(self.lex_identifier_or_keyword()),
            c => Err(self.unrecognized_char(c)),
        }?;

        Ok(Token::new(kind, self.token_span()))
    }

    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(crate) fn unrecognized_char(&self, ch: char) -> jaoc_util::JaoError {
        jaoc_util::LexError::UnrecognizedChar {
            ch,
            span: self.token_span(),
        }
        .into()
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<TokenKind> {
        let mut interner = Interner::new();
        let mut lexer = Lexer::new(source, &mut interner).unwrap();
        let mut out = Vec::new();
        loop {
            let kind = lexer.current().kind.clone();
            let done = kind == TokenKind::Eof;
            out.push(kind);
            if done {
                break;
            }
            lexer.advance().unwrap();
        }
        out
    }

    #[test]
    fn skips_whitespace_and_line_comments() {
        let kinds = tokens("  // comment\n  <<  >>  ");
        assert_eq!(kinds, vec![TokenKind::LBlock, TokenKind::RBlock, TokenKind::Eof]);
    }

    #[test]
    fn rejects_unknown_character() {
        let mut interner = Interner::new();
        assert!(Lexer::new("@", &mut interner).is_err());
    }

    #[test]
    fn lone_equal_and_braces_lex_as_named_tokens_not_errors() {
        let kinds = tokens("= { }");
        assert_eq!(
            kinds,
            vec![TokenKind::Equal, TokenKind::LBrace, TokenKind::RBrace, TokenKind::Eof]
        );
    }
}
