//! String literal lexing (spec.md §4.1 rule 6).
//!
//! No escape sequences. An unclosed `"` is a lex error.

use jaoc_util::{JaoResult, LexError};

use super::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> JaoResult<TokenKind> {
        let open_start = self.cursor.position();
        let open_line = self.cursor.line();
        let open_column = self.cursor.column();
        self.cursor.advance(); // opening '"'

        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return Err(LexError::UnterminatedString {
                span: jaoc_util::Span::new(open_start, self.cursor.position(), open_line, open_column),
            }
            .into());
        }

        let text = self.cursor.slice_from(start).to_owned();
        self.cursor.advance(); // closing '"'
        Ok(TokenKind::Str(text))
    }
}
