//! Integer literal lexing (spec.md §4.1 rule 7).
//!
//! JaoLang has no float literals: a maximal run of decimal digits is always
//! an `INT`.

use jaoc_util::JaoResult;

use super::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self) -> JaoResult<TokenKind> {
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        let value: i64 = text.parse().map_err(|_| self.unrecognized_char(self.cursor.current_char()))?;
        Ok(TokenKind::Int(value))
    }
}
