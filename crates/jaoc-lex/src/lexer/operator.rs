//! Two-character operator and bracket-pair lexing.
//!
//! `<<`/`>>` double as both block delimiters and (single-character) the
//! relational `<`/`>` operators; spec.md §4.1 rule 4 requires the
//! two-character form to be tried first.

use jaoc_util::JaoResult;

use super::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    pub(super) fn lex_lt_or_lblock(&mut self) -> JaoResult<TokenKind> {
        self.cursor.advance();
        if self.cursor.current_char() == '<' {
            self.cursor.advance();
            Ok(TokenKind::LBlock)
        } else {
            Ok(TokenKind::Lt)
        }
    }

    pub(super) fn lex_gt_or_rblock(&mut self) -> JaoResult<TokenKind> {
        self.cursor.advance();
        if self.cursor.current_char() == '>' {
            self.cursor.advance();
            Ok(TokenKind::RBlock)
        } else {
            Ok(TokenKind::Gt)
        }
    }

    pub(super) fn lex_eq(&mut self) -> JaoResult<TokenKind> {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            Ok(TokenKind::EqEq)
        } else {
            // A lone '=' is a named single-character token (spec.md §4.1
            // rule 5), not an error: no grammar production consumes it.
            Ok(TokenKind::Equal)
        }
    }

    pub(super) fn lex_and(&mut self) -> JaoResult<TokenKind> {
        self.cursor.advance();
        if self.cursor.current_char() == '&' {
            self.cursor.advance();
            Ok(TokenKind::And)
        } else {
            Err(self.unrecognized_char('&'))
        }
    }

    pub(super) fn lex_or(&mut self) -> JaoResult<TokenKind> {
        self.cursor.advance();
        if self.cursor.current_char() == '|' {
            self.cursor.advance();
            Ok(TokenKind::Or)
        } else {
            Err(self.unrecognized_char('|'))
        }
    }
}
