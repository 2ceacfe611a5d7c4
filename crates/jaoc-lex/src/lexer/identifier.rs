//! Identifier and keyword lexing (spec.md §4.1 rules 3, 8, 9).
//!
//! Keyword recognition takes precedence over identifier recognition: the
//! scanned word is looked up in the keyword table first, and only falls
//! through to `IDEN` (interned) when it isn't one of JaoLang's slang
//! keywords.

use super::core::{is_ident_continue, Lexer};
use crate::token::TokenKind;

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("inteirao", TokenKind::IntTy),
    ("falae", TokenKind::StringTy),
    ("verdade_ou_farsa", TokenKind::BoolTy),
    ("eh_tudo", TokenKind::True),
    ("eh_nada", TokenKind::False),
    ("mostra_ae", TokenKind::Print),
    ("escuta_ae_jao", TokenKind::Scan),
    ("se_liga_jao", TokenKind::If),
    ("se_nao_jao", TokenKind::Else),
    ("vai_rodando_ae", TokenKind::For),
    ("repete_ate_jao", TokenKind::Repeat),
    ("quando", TokenKind::When),
    ("vira", TokenKind::Assign),
    ("cria_ai", TokenKind::FuncDecl),
    ("devolve_ai", TokenKind::Return),
];

impl<'a> Lexer<'a> {
    pub(super) fn lex_identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);

        for (word, kind) in KEYWORDS {
            if *word == text {
                return kind.clone();
            }
        }

        TokenKind::Iden(self.interner.intern(text))
    }
}
