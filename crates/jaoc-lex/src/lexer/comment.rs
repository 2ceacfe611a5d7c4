//! Whitespace and comment skipping (spec.md §4.1 rules 1-2).
//!
//! JaoLang only has line comments (`//` to end of line); there is no block
//! comment syntax.

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\n' | '\r' => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }
}
