//! Expression grammar (spec.md §4.2): a precedence ladder with one function
//! per level, each left-associative, bottoming out at `unary`/`primary`.
//!
//! ```text
//! bexpr := bterm ( '||' bterm )*
//! bterm := relexpr ( '&&' relexpr )*
//! relexpr := expr ( ('<'|'>'|'==') expr )*
//! expr := term ( ('+'|'-') term )*
//! term := factor ( ('*'|'/') factor )*
//! factor := unary* primary
//! ```

use jaoc_lex::TokenKind;
use jaoc_util::{JaoResult, ParseError};

use crate::ast::{BinOp, Expr, UnOp};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_bexpr(&mut self) -> JaoResult<Expr> {
        let mut lhs = self.parse_bterm()?;
        while self.at(&TokenKind::Or) {
            self.advance()?;
            let rhs = self.parse_bterm()?;
            lhs = self.bin(BinOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_bterm(&mut self) -> JaoResult<Expr> {
        let mut lhs = self.parse_relexpr()?;
        while self.at(&TokenKind::And) {
            self.advance()?;
            let rhs = self.parse_relexpr()?;
            lhs = self.bin(BinOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_relexpr(&mut self) -> JaoResult<Expr> {
        let mut lhs = self.parse_expr()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::EqEq => BinOp::Eq,
                _ => break,
            };
            self.advance()?;
            let rhs = self.parse_expr()?;
            lhs = self.bin(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_expr(&mut self) -> JaoResult<Expr> {
        let mut lhs = self.parse_term()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance()?;
            let rhs = self.parse_term()?;
            lhs = self.bin(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> JaoResult<Expr> {
        let mut lhs = self.parse_factor()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Mult => BinOp::Mul,
                TokenKind::Div => BinOp::Div,
                _ => break,
            };
            self.advance()?;
            let rhs = self.parse_factor()?;
            lhs = self.bin(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `unary* primary` — unary operators are right-recursive so the
    /// leftmost-written one ends up applied outermost, per spec.md §4.2.
    fn parse_factor(&mut self) -> JaoResult<Expr> {
        let start = self.current().span;
        let op = match self.current().kind {
            TokenKind::Plus => Some(UnOp::Pos),
            TokenKind::Minus => Some(UnOp::Neg),
            TokenKind::Not => Some(UnOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            self.advance()?;
            let operand = self.parse_factor()?;
            let span = start.merge(operand.span());
            return Ok(Expr::UnOp {
                op,
                operand: Box::new(operand),
                span,
            });
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> JaoResult<Expr> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::Int(v) => {
                self.advance()?;
                Ok(Expr::IntLit(v, tok.span))
            }
            TokenKind::Str(s) => {
                self.advance()?;
                Ok(Expr::StringLit(s, tok.span))
            }
            TokenKind::True => {
                self.advance()?;
                Ok(Expr::BoolLit(true, tok.span))
            }
            TokenKind::False => {
                self.advance()?;
                Ok(Expr::BoolLit(false, tok.span))
            }
            TokenKind::LPar => {
                self.advance()?;
                let inner = self.parse_bexpr()?;
                self.expect(TokenKind::RPar)?;
                Ok(inner)
            }
            TokenKind::Scan => {
                self.advance()?;
                self.expect(TokenKind::LPar)?;
                self.expect(TokenKind::RPar)?;
                Ok(Expr::Scan(tok.span))
            }
            TokenKind::Iden(name) => {
                self.advance()?;
                if self.at(&TokenKind::LPar) {
                    let args = self.parse_call_args()?;
                    let span = tok.span.merge(self.prev_end_span());
                    Ok(Expr::Call { name, args, span })
                } else {
                    Ok(Expr::Ident(name, tok.span))
                }
            }
            other => Err(ParseError::UnexpectedToken {
                expected: "expression".into(),
                found: other.describe(),
                span: tok.span,
            }
            .into()),
        }
    }

    fn bin(&self, op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        let span = lhs.span().merge(rhs.span());
        Expr::BinOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        }
    }

    /// Best-effort span for "just consumed" closing delimiters; the caller
    /// already holds the new `current()` so this merges against it.
    fn prev_end_span(&self) -> jaoc_util::Span {
        self.current().span
    }
}
