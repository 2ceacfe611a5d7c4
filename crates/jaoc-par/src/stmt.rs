//! Statement grammar (spec.md §4.2), plus the `funcDecl`/`returnStmt`
//! productions SPEC_FULL.md §4.2 adds for the AST's otherwise-unreachable
//! `FuncDecl`/`Return` nodes.

use jaoc_lex::TokenKind;
use jaoc_util::{JaoResult, ParseError, Symbol};

use crate::ast::{Block, Param, Stmt, Ty};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_block(&mut self) -> JaoResult<Block> {
        let start = self.current().span;
        self.expect(TokenKind::LBlock)?;
        let mut stmts = Vec::new();
        while !self.at(&TokenKind::RBlock) {
            if self.at(&TokenKind::Eof) {
                return Err(ParseError::MissingDelimiter {
                    delimiter: ">>",
                    span: self.current().span,
                }
                .into());
            }
            stmts.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBlock)?;
        Ok(Block {
            stmts,
            span: self.merged_span(start),
        })
    }

    fn parse_statement(&mut self) -> JaoResult<Stmt> {
        match self.current().kind {
            TokenKind::IntTy | TokenKind::StringTy | TokenKind::BoolTy => self.parse_var_decl(),
            TokenKind::Iden(_) => self.parse_assign_or_call(),
            TokenKind::If => self.parse_if(),
            TokenKind::For => self.parse_for(),
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::Print => self.parse_print(),
            TokenKind::LBlock => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::FuncDecl => self.parse_func_decl(),
            TokenKind::Return => self.parse_return(),
            _ => Err(ParseError::UnexpectedToken {
                expected: "statement".into(),
                found: self.current().kind.describe(),
                span: self.current().span,
            }
            .into()),
        }
    }

    fn parse_type(&mut self) -> JaoResult<Ty> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::IntTy => Ok(Ty::Int),
            TokenKind::StringTy => Ok(Ty::Str),
            TokenKind::BoolTy => Ok(Ty::Bool),
            other => Err(ParseError::UnexpectedToken {
                expected: "type".into(),
                found: other.describe(),
                span: tok.span,
            }
            .into()),
        }
    }

    fn parse_var_decl(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        let ty = self.parse_type()?;
        let name = self.expect_ident()?;
        let init = if self.at(&TokenKind::Assign) {
            self.advance()?;
            Some(self.parse_bexpr()?)
        } else {
            None
        };
        Ok(Stmt::VarDecl {
            ty,
            name,
            init,
            span: self.merged_span(start),
        })
    }

    fn parse_assign_or_call(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        let name = self.expect_ident()?;
        if self.at(&TokenKind::Assign) {
            self.advance()?;
            let value = self.parse_bexpr()?;
            Ok(Stmt::Assign {
                name,
                value,
                span: self.merged_span(start),
            })
        } else if self.at(&TokenKind::LPar) {
            let args = self.parse_call_args()?;
            let span = self.merged_span(start);
            Ok(Stmt::ExprStmt {
                expr: crate::ast::Expr::Call { name, args, span },
                span,
            })
        } else {
            Err(ParseError::UnexpectedToken {
                expected: "'vira' or '('".into(),
                found: self.current().kind.describe(),
                span: self.current().span,
            }
            .into())
        }
    }

    fn parse_if(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        self.advance()?; // se_liga_jao
        let cond = self.parse_bexpr()?;
        let then_block = self.parse_block()?;
        let else_block = if self.at(&TokenKind::Else) {
            self.advance()?;
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_block,
            else_block,
            span: self.merged_span(start),
        })
    }

    fn parse_for(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        self.advance()?; // vai_rodando_ae
        let cond = self.parse_bexpr()?;
        let body = self.parse_block()?;
        Ok(Stmt::For {
            cond,
            body,
            span: self.merged_span(start),
        })
    }

    fn parse_repeat(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        self.advance()?; // repete_ate_jao
        let body = self.parse_block()?;
        if !self.at(&TokenKind::When) {
            return Err(ParseError::MissingQuando {
                span: self.current().span,
            }
            .into());
        }
        self.advance()?;
        let cond = self.parse_bexpr()?;
        Ok(Stmt::Repeat {
            body,
            cond,
            span: self.merged_span(start),
        })
    }

    fn parse_print(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        self.advance()?; // mostra_ae
        self.expect(TokenKind::LPar)?;
        let expr = self.parse_bexpr()?;
        self.expect(TokenKind::RPar)?;
        Ok(Stmt::Print {
            expr,
            span: self.merged_span(start),
        })
    }

    fn parse_func_decl(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        self.advance()?; // cria_ai
        let name = self.expect_ident()?;
        self.expect(TokenKind::LPar)?;
        let mut params = Vec::new();
        if !self.at(&TokenKind::RPar) {
            loop {
                let pspan = self.current().span;
                let ty = self.parse_type()?;
                let pname = self.expect_ident()?;
                params.push(Param {
                    ty,
                    name: pname,
                    span: self.merged_span(pspan),
                });
                if self.at(&TokenKind::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::RPar)?;
        let ret_ty = match self.current().kind {
            TokenKind::IntTy | TokenKind::StringTy | TokenKind::BoolTy => self.parse_type()?,
            _ => Ty::Void,
        };
        let body = self.parse_block()?;
        Ok(Stmt::FuncDecl {
            name,
            params,
            ret_ty,
            body,
            span: self.merged_span(start),
        })
    }

    fn parse_return(&mut self) -> JaoResult<Stmt> {
        let start = self.current().span;
        self.advance()?; // devolve_ai
        let expr = self.parse_bexpr()?;
        Ok(Stmt::Return {
            expr,
            span: self.merged_span(start),
        })
    }

    pub(crate) fn expect_ident(&mut self) -> JaoResult<Symbol> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Iden(sym) => Ok(sym),
            _ => Err(ParseError::MissingIdentifierAfterType { span: tok.span }.into()),
        }
    }

    pub(crate) fn parse_call_args(&mut self) -> JaoResult<Vec<crate::ast::Expr>> {
        self.expect(TokenKind::LPar)?;
        let mut args = Vec::new();
        if !self.at(&TokenKind::RPar) {
            args.push(self.parse_bexpr()?);
            while self.at(&TokenKind::Comma) {
                self.advance()?;
                args.push(self.parse_bexpr()?);
            }
        }
        self.expect(TokenKind::RPar)?;
        Ok(args)
    }
}
