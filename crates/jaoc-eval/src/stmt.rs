//! Statement evaluation (spec.md §4.3).

use std::io::{BufRead, Write};

use jaoc_par::ast::{Block, Stmt, Ty};
use jaoc_util::{JaoResult, NameError, TypeError};

use crate::eval::{Evaluator, Flow};
use crate::registry::FunctionDef;
use crate::scope::Scope;
use crate::value::Value;

impl<'a, R: BufRead, W: Write> Evaluator<'a, R, W> {
    pub(crate) fn eval_stmts(&mut self, stmts: &[Stmt], scope: &Scope) -> JaoResult<Flow> {
        for stmt in stmts {
            match self.eval_stmt(stmt, scope)? {
                Flow::Normal => {}
                returned @ Flow::Return(_) => return Ok(returned),
            }
        }
        Ok(Flow::Normal)
    }

    /// A nested block gets a fresh child scope (spec.md §4.3 "Block").
    pub(crate) fn eval_block(&mut self, block: &Block, scope: &Scope) -> JaoResult<Flow> {
        let child = scope.child();
        self.eval_stmts(&block.stmts, &child)
    }

    fn eval_stmt(&mut self, stmt: &Stmt, scope: &Scope) -> JaoResult<Flow> {
        match stmt {
            Stmt::Block(block) => self.eval_block(block, scope),
            Stmt::VarDecl { ty, name, init, span } => {
                let value = match init {
                    Some(expr) => {
                        let (value, found_ty) = self.eval_expr(expr, scope)?;
                        if found_ty != *ty {
                            return Err(TypeError::AssignmentMismatch {
                                name: self.resolve(*name),
                                declared_type: ty.describe(),
                                value_type: found_ty.describe(),
                                span: *span,
                            }
                            .into());
                        }
                        value
                    }
                    None => Value::default_for(*ty),
                };
                // Variables and functions share one namespace (spec.md §3:
                // an identifier may be declared at most once in the same
                // table), so a name already registered as a function is
                // just as much a redeclaration as one already in scope.
                if self.functions.contains(*name) || !scope.declare(*name, *ty, value) {
                    return Err(NameError::Redeclared {
                        name: self.resolve(*name),
                        span: *span,
                    }
                    .into());
                }
                Ok(Flow::Normal)
            }
            Stmt::Assign { name, value, span } => {
                let (declared_ty, _) = scope.get(*name).ok_or_else(|| NameError::Undeclared {
                    name: self.resolve(*name),
                    span: *span,
                })?;
                let (new_value, found_ty) = self.eval_expr(value, scope)?;
                if found_ty != declared_ty {
                    return Err(TypeError::AssignmentMismatch {
                        name: self.resolve(*name),
                        declared_type: declared_ty.describe(),
                        value_type: found_ty.describe(),
                        span: *span,
                    }
                    .into());
                }
                scope.set(*name, new_value);
                Ok(Flow::Normal)
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
                span,
            } => {
                let (value, ty) = self.eval_expr(cond, scope)?;
                self.require_bool(ty, "se_liga_jao", *span)?;
                if matches!(value, Value::Bool(true)) {
                    self.eval_block(then_block, scope)
                } else if let Some(else_block) = else_block {
                    self.eval_block(else_block, scope)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::For { cond, body, span } => {
                loop {
                    let (value, ty) = self.eval_expr(cond, scope)?;
                    self.require_bool(ty, "vai_rodando_ae", *span)?;
                    if !matches!(value, Value::Bool(true)) {
                        break;
                    }
                    // Corrected per spec.md §9: propagate return-signals
                    // through the loop rather than discarding them.
                    match self.eval_stmts(&body.stmts, scope)? {
                        Flow::Normal => {}
                        returned @ Flow::Return(_) => return Ok(returned),
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Repeat { body, cond, span } => {
                loop {
                    match self.eval_stmts(&body.stmts, scope)? {
                        Flow::Normal => {}
                        returned @ Flow::Return(_) => return Ok(returned),
                    }
                    let (value, ty) = self.eval_expr(cond, scope)?;
                    self.require_bool(ty, "repete_ate_jao", *span)?;
                    if !matches!(value, Value::Bool(true)) {
                        break;
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Print { expr, .. } => {
                let (value, _) = self.eval_expr(expr, scope)?;
                writeln!(self.stdout, "{}", value.render()).expect("stdout write failed");
                Ok(Flow::Normal)
            }
            Stmt::FuncDecl {
                name,
                params,
                ret_ty,
                body,
                span,
            } => {
                // Shares a namespace with variables (spec.md §3), so a name
                // already bound in this scope is a redeclaration too.
                let declared = !scope.contains_local(*name)
                    && self.functions.declare(
                        *name,
                        FunctionDef {
                            params: params.clone(),
                            ret_ty: *ret_ty,
                            body: body.clone(),
                        },
                    );
                if !declared {
                    return Err(NameError::Redeclared {
                        name: self.resolve(*name),
                        span: *span,
                    }
                    .into());
                }
                Ok(Flow::Normal)
            }
            Stmt::Return { expr, .. } => {
                let (value, _) = self.eval_expr(expr, scope)?;
                Ok(Flow::Return(value))
            }
            Stmt::ExprStmt { expr, .. } => {
                self.eval_expr(expr, scope)?;
                Ok(Flow::Normal)
            }
        }
    }

    fn require_bool(&self, ty: Ty, construct: &'static str, span: jaoc_util::Span) -> JaoResult<()> {
        if ty != Ty::Bool {
            return Err(TypeError::NonBoolCondition {
                construct,
                found: ty.describe(),
                span,
            }
            .into());
        }
        Ok(())
    }
}
