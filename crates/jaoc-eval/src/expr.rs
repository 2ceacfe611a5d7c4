//! Expression evaluation (spec.md §4.3). Every expression yields a
//! `(Value, Ty)` pair.

use std::io::{BufRead, Write};

use jaoc_par::ast::{BinOp, Expr, Ty, UnOp};
use jaoc_util::{ArithError, JaoResult, KindError, NameError, Symbol, TypeError};

use crate::eval::{Evaluator, Flow};
use crate::scope::Scope;
use crate::value::Value;

const BUILTIN_PRINTLN: &str = "Println";

impl<'a, R: BufRead, W: Write> Evaluator<'a, R, W> {
    pub(crate) fn eval_expr(&mut self, expr: &Expr, scope: &Scope) -> JaoResult<(Value, Ty)> {
        match expr {
            Expr::IntLit(v, _) => Ok((Value::Int(*v), Ty::Int)),
            Expr::StringLit(s, _) => Ok((Value::Str(s.clone()), Ty::Str)),
            Expr::BoolLit(b, _) => Ok((Value::Bool(*b), Ty::Bool)),
            Expr::Ident(name, span) => scope
                .get(*name)
                .map(|(ty, value)| (value, ty))
                .ok_or_else(|| {
                    NameError::Undeclared {
                        name: self.resolve(*name),
                        span: *span,
                    }
                    .into()
                }),
            Expr::Scan(_) => {
                let mut line = String::new();
                self.stdin.read_line(&mut line).expect("stdin read failed");
                let line = line.strip_suffix('\n').unwrap_or(&line);
                let line = line.strip_suffix('\r').unwrap_or(line);
                match line.parse::<i64>() {
                    Ok(n) => Ok((Value::Int(n), Ty::Int)),
                    Err(_) => Ok((Value::Str(line.to_owned()), Ty::Str)),
                }
            }
            Expr::UnOp { op, operand, span } => self.eval_unop(*op, operand, scope, *span),
            Expr::BinOp { op, lhs, rhs, span } => self.eval_binop(*op, lhs, rhs, scope, *span),
            Expr::Call { name, args, span } => self.eval_call(*name, args, scope, *span),
        }
    }

    fn eval_unop(&mut self, op: UnOp, operand: &Expr, scope: &Scope, span: jaoc_util::Span) -> JaoResult<(Value, Ty)> {
        let (value, ty) = self.eval_expr(operand, scope)?;
        match (op, &value) {
            (UnOp::Neg, Value::Int(n)) => Ok((Value::Int(-n), Ty::Int)),
            (UnOp::Pos, Value::Int(_)) => Ok((value, ty)),
            (UnOp::Pos, _) => Ok((value, ty)),
            (UnOp::Not, Value::Bool(b)) => Ok((Value::Bool(!b), Ty::Bool)),
            (UnOp::Neg, _) | (UnOp::Not, _) => Err(TypeError::BadOperand {
                op: unop_name(op),
                operand_type: ty.describe(),
                span,
            }
            .into()),
        }
    }

    fn eval_binop(
        &mut self,
        op: BinOp,
        lhs: &Expr,
        rhs: &Expr,
        scope: &Scope,
        span: jaoc_util::Span,
    ) -> JaoResult<(Value, Ty)> {
        let (lv, lt) = self.eval_expr(lhs, scope)?;
        let (rv, rt) = self.eval_expr(rhs, scope)?;
        match op {
            BinOp::Add => self.eval_add(lv, lt, rv, rt, span),
            BinOp::Sub => self.eval_int_arith(op, lv, lt, rv, rt, span),
            BinOp::Mul => self.eval_int_arith(op, lv, lt, rv, rt, span),
            BinOp::Div => {
                let (a, b) = self.require_ints(op, lv, lt, rv, rt, span)?;
                if b == 0 {
                    return Err(ArithError { span }.into());
                }
                Ok((Value::Int(floor_div(a, b)), Ty::Int))
            }
            BinOp::Lt | BinOp::Gt => self.eval_ordering(op, lv, lt, rv, rt, span),
            BinOp::Eq => {
                if lt != rt {
                    return Err(TypeError::BadOperand {
                        op: "==",
                        operand_type: rt.describe(),
                        span,
                    }
                    .into());
                }
                Ok((Value::Bool(lv == rv), Ty::Bool))
            }
            BinOp::And | BinOp::Or => {
                let a = self.require_bool_operand(op, lv, lt, span)?;
                let b = self.require_bool_operand(op, rv, rt, span)?;
                let result = if op == BinOp::And { a && b } else { a || b };
                Ok((Value::Bool(result), Ty::Bool))
            }
        }
    }

    fn eval_add(&self, lv: Value, lt: Ty, rv: Value, rt: Ty, span: jaoc_util::Span) -> JaoResult<(Value, Ty)> {
        if lt == Ty::Str || rt == Ty::Str {
            let mut out = lv.render();
            out.push_str(&rv.render());
            return Ok((Value::Str(out), Ty::Str));
        }
        if let (Value::Int(a), Value::Int(b)) = (&lv, &rv) {
            return Ok((Value::Int(a + b), Ty::Int));
        }
        Err(TypeError::BadOperand {
            op: "+",
            operand_type: if lt == Ty::Int { rt.describe() } else { lt.describe() },
            span,
        }
        .into())
    }

    fn eval_int_arith(&self, op: BinOp, lv: Value, lt: Ty, rv: Value, rt: Ty, span: jaoc_util::Span) -> JaoResult<(Value, Ty)> {
        let (a, b) = self.require_ints(op, lv, lt, rv, rt, span)?;
        let result = match op {
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            _ => unreachable!(),
        };
        Ok((Value::Int(result), Ty::Int))
    }

    fn eval_ordering(&self, op: BinOp, lv: Value, lt: Ty, rv: Value, rt: Ty, span: jaoc_util::Span) -> JaoResult<(Value, Ty)> {
        match (lv, rv) {
            (Value::Int(a), Value::Int(b)) => Ok((Value::Bool(if op == BinOp::Lt { a < b } else { a > b }), Ty::Bool)),
            (Value::Str(a), Value::Str(b)) => Ok((Value::Bool(if op == BinOp::Lt { a < b } else { a > b }), Ty::Bool)),
            _ => Err(TypeError::BadOperand {
                op: binop_name(op),
                operand_type: if lt == Ty::Int || lt == Ty::Str { rt.describe() } else { lt.describe() },
                span,
            }
            .into()),
        }
    }

    fn require_ints(&self, op: BinOp, lv: Value, lt: Ty, rv: Value, rt: Ty, span: jaoc_util::Span) -> JaoResult<(i64, i64)> {
        match (lv, rv) {
            (Value::Int(a), Value::Int(b)) => Ok((a, b)),
            _ => Err(TypeError::BadOperand {
                op: binop_name(op),
                operand_type: if lt == Ty::Int { rt.describe() } else { lt.describe() },
                span,
            }
            .into()),
        }
    }

    fn require_bool_operand(&self, op: BinOp, value: Value, ty: Ty, span: jaoc_util::Span) -> JaoResult<bool> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(TypeError::BadOperand {
                op: binop_name(op),
                operand_type: ty.describe(),
                span,
            }
            .into()),
        }
    }

    fn eval_call(&mut self, name: Symbol, args: &[Expr], scope: &Scope, span: jaoc_util::Span) -> JaoResult<(Value, Ty)> {
        if self.resolve(name) == BUILTIN_PRINTLN {
            for arg in args {
                let (value, _) = self.eval_expr(arg, scope)?;
                writeln!(self.stdout, "{}", value.render()).expect("stdout write failed");
            }
            return Ok((Value::Bool(false), Ty::Void));
        }

        let Some(def) = self.functions.get(name) else {
            if scope.get(name).is_some() {
                return Err(KindError {
                    name: self.resolve(name),
                    span,
                }
                .into());
            }
            return Err(NameError::Undeclared {
                name: self.resolve(name),
                span,
            }
            .into());
        };

        if args.len() != def.params.len() {
            return Err(TypeError::ArgumentMismatch {
                name: self.resolve(name),
                index: args.len().min(def.params.len()),
                expected: def.params.get(args.len()).map(|p| p.ty.describe()).unwrap_or("void"),
                found: "different argument count",
                span,
            }
            .into());
        }

        // Lexical (static) scoping, corrected per spec.md §9: the callee's
        // local scope is parented to the global scope, never to the
        // call-site's scope.
        let call_scope = Scope::call_frame(&self.global);
        for (index, (arg, param)) in args.iter().zip(def.params.iter()).enumerate() {
            let (value, found_ty) = self.eval_expr(arg, scope)?;
            if found_ty != param.ty {
                return Err(TypeError::ArgumentMismatch {
                    name: self.resolve(name),
                    index,
                    expected: param.ty.describe(),
                    found: found_ty.describe(),
                    span: arg.span(),
                }
                .into());
            }
            call_scope.declare(param.name, param.ty, value);
        }

        match self.eval_stmts(&def.body.stmts, &call_scope)? {
            Flow::Return(value) => {
                let found_ty = value.ty();
                if def.ret_ty == Ty::Void {
                    return Err(TypeError::VoidReturnsValue {
                        name: self.resolve(name),
                        span,
                    }
                    .into());
                }
                if found_ty != def.ret_ty {
                    return Err(TypeError::ReturnTypeMismatch {
                        name: self.resolve(name),
                        expected: def.ret_ty.describe(),
                        found: found_ty.describe(),
                        span,
                    }
                    .into());
                }
                Ok((value, found_ty))
            }
            Flow::Normal => {
                if def.ret_ty != Ty::Void {
                    return Err(TypeError::MissingReturn {
                        name: self.resolve(name),
                        expected: def.ret_ty.describe(),
                        span,
                    }
                    .into());
                }
                Ok((Value::Bool(false), Ty::Void))
            }
        }
    }
}

/// Floor division (spec.md §4.3 `/`): rounds toward negative infinity,
/// matching Python's `//` rather than Rust's truncating `/`.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

fn unop_name(op: UnOp) -> &'static str {
    match op {
        UnOp::Neg => "-",
        UnOp::Pos => "+",
        UnOp::Not => "!",
    }
}

fn binop_name(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Lt => "<",
        BinOp::Gt => ">",
        BinOp::Eq => "==",
        BinOp::And => "&&",
        BinOp::Or => "||",
    }
}
