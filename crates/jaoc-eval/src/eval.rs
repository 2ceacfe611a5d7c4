//! The tree-walking evaluator (spec.md §4.3): one `evaluate` per AST node
//! category, dispatched from here and implemented in `stmt.rs`/`expr.rs`.

use std::io::{BufRead, Write};

use jaoc_par::ast::Program;
use jaoc_util::{Interner, JaoResult};

use crate::registry::FunctionRegistry;
use crate::scope::Scope;
use crate::value::Value;

/// What a statement handed back upward: either nothing, or a propagating
/// return-signal (spec.md §4.3, glossary "Return-signal").
pub enum Flow {
    Normal,
    Return(Value),
}

pub struct Evaluator<'a, R: BufRead, W: Write> {
    pub(crate) interner: &'a Interner,
    pub(crate) functions: FunctionRegistry,
    pub(crate) global: Scope,
    pub(crate) stdin: R,
    pub(crate) stdout: W,
}

impl<'a, R: BufRead, W: Write> Evaluator<'a, R, W> {
    pub fn new(interner: &'a Interner, stdin: R, stdout: W) -> Self {
        Self {
            interner,
            functions: FunctionRegistry::new(),
            global: Scope::new_root(),
            stdin,
            stdout,
        }
    }

    /// Runs a whole program: the root block, evaluated directly in the
    /// global scope (spec.md §4.3 "Block": "Create no new table for the
    /// program root; the caller supplies it").
    pub fn run(&mut self, program: &Program) -> JaoResult<()> {
        let global = self.global.clone();
        self.eval_stmts(&program.stmts, &global)?;
        Ok(())
    }

    pub(crate) fn resolve(&self, sym: jaoc_util::Symbol) -> String {
        self.interner.resolve(sym).to_owned()
    }
}
