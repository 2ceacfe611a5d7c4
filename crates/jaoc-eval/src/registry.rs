//! Function registry — name to (params, return type, body), kept separate
//! from the variable scope chain (spec.md §9 "Function table": "a cleaner
//! design separates the function registry from the variable scope chain").

use std::collections::HashMap;
use std::rc::Rc;

use jaoc_par::ast::{Block, Param, Ty};
use jaoc_util::Symbol;

pub struct FunctionDef {
    pub params: Vec<Param>,
    pub ret_ty: Ty,
    pub body: Block,
}

#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<Symbol, Rc<FunctionDef>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: Symbol, def: FunctionDef) -> bool {
        if self.functions.contains_key(&name) {
            return false;
        }
        self.functions.insert(name, Rc::new(def));
        true
    }

    pub fn get(&self, name: Symbol) -> Option<Rc<FunctionDef>> {
        self.functions.get(&name).cloned()
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.functions.contains_key(&name)
    }
}
