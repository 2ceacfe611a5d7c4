//! Lexically scoped symbol tables.
//!
//! Generalized from the teacher's `Rib`/`ScopeTree` arena-indexed chain
//! (SPEC_FULL.md §3): an arena that never frees ribs doesn't match this
//! interpreter's lifecycle ("symbol tables ... released when that scope
//! returns", spec.md §3), so each `Scope` owns an `Rc` to its parent instead
//! and is simply dropped when the block or call that created it exits.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use jaoc_par::ast::Ty;
use jaoc_util::Symbol;

use crate::value::Value;

struct Binding {
    ty: Ty,
    value: Value,
}

struct ScopeInner {
    bindings: HashMap<Symbol, Binding>,
    parent: Option<Scope>,
}

/// A symbol table: identifier to `(declared-type, current-value)`, with a
/// parent link forming the chain from inner block to program root
/// (spec.md §3 "SymbolTable").
#[derive(Clone)]
pub struct Scope(Rc<RefCell<ScopeInner>>);

impl Scope {
    pub fn new_root() -> Self {
        Scope(Rc::new(RefCell::new(ScopeInner {
            bindings: HashMap::new(),
            parent: None,
        })))
    }

    /// A fresh child scope whose parent is `self` (spec.md §4.3 "Block":
    /// nested blocks get "a fresh child table whose parent is the current
    /// one").
    pub fn child(&self) -> Self {
        Scope(Rc::new(RefCell::new(ScopeInner {
            bindings: HashMap::new(),
            parent: Some(self.clone()),
        })))
    }

    /// A fresh scope parented directly to `self`, used for a function
    /// call's local scope where `self` is the **global** scope (spec.md §9:
    /// calls use lexical, not dynamic, scoping).
    pub fn call_frame(global: &Scope) -> Self {
        global.child()
    }

    /// Declares `name` in *this* table. Returns `false` if already declared
    /// here (spec.md §3 invariant: "at most once in the same table") — the
    /// caller resolves the symbol to a name for the `NameError`, since a
    /// scope has no interner of its own.
    pub fn declare(&self, name: Symbol, ty: Ty, value: Value) -> bool {
        let mut inner = self.0.borrow_mut();
        if inner.bindings.contains_key(&name) {
            return false;
        }
        inner.bindings.insert(name, Binding { ty, value });
        true
    }

    /// Whether `name` is declared directly in *this* table, ignoring
    /// parents — the same "same table" granularity as [`Scope::declare`],
    /// used to cross-check against the separate function namespace.
    pub fn contains_local(&self, name: Symbol) -> bool {
        self.0.borrow().bindings.contains_key(&name)
    }

    /// Looks up `name`'s declared type and current value by walking the
    /// scope chain outward.
    pub fn get(&self, name: Symbol) -> Option<(Ty, Value)> {
        let inner = self.0.borrow();
        if let Some(b) = inner.bindings.get(&name) {
            return Some((b.ty, b.value.clone()));
        }
        match &inner.parent {
            Some(parent) => parent.get(name),
            None => None,
        }
    }

    /// Walks the chain to find the innermost declaration of `name` and
    /// overwrites its value (spec.md §4.3 "Assign"). Errors if undeclared.
    pub fn set(&self, name: Symbol, value: Value) -> bool {
        let mut inner = self.0.borrow_mut();
        if let Some(b) = inner.bindings.get_mut(&name) {
            b.value = value;
            return true;
        }
        match &inner.parent {
            Some(parent) => parent.set(name, value),
            None => false,
        }
    }
}
