//! String interner backed by a plain hash map.
//!
//! There is exactly one `Interner` per interpreter run, owned by whichever
//! phase needs to produce symbols (the lexer, for identifier tokens) and
//! threaded through to the phases that consume them.

use rustc_hash::FxHashMap;

use super::Symbol;

/// Interns strings into [`Symbol`] handles, owning the backing storage.
#[derive(Default)]
pub struct Interner {
    map: FxHashMap<String, Symbol>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    /// Interns `text`, returning its existing symbol or allocating a new one.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&sym) = self.map.get(text) {
            return sym;
        }
        let sym = Symbol::from_index(self.strings.len() as u32);
        self.strings.push(text.to_owned());
        self.map.insert(text.to_owned(), sym);
        sym
    }

    /// Resolves a symbol back to its string. Panics on a symbol from a
    /// different interner — symbols are never meant to cross interners.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.index() as usize]
    }
}
