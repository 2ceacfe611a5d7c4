//! Span, symbol interning and error types shared by the JaoLang interpreter
//! crates (`jaoc-lex`, `jaoc-par`, `jaoc-eval`, `jaoc-drv`).

pub mod error;
pub mod span;
pub mod symbol;

pub use error::{
    ArithError, JaoError, JaoResult, KindError, LexError, NameError, ParseError, TypeError,
};
pub use span::{SourceMap, Span};
pub use symbol::{Interner, Symbol};
