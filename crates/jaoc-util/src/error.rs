//! The `JaoError` taxonomy shared by every interpreter phase.
//!
//! spec.md §7 is explicit that the language has no recovery mechanism: the
//! first fault aborts the run. Every fallible call in this workspace returns
//! `Result<T, JaoError>` and propagates with `?`; nothing collects a list of
//! diagnostics the way a recovering compiler front-end would.

use thiserror::Error;

use crate::span::Span;

/// Unrecognized character or unterminated string literal (spec.md §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unrecognized character '{ch}'")]
    UnrecognizedChar { ch: char, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
}

/// Unexpected token, missing delimiter, missing keyword (spec.md §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("missing '{delimiter}'")]
    MissingDelimiter { delimiter: &'static str, span: Span },

    #[error("missing 'quando'")]
    MissingQuando { span: Span },

    #[error("expected identifier after type")]
    MissingIdentifierAfterType { span: Span },

    #[error("unexpected input after end of program")]
    TrailingGarbage { span: Span },
}

/// Use of an undeclared name, or redeclaration within the same scope
/// (spec.md §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("undeclared name '{name}'")]
    Undeclared { name: String, span: Span },

    #[error("'{name}' is already declared in this scope")]
    Redeclared { name: String, span: Span },
}

/// Every static-ish type violation spec.md §7 lists under `TypeError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("operator '{op}' does not accept operands of type {operand_type}")]
    BadOperand {
        op: &'static str,
        operand_type: &'static str,
        span: Span,
    },

    #[error("condition of '{construct}' must be bool, found {found}")]
    NonBoolCondition {
        construct: &'static str,
        found: &'static str,
        span: Span,
    },

    #[error("cannot assign value of type {value_type} to '{name}' of type {declared_type}")]
    AssignmentMismatch {
        name: String,
        declared_type: &'static str,
        value_type: &'static str,
        span: Span,
    },

    #[error("argument {index} of '{name}' expects {expected}, found {found}")]
    ArgumentMismatch {
        name: String,
        index: usize,
        expected: &'static str,
        found: &'static str,
        span: Span,
    },

    #[error("'{name}' is declared void and must not return a value")]
    VoidReturnsValue { name: String, span: Span },

    #[error("'{name}' returns {found}, expected {expected}")]
    ReturnTypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
        span: Span,
    },

    #[error("'{name}' must return a value of type {expected} on every path")]
    MissingReturn {
        name: String,
        expected: &'static str,
        span: Span,
    },
}

/// Division by zero (spec.md §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("division by zero")]
pub struct ArithError {
    pub span: Span,
}

/// Call of a non-function identifier (spec.md §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{name}' is not a function")]
pub struct KindError {
    pub name: String,
    pub span: Span,
}

/// The unified error type every interpreter phase returns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JaoError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Arith(#[from] ArithError),

    #[error(transparent)]
    Kind(#[from] KindError),
}

impl JaoError {
    /// The span of the offending source, for caret rendering.
    pub fn span(&self) -> Span {
        match self {
            JaoError::Lex(LexError::UnrecognizedChar { span, .. })
            | JaoError::Lex(LexError::UnterminatedString { span })
            | JaoError::Parse(ParseError::UnexpectedToken { span, .. })
            | JaoError::Parse(ParseError::MissingDelimiter { span, .. })
            | JaoError::Parse(ParseError::MissingQuando { span })
            | JaoError::Parse(ParseError::MissingIdentifierAfterType { span })
            | JaoError::Parse(ParseError::TrailingGarbage { span })
            | JaoError::Name(NameError::Undeclared { span, .. })
            | JaoError::Name(NameError::Redeclared { span, .. })
            | JaoError::Type(TypeError::BadOperand { span, .. })
            | JaoError::Type(TypeError::NonBoolCondition { span, .. })
            | JaoError::Type(TypeError::AssignmentMismatch { span, .. })
            | JaoError::Type(TypeError::ArgumentMismatch { span, .. })
            | JaoError::Type(TypeError::VoidReturnsValue { span, .. })
            | JaoError::Type(TypeError::ReturnTypeMismatch { span, .. })
            | JaoError::Type(TypeError::MissingReturn { span, .. }) => *span,
            JaoError::Arith(ArithError { span }) => *span,
            JaoError::Kind(KindError { span, .. }) => *span,
        }
    }
}

pub type JaoResult<T> = std::result::Result<T, JaoError>;
