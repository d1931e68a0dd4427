//! Evaluation errors.
//!
//! Errors produced while evaluating are ordinary values (`Value::Error`), not
//! Rust `Err`s: they flow back through the evaluator like any other result and
//! are printed by the REPL. `EvalErrorKind` is the closed taxonomy; factory
//! functions (e.g. `division_by_zero()`) are the public API and fill in both
//! the kind and the rendered message.

use std::fmt;

use crate::builtin::Arity;

/// Typed error category.
///
/// Each variant carries the data needed to describe the failure, so callers
/// can match on the kind instead of parsing the message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A number literal that does not fit in an `f64`.
    InvalidNumber,
    /// Symbol lookup missed the environment.
    UndefinedSymbol { name: String },
    /// Head of an S-expression evaluated to something other than a function.
    NotAFunction { type_name: &'static str },
    /// Head of an S-expression is not a symbol (symbol-dispatch mode).
    NotASymbol { type_name: &'static str },
    /// Builtin called with the wrong number of arguments.
    WrongArgCount {
        builtin: &'static str,
        expected: Arity,
        got: usize,
    },
    /// Builtin called with an argument of the wrong type.
    WrongArgType {
        builtin: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    /// Builtin needs a non-empty Q-expression.
    EmptyList { builtin: &'static str },
    /// `/` or `%` with a zero divisor.
    DivisionByZero,
    /// Operator used without operands it needs, e.g. `(+ 1)`.
    InvalidSyntax { op: &'static str },
    /// Name that maps to no builtin (symbol-dispatch mode).
    UnknownFunction { name: String },
    /// Operator string that names no arithmetic operation.
    InvalidOperation { op: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::UndefinedSymbol { .. } => write!(f, "undefined symbol"),
            Self::NotAFunction { .. } => write!(f, "not a function"),
            Self::NotASymbol { .. } => write!(f, "s-expression does not start with a symbol"),
            Self::WrongArgCount {
                builtin,
                expected,
                got,
            } => write!(f, "'{builtin}' expects {expected}, got {got}"),
            Self::WrongArgType {
                builtin,
                expected,
                got,
            } => write!(f, "'{builtin}' expects a {expected}, got {got}"),
            Self::EmptyList { builtin } => write!(f, "'{builtin}' passed an empty Q-expression"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidSyntax { .. } => write!(f, "invalid syntax"),
            Self::UnknownFunction { .. } => write!(f, "invalid function"),
            Self::InvalidOperation { .. } => write!(f, "invalid operation"),
        }
    }
}

/// Evaluation error carried by `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory-built errors.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// Reader Errors

/// Number literal out of `f64` range or otherwise unparsable.
#[cold]
pub fn invalid_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber)
}

// Lookup and Dispatch Errors

/// Environment lookup miss.
#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedSymbol {
        name: name.to_string(),
    })
}

/// S-expression head is not callable.
#[cold]
pub fn not_a_function(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { type_name })
}

/// S-expression head is not a symbol.
#[cold]
pub fn not_a_symbol(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotASymbol { type_name })
}

/// No builtin has this name.
#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction {
        name: name.to_string(),
    })
}

/// Operator-looking name that is not a single arithmetic operator.
#[cold]
pub fn invalid_operation(op: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperation { op: op.to_string() })
}

// Argument Contract Errors

/// Wrong number of arguments for a builtin.
#[cold]
pub fn wrong_arg_count(builtin: &'static str, expected: Arity, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount {
        builtin,
        expected,
        got,
    })
}

/// Wrong argument type for a builtin.
#[cold]
pub fn wrong_arg_type(builtin: &'static str, expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        builtin,
        expected,
        got,
    })
}

/// Empty Q-expression passed where at least one element is needed.
#[cold]
pub fn empty_list(builtin: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList { builtin })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Operator applied to too few operands.
#[cold]
pub fn invalid_syntax(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidSyntax { op })
}
