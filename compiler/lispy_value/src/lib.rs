//! Lispy Value - runtime values, errors and builtin identifiers.
//!
//! Shared by the evaluator and the REPL. Nothing here evaluates; this crate
//! only defines what a value is, how it prints, and how errors are named.

mod builtin;
pub mod errors;
mod value;

pub use builtin::{ArithOp, Arity, Builtin, OPERATOR_CHARS};
pub use errors::{EvalError, EvalErrorKind};
pub use value::Value;
