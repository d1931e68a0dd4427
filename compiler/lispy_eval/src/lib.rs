//! Lispy Eval - reader, environment and evaluator.
//!
//! # Architecture
//!
//! - [`read`]: parse tree to raw `Value` tree
//! - [`Environment`]: ordered symbol table owning copies of its values
//! - [`Interpreter`]: S-expression reduction, parameterised by [`EvalMode`]
//! - [`builtins`]: the dispatch table behind `Value::Function`
//!
//! ```text
//! let mut interp = Interpreter::new();
//! let v = interp.eval_str("(+ 1 (* 2 3))")?;
//! assert_eq!(v.to_string(), "7");
//! ```

pub mod builtins;
mod environment;
mod eval_mode;
pub mod interpreter;
mod reader;

pub use environment::Environment;
pub use eval_mode::EvalMode;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use reader::read;

pub use lispy_value::{ArithOp, Builtin, EvalError, EvalErrorKind, Value};
