//! Tree-walking evaluator.
//!
//! `eval` reduces a value to normal form:
//!
//! - symbols are looked up in the environment (in [`EvalMode::Resolved`]);
//! - S-expressions evaluate every child left to right, surface the leftmost
//!   error if any, then apply the head to the rest;
//! - everything else is already in normal form.
//!
//! Errors are values. Nothing here returns `Err` for a user mistake.

mod builder;

pub use builder::InterpreterBuilder;

use lispy_parse::{parse, AstNode, ParseError};
use lispy_stack::ensure_sufficient_stack;
use lispy_value::errors::{not_a_function, not_a_symbol};
use lispy_value::{Builtin, EvalError, Value};

use crate::builtins;
use crate::environment::Environment;
use crate::eval_mode::EvalMode;
use crate::reader::read;

/// Evaluator state: the global environment and the dispatch mode.
#[derive(Clone, Debug)]
pub struct Interpreter {
    env: Environment,
    mode: EvalMode,
}

impl Interpreter {
    /// Interpreter in `Resolved` mode with every builtin registered.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    #[inline]
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Reduce `value` to normal form.
    pub fn eval(&mut self, value: Value) -> Value {
        ensure_sufficient_stack(|| match value {
            Value::Symbol(ref name) if self.mode.resolves_symbols() => self.env.get(name),
            Value::SExpr(_) => self.eval_sexpr(value.into_cells()),
            other => other,
        })
    }

    /// Read then evaluate a parse tree.
    pub fn eval_ast(&mut self, node: &AstNode) -> Value {
        self.eval(read(node))
    }

    /// Parse, read and evaluate one line of source.
    pub fn eval_str(&mut self, input: &str) -> Result<Value, ParseError> {
        let ast = parse(input)?;
        Ok(self.eval_ast(&ast))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = cells.len(), mode = self.mode.name()))]
    fn eval_sexpr(&mut self, cells: Vec<Value>) -> Value {
        let mut cells: Vec<Value> = cells.into_iter().map(|cell| self.eval(cell)).collect();

        if let Some(pos) = cells.iter().position(Value::is_error) {
            let err = cells.swap_remove(pos);
            tracing::debug!(error = %err, "argument evaluated to an error");
            return err;
        }

        if cells.len() <= 1 {
            return cells.pop().unwrap_or_else(Value::sexpr);
        }

        let head = cells.remove(0);
        match self.resolve_head(head) {
            Ok(builtin) => builtins::call(self, builtin, cells),
            Err(err) => {
                tracing::debug!(error = %err, "bad s-expression head");
                Value::error(err)
            }
        }
    }

    fn resolve_head(&self, head: Value) -> Result<Builtin, EvalError> {
        match (self.mode, &head) {
            (EvalMode::Resolved, Value::Function(builtin)) => Ok(*builtin),
            (EvalMode::Resolved, other) => Err(not_a_function(other.type_name())),
            (EvalMode::Symbolic, Value::Symbol(name)) => Builtin::lookup(name),
            (EvalMode::Symbolic, other) => Err(not_a_symbol(other.type_name())),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
