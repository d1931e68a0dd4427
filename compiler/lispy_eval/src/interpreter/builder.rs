//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::environment::Environment;
use crate::eval_mode::EvalMode;

/// Builder for `Interpreter`.
///
/// Without an explicit environment the interpreter starts from
/// [`Environment::with_builtins`].
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    mode: EvalMode,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use `env` instead of the default builtin table.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_else(Environment::with_builtins),
            mode: self.mode,
        }
    }
}
