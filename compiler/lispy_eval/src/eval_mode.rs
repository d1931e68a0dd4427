//! How the evaluator resolves the head of an S-expression.

/// Evaluation mode, selected once per interpreter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Symbols resolve through the environment and the head of an
    /// S-expression must evaluate to a function.
    #[default]
    Resolved,
    /// Symbols evaluate to themselves and the head of an S-expression must
    /// be a symbol naming a builtin, looked up by name.
    Symbolic,
}

impl EvalMode {
    /// Whether bare symbols are looked up in the environment.
    #[inline]
    pub fn resolves_symbols(self) -> bool {
        matches!(self, Self::Resolved)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Symbolic => "symbolic",
        }
    }
}
