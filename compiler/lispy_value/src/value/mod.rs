//! Runtime values.
//!
//! # Ownership
//!
//! A `Value` owns its children outright: `SExpr` and `QExpr` hold a plain
//! `Vec<Value>`, so there is never more than one owner for any node and
//! `Clone` is a deep copy. Lists are mutated only through the consuming or
//! `&mut` helpers below (`append`, `remove_at`, `take`, the retag pair).
//!
//! ```text
//! let v = Value::sexpr()
//!     .append(Value::symbol("+"))
//!     .append(Value::number(1.0));
//! assert_eq!(v.to_string(), "(+ 1)");
//! ```
//!
//! Dropping is iterative (see the `Drop` impl), so a tree nested deeper
//! than the thread stack can still be freed.
//!
//! # Contract violations
//!
//! List helpers panic when called on a non-list or with an out-of-range
//! index. Those are bugs in the evaluator, never user errors; user errors
//! are `Value::Error`.

use std::fmt;

use lispy_stack::ensure_sufficient_stack;

use crate::builtin::Builtin;
use crate::errors::EvalError;

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Double-precision number.
    Number(f64),
    /// Evaluation error. Terminal: propagates unchanged.
    Error(EvalError),
    /// Unresolved name.
    Symbol(String),
    /// Builtin function reference.
    Function(Builtin),
    /// Expression pending evaluation.
    SExpr(Vec<Value>),
    /// Quoted list; never evaluated implicitly.
    QExpr(Vec<Value>),
}

impl Value {
    // Factory Methods

    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn function(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }

    /// Empty S-expression.
    #[inline]
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Empty Q-expression.
    #[inline]
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    #[inline]
    pub fn sexpr_from(cells: Vec<Value>) -> Self {
        Value::SExpr(cells)
    }

    #[inline]
    pub fn qexpr_from(cells: Vec<Value>) -> Self {
        Value::QExpr(cells)
    }

    // List Operations

    /// Move `item` onto the end of this list and return the list.
    ///
    /// # Panics
    ///
    /// If `self` is not an S- or Q-expression.
    #[must_use]
    pub fn append(mut self, item: Value) -> Self {
        self.cells_mut().push(item);
        self
    }

    /// Remove child `i`, shifting later children left.
    ///
    /// # Panics
    ///
    /// If `self` is not a list or `i >= self.count()`.
    pub fn remove_at(&mut self, i: usize) -> Value {
        let cells = self.cells_mut();
        assert!(
            i < cells.len(),
            "remove_at index {i} out of bounds for list of {}",
            cells.len()
        );
        cells.remove(i)
    }

    /// Remove child `i` and drop the rest of the list.
    ///
    /// # Panics
    ///
    /// Same contract as [`Value::remove_at`].
    pub fn take(mut self, i: usize) -> Value {
        self.remove_at(i)
    }

    /// Independent copy sharing nothing with `self`.
    #[inline]
    #[must_use]
    pub fn deep_copy(&self) -> Value {
        self.clone()
    }

    /// Convert a list into a Q-expression, keeping its children.
    ///
    /// # Panics
    ///
    /// If `self` is not a list.
    #[must_use]
    pub fn retag_qexpr(self) -> Value {
        Value::QExpr(self.into_cells())
    }

    /// Convert a list into an S-expression, keeping its children.
    ///
    /// # Panics
    ///
    /// If `self` is not a list.
    #[must_use]
    pub fn retag_sexpr(self) -> Value {
        Value::SExpr(self.into_cells())
    }

    /// Children of a list, by value.
    ///
    /// # Panics
    ///
    /// If `self` is not a list.
    pub fn into_cells(mut self) -> Vec<Value> {
        match &mut self {
            Value::SExpr(cells) | Value::QExpr(cells) => std::mem::take(cells),
            other => panic!("into_cells on {}", other.type_name()),
        }
    }

    fn cells_mut(&mut self) -> &mut Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            other => panic!("list operation on {}", other.type_name()),
        }
    }

    // Queries

    /// Children of a list; empty for every other variant.
    pub fn cells(&self) -> &[Value] {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            _ => &[],
        }
    }

    /// Number of children; zero for non-lists.
    #[inline]
    pub fn count(&self) -> usize {
        self.cells().len()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_qexpr(&self) -> bool {
        matches!(self, Value::QExpr(_))
    }

    #[inline]
    pub fn is_sexpr(&self) -> bool {
        matches!(self, Value::SExpr(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-expression",
            Value::QExpr(_) => "Q-expression",
        }
    }
}

impl Drop for Value {
    // Children are moved onto a heap worklist before they drop, so the drop
    // glue never recurses more than one level.
    fn drop(&mut self) {
        let mut pending = match self {
            Value::SExpr(cells) | Value::QExpr(cells) => std::mem::take(cells),
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            if let Value::SExpr(cells) | Value::QExpr(cells) = &mut value {
                pending.append(cells);
            }
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, open: char, cells: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::Function(_) => write!(f, "<function>"),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
        })
    }
}
