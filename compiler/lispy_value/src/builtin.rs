//! Builtin function identifiers.
//!
//! `Value::Function` carries a `Builtin` rather than a function pointer, so
//! functions compare by identity and the dispatch itself lives in the
//! evaluator crate.

use std::fmt;

use crate::errors::{invalid_operation, unknown_function, wrong_arg_count, EvalError};

/// Every operator string, in table order. Symbolic dispatch treats any
/// substring of this as operator-shaped.
pub const OPERATOR_CHARS: &str = "+-*/%^";

/// Arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    pub const ALL: [ArithOp; 6] = [
        ArithOp::Add,
        ArithOp::Sub,
        ArithOp::Mul,
        ArithOp::Div,
        ArithOp::Rem,
        ArithOp::Pow,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<ArithOp> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

/// A native operation bound to a symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Join,
    Eval,
    Len,
    Arith(ArithOp),
}

impl Builtin {
    /// The whole table in registration order.
    pub const ALL: [Builtin; 12] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Join,
        Builtin::Eval,
        Builtin::Len,
        Builtin::Arith(ArithOp::Add),
        Builtin::Arith(ArithOp::Sub),
        Builtin::Arith(ArithOp::Mul),
        Builtin::Arith(ArithOp::Div),
        Builtin::Arith(ArithOp::Rem),
        Builtin::Arith(ArithOp::Pow),
    ];

    /// Symbol the builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Len => "len",
            Builtin::Arith(op) => op.symbol(),
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Resolve a head symbol by name, without consulting any environment.
    ///
    /// Names that look like a run of operators (`+-`, `*/`) but are not a
    /// single operator are reported as `invalid operation`; every other miss
    /// is `invalid function`.
    pub fn lookup(name: &str) -> Result<Builtin, EvalError> {
        if let Some(builtin) = Self::from_name(name) {
            return Ok(builtin);
        }
        if !name.is_empty() && OPERATOR_CHARS.contains(name) {
            return Err(invalid_operation(name));
        }
        Err(unknown_function(name))
    }

    /// Argument count the builtin accepts, or `None` when any count is fine.
    ///
    /// Arithmetic is checked by the fold itself, which reports its own
    /// `invalid syntax` error.
    pub fn arity(self) -> Option<Arity> {
        match self {
            Builtin::List | Builtin::Arith(_) => None,
            Builtin::Head | Builtin::Tail | Builtin::Eval | Builtin::Len => Some(Arity::Exactly(1)),
            Builtin::Join => Some(Arity::AtLeast(1)),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted argument count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, got: usize) -> bool {
        match self {
            Arity::Exactly(n) => got == n,
            Arity::AtLeast(n) => got >= n,
        }
    }

    /// `Ok(())` when `got` fits, otherwise the error naming `builtin`.
    pub fn check(self, builtin: Builtin, got: usize) -> Result<(), EvalError> {
        if self.accepts(got) {
            Ok(())
        } else {
            Err(wrong_arg_count(builtin.name(), self, got))
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, n) = match *self {
            Arity::Exactly(n) => ("", n),
            Arity::AtLeast(n) => ("at least ", n),
        };
        let noun = if n == 1 { "argument" } else { "arguments" };
        write!(f, "{prefix}{n} {noun}")
    }
}
