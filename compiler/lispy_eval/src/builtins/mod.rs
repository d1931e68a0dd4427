//! Builtin dispatch table.
//!
//! Every builtin has the same shape: it receives the interpreter and an
//! argument list it owns outright, and returns a fresh value. Arguments are
//! already evaluated and contain no errors.
//!
//! | name | accepts | returns |
//! |------|---------|---------|
//! | `list` | anything | the arguments as a Q-expression |
//! | `head` | one non-empty Q-expression | Q-expression of its first element |
//! | `tail` | one non-empty Q-expression | it without its first element |
//! | `join` | one or more Q-expressions | their concatenation |
//! | `eval` | one Q-expression | it evaluated as an S-expression |
//! | `len` | one Q-expression | its element count |
//! | `+ - * / % ^` | numbers | left fold seeded with the first argument |

use lispy_value::errors::{division_by_zero, empty_list, invalid_syntax, wrong_arg_type};
use lispy_value::{ArithOp, Builtin, EvalError, Value};

use crate::interpreter::Interpreter;

/// Native implementation of a builtin.
pub type BuiltinFn = fn(&mut Interpreter, Vec<Value>) -> Value;

const QEXPR: &str = "Q-expression";
const NUMBER: &str = "Number";

/// Implementation behind `builtin`.
pub fn function_for(builtin: Builtin) -> BuiltinFn {
    match builtin {
        Builtin::List => list,
        Builtin::Head => head,
        Builtin::Tail => tail,
        Builtin::Join => join,
        Builtin::Eval => eval,
        Builtin::Len => len,
        Builtin::Arith(ArithOp::Add) => add,
        Builtin::Arith(ArithOp::Sub) => sub,
        Builtin::Arith(ArithOp::Mul) => mul,
        Builtin::Arith(ArithOp::Div) => div,
        Builtin::Arith(ArithOp::Rem) => rem,
        Builtin::Arith(ArithOp::Pow) => pow,
    }
}

/// Check arity, then run the builtin.
#[tracing::instrument(level = "trace", skip(interp, args), fields(argc = args.len()))]
pub fn call(interp: &mut Interpreter, builtin: Builtin, args: Vec<Value>) -> Value {
    if let Some(arity) = builtin.arity() {
        if let Err(err) = arity.check(builtin, args.len()) {
            tracing::debug!(%builtin, error = %err, "arity mismatch");
            return Value::error(err);
        }
    }
    let result = function_for(builtin)(interp, args);
    if let Some(err) = result.as_error() {
        tracing::debug!(%builtin, error = %err, "builtin failed");
    }
    result
}

/// The sole argument as a Q-expression.
///
/// Arity has already been checked, so `args` has exactly one element.
fn single_qexpr(builtin: Builtin, args: Vec<Value>) -> Result<Value, EvalError> {
    let arg = args
        .into_iter()
        .next()
        .ok_or_else(|| wrong_arg_type(builtin.name(), QEXPR, "nothing"))?;
    expect_qexpr(builtin, arg)
}

fn expect_qexpr(builtin: Builtin, arg: Value) -> Result<Value, EvalError> {
    if arg.is_qexpr() {
        Ok(arg)
    } else {
        Err(wrong_arg_type(builtin.name(), QEXPR, arg.type_name()))
    }
}

fn non_empty(builtin: Builtin, q: Value) -> Result<Value, EvalError> {
    if q.count() == 0 {
        Err(empty_list(builtin.name()))
    } else {
        Ok(q)
    }
}

fn into_value(result: Result<Value, EvalError>) -> Value {
    result.unwrap_or_else(Value::error)
}

// List Builtins

fn list(_: &mut Interpreter, args: Vec<Value>) -> Value {
    Value::qexpr_from(args)
}

fn head(_: &mut Interpreter, args: Vec<Value>) -> Value {
    into_value(
        single_qexpr(Builtin::Head, args)
            .and_then(|q| non_empty(Builtin::Head, q))
            .map(|q| Value::qexpr().append(q.take(0))),
    )
}

fn tail(_: &mut Interpreter, args: Vec<Value>) -> Value {
    into_value(
        single_qexpr(Builtin::Tail, args)
            .and_then(|q| non_empty(Builtin::Tail, q))
            .map(|mut q| {
                drop(q.remove_at(0));
                q
            }),
    )
}

fn join(_: &mut Interpreter, args: Vec<Value>) -> Value {
    let mut joined = Vec::new();
    for arg in args {
        match expect_qexpr(Builtin::Join, arg) {
            Ok(q) => joined.extend(q.into_cells()),
            Err(err) => return Value::error(err),
        }
    }
    Value::qexpr_from(joined)
}

fn eval(interp: &mut Interpreter, args: Vec<Value>) -> Value {
    match single_qexpr(Builtin::Eval, args) {
        Ok(q) => interp.eval(q.retag_sexpr()),
        Err(err) => Value::error(err),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "list lengths are far below 2^52"
)]
fn len(_: &mut Interpreter, args: Vec<Value>) -> Value {
    into_value(single_qexpr(Builtin::Len, args).map(|q| Value::number(q.count() as f64)))
}

// Arithmetic Builtins

fn add(_: &mut Interpreter, args: Vec<Value>) -> Value {
    arith(ArithOp::Add, args)
}

fn sub(_: &mut Interpreter, args: Vec<Value>) -> Value {
    arith(ArithOp::Sub, args)
}

fn mul(_: &mut Interpreter, args: Vec<Value>) -> Value {
    arith(ArithOp::Mul, args)
}

fn div(_: &mut Interpreter, args: Vec<Value>) -> Value {
    arith(ArithOp::Div, args)
}

fn rem(_: &mut Interpreter, args: Vec<Value>) -> Value {
    arith(ArithOp::Rem, args)
}

fn pow(_: &mut Interpreter, args: Vec<Value>) -> Value {
    arith(ArithOp::Pow, args)
}

/// Left fold over numeric arguments, seeded with the first.
///
/// A lone argument is only meaningful for `-` (negation).
fn arith(op: ArithOp, args: Vec<Value>) -> Value {
    into_value(fold_numbers(op, args).map(Value::number))
}

fn fold_numbers(op: ArithOp, args: Vec<Value>) -> Result<f64, EvalError> {
    let mut nums = Vec::with_capacity(args.len());
    for arg in &args {
        match arg.as_number() {
            Some(n) => nums.push(n),
            None => return Err(wrong_arg_type(op.symbol(), NUMBER, arg.type_name())),
        }
    }

    let Some((&seed, rest)) = nums.split_first() else {
        return Err(invalid_syntax(op.symbol()));
    };

    if rest.is_empty() {
        return match op {
            ArithOp::Sub => Ok(-seed),
            _ => Err(invalid_syntax(op.symbol())),
        };
    }

    rest.iter().try_fold(seed, |x, &y| apply(op, x, y))
}

fn apply(op: ArithOp, x: f64, y: f64) -> Result<f64, EvalError> {
    match op {
        ArithOp::Add => Ok(x + y),
        ArithOp::Sub => Ok(x - y),
        ArithOp::Mul => Ok(x * y),
        ArithOp::Div | ArithOp::Rem if y == 0.0 => Err(division_by_zero()),
        ArithOp::Div => Ok(x / y),
        ArithOp::Rem => Ok(x % y),
        ArithOp::Pow => Ok(x.powf(y)),
    }
}
