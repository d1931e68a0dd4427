//! Property-based tests for the reader and evaluator.
//!
//! Inputs are generated as source text so every property also runs the
//! tokenizer and grammar. Case counts are kept small; the generated trees
//! are shallow.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use lispy_eval::{EvalMode, Interpreter, Value};
use lispy_parse::parse;
use proptest::prelude::*;

// Strategies for generating test inputs

/// Integer literals, including negatives.
fn arb_int() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

/// Decimal literals with a fixed number of fraction digits.
fn arb_decimal() -> impl Strategy<Value = String> {
    (-10_000.0f64..10_000.0, 0usize..4).prop_map(|(f, digits)| format!("{f:.digits$}"))
}

fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("list"),
        Just("head"),
        Just("tail"),
        Just("join"),
        Just("eval"),
        Just("len"),
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("%"),
        Just("^"),
        Just("x"),
        Just("+-"),
    ]
    .prop_map(str::to_string)
}

fn arb_atom() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..20).prop_map(|n| n.to_string()),
        arb_symbol(),
    ]
}

/// Nested S- and Q-expressions over numbers and builtin names.
fn arb_expr() -> impl Strategy<Value = String> {
    arb_atom().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5)
                .prop_map(|items| format!("({})", items.join(" "))),
            prop::collection::vec(inner, 0..5).prop_map(|items| format!("{{{}}}", items.join(" "))),
        ]
    })
}

fn eval_text(mode: EvalMode, input: &str) -> Value {
    let mut interp = Interpreter::builder().mode(mode).build();
    interp.eval_str(input).unwrap()
}

fn arb_mode() -> impl Strategy<Value = EvalMode> {
    prop_oneof![Just(EvalMode::Resolved), Just(EvalMode::Symbolic)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Integer literals read and evaluate to themselves.
    #[test]
    fn integer_literal_round_trips(n in arb_int()) {
        #[expect(clippy::cast_precision_loss, reason = "generated range is exact in f64")]
        let expected = n as f64;
        prop_assert_eq!(eval_text(EvalMode::Resolved, &n.to_string()), Value::number(expected));
    }

    /// Decimal literals evaluate to the same number Rust parses.
    #[test]
    fn decimal_literal_round_trips(text in arb_decimal()) {
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(eval_text(EvalMode::Resolved, &text), Value::number(expected));
    }

    /// Evaluation always completes, whatever the tree.
    #[test]
    fn arbitrary_trees_evaluate(expr in arb_expr(), mode in arb_mode()) {
        let _ = eval_text(mode, &expr);
    }

    /// Non-error results print as text the grammar accepts.
    #[test]
    fn printed_results_reparse(expr in arb_expr()) {
        let value = eval_text(EvalMode::Resolved, &expr);
        prop_assume!(!value.is_error());
        let printed = value.to_string();
        prop_assert!(parse(&printed).is_ok(), "failed to reparse {}", printed);
    }

    /// Wrapping a line in one more pair of parentheses changes nothing.
    #[test]
    fn extra_parentheses_are_transparent(expr in arb_expr(), mode in arb_mode()) {
        prop_assume!(!expr.is_empty());
        let plain = eval_text(mode, &expr).to_string();
        let wrapped = eval_text(mode, &format!("({expr})")).to_string();
        prop_assert_eq!(plain, wrapped);
    }

    /// `+` and `*` agree with a plain fold.
    #[test]
    fn sum_and_product_fold(ns in prop::collection::vec(-100i64..100, 2..6)) {
        let args: Vec<String> = ns.iter().map(ToString::to_string).collect();
        let sum: i64 = ns.iter().sum();
        let product: i64 = ns.iter().product();
        #[expect(clippy::cast_precision_loss, reason = "generated range is exact in f64")]
        let (sum, product) = (sum as f64, product as f64);
        prop_assert_eq!(
            eval_text(EvalMode::Resolved, &format!("+ {}", args.join(" "))),
            Value::number(sum)
        );
        // compared as numbers: `-5 * 0` is negative zero
        prop_assert_eq!(
            eval_text(EvalMode::Resolved, &format!("* {}", args.join(" "))),
            Value::number(product)
        );
    }

    /// A zero divisor anywhere after the seed is always reported.
    #[test]
    fn zero_divisor_is_reported(seed in arb_int(), before in prop::collection::vec(1i64..50, 0..3)) {
        let mut args: Vec<String> = before.iter().map(ToString::to_string).collect();
        args.push("0".to_string());
        for op in ["/", "%"] {
            let line = format!("{op} {seed} {}", args.join(" "));
            prop_assert_eq!(
                eval_text(EvalMode::Resolved, &line).to_string(),
                "Error: division by zero"
            );
        }
    }

    /// `len` counts elements and `join` of a split list restores it.
    #[test]
    fn list_builtins_agree(items in prop::collection::vec(0i64..100, 1..8), split in 0usize..8) {
        let split = split.min(items.len());
        let render = |xs: &[i64]| xs.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        let whole = format!("{{{}}}", render(&items));

        prop_assert_eq!(
            eval_text(EvalMode::Resolved, &format!("len {whole}")).to_string(),
            items.len().to_string()
        );
        let joined = format!(
            "join {{{}}} {{{}}}",
            render(&items[..split]),
            render(&items[split..])
        );
        prop_assert_eq!(eval_text(EvalMode::Resolved, &joined).to_string(), whole.clone());
        prop_assert_eq!(
            eval_text(EvalMode::Resolved, &format!("head {whole}")).to_string(),
            format!("{{{}}}", items[0])
        );
    }
}
