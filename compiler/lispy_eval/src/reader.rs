//! Parse tree to value translation.
//!
//! Purely structural: nothing is evaluated or looked up here. Tags are
//! matched by substring, so `expr|number|regex` reads as a number.

use lispy_parse::ast::REGEX_TAG;
use lispy_parse::AstNode;
use lispy_stack::ensure_sufficient_stack;
use lispy_value::errors::invalid_number;
use lispy_value::Value;

/// Translate a parse tree into an unevaluated value.
///
/// The root (`>`) and `sexpr` nodes become S-expressions, `qexpr` nodes
/// become Q-expressions. Delimiter characters and `regex` anchors are
/// skipped. A node with an unrecognised tag is read as an S-expression of
/// its children.
pub fn read(node: &AstNode) -> Value {
    ensure_sufficient_stack(|| {
        if node.tag_contains("number") {
            return read_number(&node.contents);
        }
        if node.tag_contains("symbol") {
            return Value::symbol(node.contents.as_str());
        }

        let list = if node.tag_contains("qexpr") {
            Value::qexpr()
        } else {
            Value::sexpr()
        };

        node.children
            .iter()
            .filter(|child| !is_punctuation(child))
            .fold(list, |list, child| list.append(read(child)))
    })
}

/// Literals outside the normal `f64` range, in either direction, are errors.
fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && !underflowed(n, text) => Value::number(n),
        _ => Value::error(invalid_number()),
    }
}

/// Nonzero digits that parsed to zero or a subnormal.
fn underflowed(n: f64, text: &str) -> bool {
    n.abs() < f64::MIN_POSITIVE && text.bytes().any(|b| matches!(b, b'1'..=b'9'))
}

fn is_punctuation(node: &AstNode) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}") || node.tag_is(REGEX_TAG)
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use super::*;
    use lispy_parse::{parse, Span};
    use pretty_assertions::assert_eq;

    fn read_str(input: &str) -> Value {
        read(&parse(input).unwrap())
    }

    #[test]
    fn root_reads_as_sexpr() {
        assert_eq!(
            read_str("+ 1 2"),
            Value::sexpr_from(vec![
                Value::symbol("+"),
                Value::number(1.0),
                Value::number(2.0),
            ])
        );
        assert_eq!(read_str(""), Value::sexpr());
    }

    #[test]
    fn groups_drop_delimiters() {
        let v = read_str("(head {1 2})");
        assert_eq!(v.to_string(), "((head {1 2}))");
        let inner = &v.cells()[0];
        assert!(inner.is_sexpr());
        assert!(inner.cells()[1].is_qexpr());
        assert_eq!(inner.cells()[1].count(), 2);
    }

    #[test]
    fn numbers() {
        assert_eq!(read_str("-7").cells(), &[Value::number(-7.0)]);
        assert_eq!(read_str("2.").cells(), &[Value::number(2.0)]);
        assert_eq!(read_str("0.25").cells(), &[Value::number(0.25)]);
    }

    #[test]
    fn out_of_range_number_is_error_value() {
        let huge = format!("1{}", "0".repeat(400));
        let v = read_str(&huge);
        assert_eq!(v.cells()[0].to_string(), "Error: invalid number");
    }

    #[test]
    fn underflowing_number_is_error_value() {
        let tiny = format!("0.{}1", "0".repeat(400));
        assert_eq!(read_str(&tiny).cells()[0].to_string(), "Error: invalid number");

        let subnormal = format!("-0.{}1", "0".repeat(310));
        assert_eq!(read_str(&subnormal).cells()[0].to_string(), "Error: invalid number");
    }

    #[test]
    fn zero_literals_are_numbers() {
        assert_eq!(read_str("0").cells(), &[Value::number(0.0)]);
        assert_eq!(read_str("0.000").cells(), &[Value::number(0.0)]);
        assert_eq!(read_str("-0").cells()[0].to_string(), "-0");
    }

    #[test]
    fn hand_built_tree() {
        let node = AstNode::branch(
            ">",
            vec![
                AstNode::anchor(0),
                AstNode::leaf("expr|symbol|regex", "len", Span::new(0, 3)),
                AstNode::anchor(3),
            ],
            Span::new(0, 3),
        );
        assert_eq!(read(&node), Value::sexpr_from(vec![Value::symbol("len")]));
    }
}
