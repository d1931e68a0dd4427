#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ast::REGEX_TAG;
use pretty_assertions::assert_eq;

fn tags(node: &AstNode) -> Vec<&str> {
    node.children.iter().map(|c| c.tag.as_str()).collect()
}

#[test]
fn empty_input_is_root_with_anchors() {
    let root = parse("").unwrap();
    assert!(root.is_root());
    assert_eq!(tags(&root), vec![REGEX_TAG, REGEX_TAG]);
}

#[test]
fn root_wraps_top_level_expressions() {
    let root = parse("+ 1 2").unwrap();
    assert_eq!(
        tags(&root),
        vec![REGEX_TAG, SYMBOL_TAG, NUMBER_TAG, NUMBER_TAG, REGEX_TAG]
    );
    assert_eq!(root.children[1].contents, "+");
    assert_eq!(root.children[3].contents, "2");
}

#[test]
fn sexpr_keeps_delimiters_as_char_nodes() {
    let root = parse("(+ 1 2)").unwrap();
    let sexpr = &root.children[1];
    assert_eq!(sexpr.tag, SEXPR_TAG);
    assert_eq!(
        tags(sexpr),
        vec![CHAR_TAG, SYMBOL_TAG, NUMBER_TAG, NUMBER_TAG, CHAR_TAG]
    );
    assert_eq!(sexpr.children[0].contents, "(");
    assert_eq!(sexpr.children[4].contents, ")");
    assert_eq!(sexpr.span, Span::new(0, 7));
}

#[test]
fn qexpr_nested_in_sexpr() {
    let root = parse("(head {1 2 3})").unwrap();
    let qexpr = &root.children[1].children[2];
    assert_eq!(qexpr.tag, QEXPR_TAG);
    assert_eq!(qexpr.children.len(), 5);
    assert_eq!(qexpr.children[0].contents, "{");
}

#[test]
fn empty_groups() {
    let root = parse("() {}").unwrap();
    assert_eq!(root.children[1].children.len(), 2);
    assert_eq!(root.children[2].children.len(), 2);
}

#[test]
fn stray_close_at_top_level() {
    assert_eq!(
        parse("1 )"),
        Err(ParseError::UnexpectedClose {
            found: ')',
            span: Span::new(2, 3),
        })
    );
}

#[test]
fn unclosed_group_reports_open_position() {
    let err = parse("(+ 1 (* 2 3)").unwrap_err();
    assert_eq!(
        err,
        ParseError::Unclosed {
            expected: ')',
            open: Span::new(0, 1),
            span: Span::point(12),
        }
    );
    assert_eq!(err.opened_at(), Some(Span::new(0, 1)));
}

#[test]
fn mismatched_close() {
    let err = parse("{1 2)").unwrap_err();
    assert_eq!(
        err,
        ParseError::MismatchedClose {
            opened: '{',
            expected: '}',
            found: ')',
            open: Span::new(0, 1),
            span: Span::new(4, 5),
        }
    );
    assert_eq!(err.to_string(), "expected '}' to close '{', found ')'");
}

#[test]
fn render_includes_position() {
    let input = "(+ 1 2))";
    let err = parse(input).unwrap_err();
    assert_eq!(err.render("<stdin>", input), "<stdin>:1:8: error: unexpected ')'");
}

#[test]
fn deeply_nested_parses() {
    let depth = 2_000;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let root = parse(&input).unwrap();

    let mut node = &root.children[1];
    let mut levels = 0;
    while node.tag == SEXPR_TAG {
        levels += 1;
        node = &node.children[1];
    }
    assert_eq!(levels, depth);
    assert_eq!(node.contents, "1");
}

#[test]
fn very_deep_tree_drops() {
    let depth = 100_000;
    let input = format!("{}1{}", "{".repeat(depth), "}".repeat(depth));
    let root = parse(&input).unwrap();
    assert_eq!(root.children[1].tag, QEXPR_TAG);
    drop(root);
}

#[test]
fn pretty_dump() {
    let root = parse("(len {1})").unwrap();
    assert_eq!(
        root.pretty(),
        "\
>
  regex
  expr|sexpr|>
    char '('
    expr|symbol|regex 'len'
    expr|qexpr|>
      char '{'
      expr|number|regex '1'
      char '}'
    char ')'
  regex
"
    );
}
