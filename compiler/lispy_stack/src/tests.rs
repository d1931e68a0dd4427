use super::*;

/// Models a list nested `depth` levels deep, the shape the evaluator recurses over.
enum Nested {
    Leaf(u64),
    List(Box<Nested>),
}

fn nest(depth: u64) -> Nested {
    let mut node = Nested::Leaf(depth);
    for _ in 0..depth {
        node = Nested::List(Box::new(node));
    }
    node
}

fn depth_of(node: &Nested) -> u64 {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(_) => 0,
        Nested::List(inner) => depth_of(inner) + 1,
    })
}

fn leaf_of(node: &Nested) -> u64 {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(n) => *n,
        Nested::List(inner) => leaf_of(inner),
    })
}

#[test]
fn shallow_nesting() {
    assert_eq!(depth_of(&nest(3)), 3);
    assert_eq!(leaf_of(&nest(3)), 3);
}

#[test]
fn deep_nesting_does_not_overflow() {
    // 100k levels would overflow a typical 8MB stack
    let tree = nest(100_000);
    assert_eq!(depth_of(&tree), 100_000);

    // Iterative teardown; the derived drop glue would recurse
    let mut node = tree;
    while let Nested::List(inner) = node {
        node = *inner;
    }
}

#[test]
fn returns_closure_result() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}
