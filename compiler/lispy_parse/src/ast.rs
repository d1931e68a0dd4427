//! The generic parse tree.
//!
//! Nodes are untyped: the grammar rule that produced a node is recorded in
//! its `tag`, joined with `|` to the rules of any alternatives it was
//! reached through (`expr|number|regex`). Consumers discriminate on tag
//! substrings rather than on a Rust enum, so the tree shape stays the same
//! whatever the grammar grows into.

use std::fmt;

use crate::Span;

/// Tag of the synthetic node wrapping the whole input.
pub const ROOT_TAG: &str = ">";
/// Tag of the start/end-of-input anchors and other raw-text artifacts.
pub const REGEX_TAG: &str = "regex";
/// Tag of literal delimiter tokens inside groups.
pub const CHAR_TAG: &str = "char";
pub const NUMBER_TAG: &str = "expr|number|regex";
pub const SYMBOL_TAG: &str = "expr|symbol|regex";
pub const SEXPR_TAG: &str = "expr|sexpr|>";
pub const QEXPR_TAG: &str = "expr|qexpr|>";

/// One node of the parse tree.
#[derive(Clone, PartialEq, Eq)]
pub struct AstNode {
    /// Grammar rule name(s) that produced this node.
    pub tag: String,
    /// Literal text for leaves; empty for inner nodes and anchors.
    pub contents: String,
    pub children: Vec<AstNode>,
    pub span: Span,
}

impl AstNode {
    /// A leaf carrying literal text.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>, span: Span) -> Self {
        AstNode {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
            span,
        }
    }

    /// An inner node.
    pub fn branch(tag: impl Into<String>, children: Vec<AstNode>, span: Span) -> Self {
        AstNode {
            tag: tag.into(),
            contents: String::new(),
            children,
            span,
        }
    }

    /// A start/end-of-input anchor.
    pub fn anchor(offset: usize) -> Self {
        AstNode::leaf(REGEX_TAG, "", Span::point(offset))
    }

    /// Whether the tag names `rule`, directly or through an alternative.
    #[inline]
    pub fn tag_contains(&self, rule: &str) -> bool {
        self.tag.contains(rule)
    }

    /// Whether the tag is exactly `tag`.
    #[inline]
    pub fn tag_is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Whether this is the whole-input wrapper.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.tag_is(ROOT_TAG)
    }

    /// Indented multi-line dump, one node per line.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        lispy_stack::ensure_sufficient_stack(|| {
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(&self.tag);
            if !self.contents.is_empty() {
                out.push_str(" '");
                out.push_str(&self.contents);
                out.push('\'');
            }
            out.push('\n');
            for child in &self.children {
                child.pretty_into(out, depth + 1);
            }
        });
    }
}

impl Drop for AstNode {
    // Iterative, so a tree deeper than the thread stack can be freed.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Debug for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            write!(f, "{}{:?}@{:?}", self.tag, self.contents, self.span)
        } else {
            f.debug_struct("AstNode")
                .field("tag", &self.tag)
                .field("span", &self.span)
                .field("children", &self.children)
                .finish()
        }
    }
}
