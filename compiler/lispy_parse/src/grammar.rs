//! Recursive descent over the token stream.
//!
//! ```text
//! number : /-?[0-9]+\.?[0-9]*/ ;
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&%^]+/ ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! lispy  : /^/ <expr>* /$/ ;
//! ```

use lispy_stack::ensure_sufficient_stack;

use crate::ast::{AstNode, CHAR_TAG, NUMBER_TAG, QEXPR_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_TAG};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::{ParseError, Span};

/// Parse one input into a tree rooted at a `>` node.
///
/// The root's children are the start anchor, every top-level expression in
/// order, and the end anchor.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
pub fn parse(input: &str) -> Result<AstNode, ParseError> {
    let tokens = tokenize(input)?;
    Parser::new(input, &tokens).parse_root()
}

/// The two bracketed group forms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Group {
    SExpr,
    QExpr,
}

impl Group {
    fn tag(self) -> &'static str {
        match self {
            Group::SExpr => SEXPR_TAG,
            Group::QExpr => QEXPR_TAG,
        }
    }

    fn open(self) -> char {
        match self {
            Group::SExpr => '(',
            Group::QExpr => '{',
        }
    }

    fn close(self) -> char {
        match self {
            Group::SExpr => ')',
            Group::QExpr => '}',
        }
    }

    fn close_kind(self) -> TokenKind {
        match self {
            Group::SExpr => TokenKind::RParen,
            Group::QExpr => TokenKind::RBrace,
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, tokens: &'a [Token]) -> Self {
        Parser {
            input,
            tokens,
            pos: 0,
        }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn end_span(&self) -> Span {
        Span::point(self.input.len())
    }

    fn parse_root(&mut self) -> Result<AstNode, ParseError> {
        let mut children = vec![AstNode::anchor(0)];
        while let Some(token) = self.advance() {
            children.push(self.parse_expr(token)?);
        }
        children.push(AstNode::anchor(self.input.len()));
        Ok(AstNode::branch(
            ROOT_TAG,
            children,
            Span::new(0, self.input.len()),
        ))
    }

    fn parse_expr(&mut self, token: Token) -> Result<AstNode, ParseError> {
        ensure_sufficient_stack(|| match token.kind {
            TokenKind::Number => Ok(self.leaf(NUMBER_TAG, token)),
            TokenKind::Symbol => Ok(self.leaf(SYMBOL_TAG, token)),
            TokenKind::LParen => self.parse_group(Group::SExpr, token),
            TokenKind::LBrace => self.parse_group(Group::QExpr, token),
            TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnexpectedClose {
                found: token.kind.delimiter().unwrap_or(')'),
                span: token.span,
            }),
        })
    }

    fn parse_group(&mut self, group: Group, open: Token) -> Result<AstNode, ParseError> {
        let mut children = vec![self.leaf(CHAR_TAG, open)];
        loop {
            let Some(token) = self.advance() else {
                return Err(ParseError::Unclosed {
                    expected: group.close(),
                    open: open.span,
                    span: self.end_span(),
                });
            };

            if token.kind == group.close_kind() {
                children.push(self.leaf(CHAR_TAG, token));
                return Ok(AstNode::branch(
                    group.tag(),
                    children,
                    open.span.merge(token.span),
                ));
            }

            if token.kind.is_close() {
                return Err(ParseError::MismatchedClose {
                    opened: group.open(),
                    expected: group.close(),
                    found: token.kind.delimiter().unwrap_or('}'),
                    open: open.span,
                    span: token.span,
                });
            }

            children.push(self.parse_expr(token)?);
        }
    }

    fn leaf(&self, tag: &str, token: Token) -> AstNode {
        AstNode::leaf(tag, token.text(self.input), token.span)
    }
}

#[cfg(test)]
mod tests;
