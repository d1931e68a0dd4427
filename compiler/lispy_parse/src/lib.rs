//! Lispy Parse - tokenizer and grammar for Lispy input lines.
//!
//! Turns source text into the generic, tag-discriminated [`AstNode`] tree
//! the reader consumes. The tree deliberately carries grammar rule names
//! instead of typed variants; see [`ast`] for the tag vocabulary.
//!
//! ```text
//! "(+ 1 {2})"
//!   >
//!     regex
//!     expr|sexpr|>
//!       char '('
//!       expr|symbol|regex '+'
//!       expr|number|regex '1'
//!       expr|qexpr|> ...
//!       char ')'
//!     regex
//! ```

pub mod ast;
mod error;
mod grammar;
pub mod lexer;
mod span;

pub use ast::AstNode;
pub use error::ParseError;
pub use grammar::parse;
pub use span::Span;
