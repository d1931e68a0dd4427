//! Tokenizer built on `logos`.

use logos::Logos;

use crate::{ParseError, Span};

#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Wins ties against `Symbol`, so `-5` is a number and `-` a symbol
    #[regex(r"-?[0-9]+\.?[0-9]*", priority = 3)]
    Number,

    // Never starts with a digit or `-digit`: those positions lex as a
    // number, so `5-3` is `5` then `-3`
    #[regex(r"[a-zA-Z_+*/\\=<>!&%^][a-zA-Z0-9_+\-*/\\=<>!&%^]*")]
    #[regex(r"-([a-zA-Z_+\-*/\\=<>!&%^][a-zA-Z0-9_+\-*/\\=<>!&%^]*)?")]
    Symbol,
}

impl TokenKind {
    /// Whether this token closes a group.
    #[inline]
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }

    /// The delimiter character for bracket tokens.
    pub fn delimiter(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Number | TokenKind::Symbol => None,
        }
    }
}

/// A token and its location in the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The source text this token covers.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.span.range()).unwrap_or_default()
    }
}

/// Split `input` into tokens, failing on the first character no token matches.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                let found = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedCharacter { found, span });
            }
        }
    }

    Ok(tokens)
}
