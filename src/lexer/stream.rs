//! Forward-only token stream over a bundle source
//!
//! This module wraps the logos lexer in the cursor the scanners consume.
//! The stream is forward-only and never rewound: every scanning procedure
//! takes it by `&mut` and leaves it wherever its last read stopped. The
//! scanners' recovery strategy is built around this (abandon the current
//! candidate and keep searching from the current position).

use logos::{Logos, Span};

use crate::lexer::tokens::Token;

/// One scanned token: kind, literal text, and source span
///
/// `literal` is the raw source slice for literal-bearing kinds (identifiers,
/// strings including their quotes, numbers) and the empty string for
/// punctuation. This mirrors the upstream tokenizer contract where only
/// word-like tokens carry literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned<'a> {
    pub kind: Token,
    pub literal: &'a str,
    pub span: Span,
}

/// Forward-only cursor over the token stream of one source text
pub struct TokenStream<'a> {
    lexer: logos::Lexer<'a, Token>,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        TokenStream {
            lexer: Token::lexer(source),
        }
    }

    /// Raw scan primitive: the next token, or `None` at end of stream.
    ///
    /// Bytes the lexer cannot recognize are dropped silently; the scanners
    /// treat the bundle as best-effort input and must keep working past
    /// anything the token definitions do not cover.
    pub fn scan(&mut self) -> Option<Scanned<'a>> {
        loop {
            match self.lexer.next()? {
                Ok(kind) => {
                    let literal = if kind.has_literal() {
                        self.lexer.slice()
                    } else {
                        ""
                    };
                    return Some(Scanned {
                        kind,
                        literal,
                        span: self.lexer.span(),
                    });
                }
                Err(()) => continue,
            }
        }
    }

    /// The next non-empty literal, skipping punctuation.
    ///
    /// Returns `None` once the stream is exhausted. The original tool looped
    /// forever when the stream ran out mid-pattern; here exhaustion is an
    /// explicit end condition and every scanner terminates on it.
    pub fn next_literal(&mut self) -> Option<&'a str> {
        loop {
            let scanned = self.scan()?;
            if !scanned.literal.is_empty() {
                return Some(scanned.literal);
            }
        }
    }
}
