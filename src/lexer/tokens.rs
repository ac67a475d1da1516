//! Token definitions for packed-bundle sources
//!
//! This module defines the tokens produced by the bundle lexer. The tokens
//! are defined using the logos derive macro for efficient tokenization.
//! The token universe is deliberately coarse: the scanners only care about
//! which tokens carry literal text and about three structural punctuation
//! marks (`:`, `{`, `}`). Everything else collapses into `Punct`.

use logos::Logos;

/// All token kinds recognized in a packed bundle
///
/// Keywords are not distinguished from identifiers: `switch`, `case`,
/// `function`, `break` and `default` all lex as [`Token::Ident`] and are
/// recognized by their literal text, the same way the upstream tokenizer
/// exposed them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum Token {
    // Identifiers and keywords
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // String literals; the slice keeps its quotes
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Str,

    // Numeric literals
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    // Structurally significant punctuation
    #[token(":")]
    Colon,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Everything else the scanners skip over
    #[regex(r"[()\[\];,.<>=+\-*/!?&|%^~@#]")]
    Punct,
}

impl Token {
    /// Check if this token kind carries literal text
    pub fn has_literal(&self) -> bool {
        matches!(self, Token::Ident | Token::Str | Token::Number)
    }

    /// Check if this token is punctuation (structural or otherwise)
    pub fn is_punctuation(&self) -> bool {
        !self.has_literal()
    }
}
