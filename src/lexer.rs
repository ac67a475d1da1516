//! Lexical layer: token definitions, the forward-only stream, and
//! string-literal unquoting.
//!
//! The scanners in [`crate::scanner`] consume this layer through exactly two
//! primitives: [`TokenStream::scan`] (raw, every token) and
//! [`TokenStream::next_literal`] (literal-bearing tokens only).

pub mod literal;
pub mod stream;
pub mod tokens;

pub use literal::{unquote, Unquote};
pub use stream::{Scanned, TokenStream};
pub use tokens::Token;
