//! Field-name extraction
//!
//! In an object-literal-like construct the token immediately before a colon
//! is the field name. The reader scans raw tokens (punctuation included) and
//! keeps the literal of the most recently scanned token, so a punctuation
//! token between a word and the colon clears the held name. That
//! last-token-wins behavior is deliberate and matched by the scanners built
//! on top of it.

use crate::lexer::{Token, TokenStream};

/// Scan forward to the next colon and return the literal of the token right
/// before it (possibly empty). `None` only when the stream ends first.
pub fn read_field(stream: &mut TokenStream) -> Option<String> {
    let mut field = "";
    loop {
        let scanned = stream.scan()?;
        if scanned.kind == Token::Colon {
            return Some(field.to_string());
        }
        field = scanned.literal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_name_before_colon() {
        let mut stream = TokenStream::new("color: value");
        assert_eq!(read_field(&mut stream), Some("color".to_string()));
    }

    #[test]
    fn test_skips_leading_punctuation() {
        let mut stream = TokenStream::new(", { color: value");
        assert_eq!(read_field(&mut stream), Some("color".to_string()));
    }

    #[test]
    fn test_last_token_wins() {
        // the reader holds whatever token came last, not the last word
        let mut stream = TokenStream::new("a b c: value");
        assert_eq!(read_field(&mut stream), Some("c".to_string()));
    }

    #[test]
    fn test_punctuation_before_colon_clears_the_name() {
        let mut stream = TokenStream::new("a ): value");
        assert_eq!(read_field(&mut stream), Some("".to_string()));
    }

    #[test]
    fn test_no_literal_before_colon_yields_empty() {
        let mut stream = TokenStream::new("{ : value");
        assert_eq!(read_field(&mut stream), Some("".to_string()));
    }

    #[test]
    fn test_exhausted_stream_yields_none() {
        let mut stream = TokenStream::new("no colon here");
        assert_eq!(read_field(&mut stream), None);
    }

    #[test]
    fn test_consecutive_fields() {
        let mut stream = TokenStream::new("a: 1, b: 2");
        assert_eq!(read_field(&mut stream), Some("a".to_string()));
        // "1" then "," then "b" scan by; the comma clears, "b" re-arms
        assert_eq!(read_field(&mut stream), Some("b".to_string()));
    }
}
