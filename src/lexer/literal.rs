//! String-literal unquoting
//!
//! Case labels and record keys arrive from the token stream as raw source
//! slices, quotes included. Unquoting them is best-effort: a malformed
//! literal falls back to the raw text instead of failing the run. The two
//! outcomes are kept distinct so callers (and tests) can tell which path
//! was taken.

/// Result of attempting to unquote a string literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unquote {
    /// The literal was well-formed; the payload is the decoded string.
    Unquoted(String),
    /// The literal was malformed; the payload is the input, untouched.
    RawFallback(String),
}

impl Unquote {
    /// Collapse both arms into the extracted value
    pub fn into_value(self) -> String {
        match self {
            Unquote::Unquoted(value) => value,
            Unquote::RawFallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Unquote::RawFallback(_))
    }
}

/// Unquote a single- or double-quoted string literal.
///
/// Recognized escapes: `\\`, `\'`, `\"`, `\n`, `\t`, `\r`, `\0`, `\xNN`,
/// `\uNNNN`. Anything else (missing or mismatched quotes, an unknown escape,
/// a bare quote inside the body) yields [`Unquote::RawFallback`].
pub fn unquote(raw: &str) -> Unquote {
    match try_unquote(raw) {
        Some(value) => Unquote::Unquoted(value),
        None => Unquote::RawFallback(raw.to_string()),
    }
}

fn try_unquote(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let quote = bytes[0];
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    if bytes[bytes.len() - 1] != quote {
        return None;
    }

    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == quote as char {
            // an unescaped quote means the closing quote we matched
            // was not really the end of the literal
            return None;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            'x' => {
                let hi = chars.next()?;
                let lo = chars.next()?;
                let code = hex_pair(hi, lo)?;
                out.push(char::from_u32(code)?);
            }
            'u' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    code = code * 16 + chars.next()?.to_digit(16)?;
                }
                out.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }
    Some(out)
}

fn hex_pair(hi: char, lo: char) -> Option<u32> {
    Some(hi.to_digit(16)? * 16 + lo.to_digit(16)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""red""#, "red")]
    #[case("'blue'", "blue")]
    #[case(r#""""#, "")]
    #[case(r#""a\"b""#, "a\"b")]
    #[case(r#""a\\b""#, "a\\b")]
    #[case(r#""line\nfeed""#, "line\nfeed")]
    #[case(r#""tab\there""#, "tab\there")]
    #[case(r#""\x41""#, "A")]
    #[case(r#""é""#, "\u{e9}")]
    fn test_well_formed_literals(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unquote(raw), Unquote::Unquoted(expected.to_string()));
    }

    #[rstest]
    #[case("red")] // no quotes at all
    #[case(r#""red"#)] // missing closing quote
    #[case(r#"red""#)] // missing opening quote
    #[case(r#""red'"#)] // mismatched quotes
    #[case(r#"""#)] // a lone quote
    #[case("")] // empty input
    #[case(r#""a\qb""#)] // unknown escape
    #[case(r#""a\""#)] // trailing backslash
    #[case(r#""a"b""#)] // bare quote inside the body
    #[case(r#""\xzz""#)] // bad hex escape
    fn test_malformed_literals_fall_back_to_raw(#[case] raw: &str) {
        let result = unquote(raw);
        assert!(result.is_fallback());
        assert_eq!(result.into_value(), raw);
    }

    #[test]
    fn test_fallback_preserves_input_verbatim() {
        let result = unquote(r#""half"#);
        assert_eq!(result, Unquote::RawFallback(r#""half"#.to_string()));
    }

    #[test]
    fn test_single_quoted_with_escaped_quote() {
        assert_eq!(
            unquote(r"'it\'s'"),
            Unquote::Unquoted("it's".to_string())
        );
    }
}
