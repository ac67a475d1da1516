//! Error types for the extraction pipeline
//!
//! Only two failures are fatal: an unreadable input file and a JSON encoding
//! failure. Everything the scanners hit mid-stream (wrong token sequence,
//! unexpected literal, malformed quoted literal) is handled internally by
//! backtracking or raw-text fallback and never surfaces here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal errors of one extraction run
#[derive(Debug)]
pub enum ExtractError {
    /// The bundle file could not be read.
    InputUnreadable { path: PathBuf, source: io::Error },
    /// The extracted result could not be encoded as JSON.
    EncodingFailure(serde_json::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InputUnreadable { path, source } => {
                write!(f, "cannot read bundle {}: {}", path.display(), source)
            }
            ExtractError::EncodingFailure(source) => {
                write!(f, "cannot encode output: {}", source)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_unreadable_display_names_the_path() {
        let error = ExtractError::InputUnreadable {
            path: PathBuf::from("/no/such/bundle.js"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/no/such/bundle.js"));
        assert!(message.contains("not found"));
    }
}
