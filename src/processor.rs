//! Extraction pipeline
//!
//! The public string-in, data-out surface of the crate. Both scanners run
//! once, independently, over freshly created token streams of the same
//! source text; the join then combines their outputs. Everything is one
//! synchronous forward pass.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::ExtractError;
use crate::join::join;
use crate::lexer::TokenStream;
use crate::model::{Identifier, Knob};
use crate::scanner::{scan_identifiers, scan_knob_sets};

/// Run the full pipeline: scan knob sets, scan identifiers, join.
pub fn extract(source: &str) -> Vec<Knob> {
    let knobs = extract_knobs(source);
    let identifiers = extract_identifiers(source);
    join(&knobs, &identifiers)
}

/// Scan the knob-set dataset only.
pub fn extract_knobs(source: &str) -> Vec<Knob> {
    let mut stream = TokenStream::new(source);
    scan_knob_sets(&mut stream)
}

/// Scan the identifier dataset only.
pub fn extract_identifiers(source: &str) -> Vec<Identifier> {
    let mut stream = TokenStream::new(source);
    scan_identifiers(&mut stream)
}

/// Read the bundle from disk.
pub fn read_bundle(path: &Path) -> Result<String, ExtractError> {
    fs::read_to_string(path).map_err(|source| ExtractError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode any extracted dataset as compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ExtractError> {
    serde_json::to_string(value).map_err(ExtractError::EncodingFailure)
}

/// Encode any extracted dataset as pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, ExtractError> {
    serde_json::to_string_pretty(value).map_err(ExtractError::EncodingFailure)
}
