//! Dispatch-statement scanner
//!
//! Locates the `switch (s.PayloadType)` dispatch statement and walks its
//! `case` arms. Each arm associates a string identifier (the case label)
//! with the knob set named after the `Admin` literal inside the arm body.
//! An arm that hits `break` before any `Admin` literal contributes nothing.

use crate::lexer::{unquote, TokenStream};
use crate::model::Identifier;

/// States of the dispatch scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchScanState {
    /// Looking for the `switch (s.PayloadType)` anchor.
    Locate,
    /// Inside the dispatch body, walking case arms.
    Arms,
}

/// Scan the stream for the payload-type dispatch and collect its
/// identifier-to-knob-set associations.
pub fn scan_identifiers(stream: &mut TokenStream) -> Vec<Identifier> {
    let mut identifiers = Vec::new();
    let mut state = SwitchScanState::Locate;
    loop {
        match state {
            SwitchScanState::Locate => {
                let literal = match stream.next_literal() {
                    Some(literal) => literal,
                    None => return identifiers,
                };
                match literal {
                    "loadInitialData" => return identifiers,
                    "switch" => {
                        if stream.next_literal() != Some("s") {
                            continue;
                        }
                        if stream.next_literal() != Some("PayloadType") {
                            continue;
                        }
                        state = SwitchScanState::Arms;
                    }
                    _ => {}
                }
            }
            SwitchScanState::Arms => {
                let literal = match stream.next_literal() {
                    Some(literal) => literal,
                    None => return identifiers,
                };
                match literal {
                    "default" => return identifiers,
                    "case" => {
                        let label = match stream.next_literal() {
                            Some(label) => label,
                            None => return identifiers,
                        };
                        let id = unquote(label).into_value();
                        if let Some(identifier) = read_arm(stream, id) {
                            identifiers.push(identifier);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Walk one case arm: `break` abandons it, `Admin` yields the association.
fn read_arm(stream: &mut TokenStream, id: String) -> Option<Identifier> {
    loop {
        let literal = stream.next_literal()?;
        if literal == "break" {
            return None;
        }
        if literal == "Admin" {
            let knob_set_name = stream.next_literal()?.to_string();
            return Some(Identifier { knob_set_name, id });
        }
    }
}
