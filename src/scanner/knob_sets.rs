//! Knob-set declaration scanner
//!
//! Locates `Admin.<X>KnobSet.Admin.KnobSet.extend({...})` declaration blocks
//! and accumulates their field records. The generated bundle follows a
//! self-referential naming convention: the knob-set name appears between two
//! `Admin` literals, then the `KnobSet.extend` tail confirms the block. The
//! literal `loadInitialData` marks the end of the relevant section of the
//! bundle and terminates the whole scan wherever it appears.
//!
//! Every check that fails abandons the current candidate and falls back to
//! searching; a near-miss is never an error.

use crate::lexer::TokenStream;
use crate::model::Knob;
use crate::scanner::records::{read_record, RecordOutcome};

/// States of the knob-set scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnobScanState {
    /// Raw-scanning for an `Admin` literal.
    Searching,
    /// An `Admin` literal was seen; qualifying the declaration head.
    Candidate,
}

/// Sentinel literal bounding the knob-set section of the bundle.
const SECTION_END: &str = "loadInitialData";

/// Scan the whole stream for knob-set declarations.
pub fn scan_knob_sets(stream: &mut TokenStream) -> Vec<Knob> {
    let mut knobs = Vec::new();
    let mut state = KnobScanState::Searching;
    loop {
        match state {
            KnobScanState::Searching => {
                let scanned = match stream.scan() {
                    Some(scanned) => scanned,
                    None => return knobs,
                };
                match scanned.literal {
                    SECTION_END => return knobs,
                    "Admin" => state = KnobScanState::Candidate,
                    _ => {}
                }
            }
            KnobScanState::Candidate => {
                // any failed check below falls back to Searching
                state = KnobScanState::Searching;

                let candidate = match stream.next_literal() {
                    Some(literal) => literal,
                    None => return knobs,
                };
                if candidate == SECTION_END {
                    return knobs;
                }
                if !candidate.ends_with("KnobSet") {
                    continue;
                }

                let mut knob = Knob::default();
                match stream.next_literal() {
                    // the second Admin commits the candidate name; without it
                    // the knob keeps an empty name but scanning proceeds
                    Some("Admin") => knob.name = candidate.to_string(),
                    Some(_) => {}
                    None => return knobs,
                }
                match stream.next_literal() {
                    Some("KnobSet") => {}
                    Some(_) => continue,
                    None => return knobs,
                }
                match stream.next_literal() {
                    Some("extend") => {}
                    Some(_) => continue,
                    None => return knobs,
                }

                while read_record(stream, &mut knob) == RecordOutcome::Consumed {}
                knobs.push(knob);
            }
        }
    }
}
