//! Token-stream scanners
//!
//! The recognizers that walk the bundle's token stream and pick out the two
//! datasets: knob-set declarations ([`knob_sets`]) and dispatch-case
//! identifier associations ([`identifiers`]). They share one policy: every
//! pattern mismatch abandons the current candidate and resumes searching.
//! Nothing in here is an error path.

pub mod fields;
pub mod identifiers;
pub mod knob_sets;
pub mod records;

pub use fields::read_field;
pub use identifiers::scan_identifiers;
pub use knob_sets::scan_knob_sets;
pub use records::{read_record, read_record_fields, RecordOutcome};
