//! # knobex
//!
//! Extracts structured configuration-knob metadata from a packed
//! administrative front-end bundle. The bundle is treated purely as a
//! sequence of lexical tokens; there is no AST, evaluation, or scope
//! resolution. Two datasets are reconstructed independently and joined by
//! knob-set name:
//!
//! - knob-set declarations (`Admin.<X>KnobSet.Admin.KnobSet.extend({...})`)
//!   with their typed field records,
//! - identifier associations from the `switch (s.PayloadType)` dispatch.
//!
//! Extraction is best-effort by design: the bundle's code-generation
//! convention is unversioned and externally controlled, so every pattern
//! mismatch abandons the current candidate and resumes searching instead of
//! failing the run.

pub mod error;
pub mod join;
pub mod lexer;
pub mod model;
pub mod processor;
pub mod scanner;

pub use error::ExtractError;
pub use model::{Identifier, Knob, KnobRecord};
pub use processor::{extract, extract_identifiers, extract_knobs};
