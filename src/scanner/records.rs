//! Field-record recognition inside a knob-set declaration
//!
//! A knob-set body is a sequence of `name: value` fields. Two value shapes
//! are recognized: a plain `function` (opaque, no sub-fields) and a
//! structured `SC.Record.attr(<type>, { key: ..., defaultValue: ... })`
//! call. Everything else is a near-miss: the partial match is abandoned and
//! the field reader retried, never reported as an error.

use crate::lexer::{unquote, Token, TokenStream};
use crate::model::{Knob, KnobRecord};
use crate::scanner::fields::read_field;

/// Outcome of one [`read_record`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// One record was recognized and appended to the knob.
    Consumed,
    /// The field-record section ended (`validatedProperties` reached, or the
    /// stream ran out).
    Ended,
}

/// Recognize the next field record and append it to `knob`.
///
/// `validatedProperties` marks the end of the section. `tabValue` and `init`
/// are recognized-but-irrelevant fields and skipped. Any mismatch in the
/// `SC.Record.attr` sequence abandons the candidate and retries from the
/// next field.
pub fn read_record(stream: &mut TokenStream, knob: &mut Knob) -> RecordOutcome {
    loop {
        let field = match read_field(stream) {
            Some(field) => field,
            None => return RecordOutcome::Ended,
        };
        match field.as_str() {
            "validatedProperties" => return RecordOutcome::Ended,
            "tabValue" | "init" => continue,
            _ => {}
        }

        let value = match stream.next_literal() {
            Some(literal) => literal,
            None => return RecordOutcome::Ended,
        };
        if value == "function" {
            knob.records.push(KnobRecord {
                domain: field,
                dict_type: Some("function".to_string()),
                ..KnobRecord::default()
            });
            return RecordOutcome::Consumed;
        }

        if value != "SC" {
            continue;
        }
        match stream.next_literal() {
            Some("Record") => {}
            Some(_) => continue,
            None => return RecordOutcome::Ended,
        }
        match stream.next_literal() {
            Some("attr") => {}
            Some(_) => continue,
            None => return RecordOutcome::Ended,
        }
        let dict_type = match stream.next_literal() {
            Some(literal) => literal,
            None => return RecordOutcome::Ended,
        };

        let mut record = KnobRecord {
            domain: field,
            dict_type: Some(dict_type.to_string()),
            ..KnobRecord::default()
        };
        read_record_fields(stream, &mut record);
        knob.records.push(record);
        return RecordOutcome::Consumed;
    }
}

/// Populate `key` and `default_value` from the interior of an attribute
/// record, stopping at the first `}` token.
///
/// Tokens whose literal is `function` are skipped without brace tracking, so
/// a nested function body that itself contains a `}` terminates the record
/// early. Known limitation, preserved for compatibility with the original
/// extraction behavior.
pub fn read_record_fields(stream: &mut TokenStream, record: &mut KnobRecord) {
    loop {
        let scanned = match stream.scan() {
            Some(scanned) => scanned,
            None => return,
        };
        if scanned.literal == "function" {
            continue;
        }
        if scanned.kind == Token::CloseBrace {
            return;
        }
        match scanned.literal {
            "key" => {
                if let Some(raw) = stream.next_literal() {
                    record.key = Some(unquote(raw).into_value());
                }
            }
            "defaultValue" => {
                // stored verbatim, quotes and all
                record.default_value = stream.next_literal().map(str::to_string);
            }
            _ => {}
        }
    }
}
