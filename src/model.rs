//! Data model for extracted knob metadata
//!
//! All entities are built during one forward pass over the token streams and
//! are immutable afterwards. Serialization mirrors the established output
//! format: optional record fields are omitted entirely when absent, and an
//! empty field list is omitted from its knob.

use serde::Serialize;

/// One `case`-arm association: a string identifier and the knob-set name
/// that governs it. Many identifiers may reference the same knob-set name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub knob_set_name: String,
    pub id: String,
}

/// One field inside a knob set.
///
/// `domain` is always present. For opaque function-valued fields,
/// `dict_type` holds the marker `"function"` and `key`/`default_value` are
/// always absent. `default_value` keeps the raw literal text, quotes and all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnobRecord {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// One knob-set declaration.
///
/// `records` preserves declaration order and keeps duplicate domains; a knob
/// with zero records is valid. `identifiers` is filled by the join, and under
/// its semantics every emitted knob carries exactly one identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Knob {
    pub identifiers: Vec<String>,
    #[serde(rename = "knob_name")]
    pub name: String,
    #[serde(rename = "knob_fields", skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<KnobRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_only_present_fields() {
        let record = KnobRecord {
            domain: "color".to_string(),
            dict_type: Some("String".to_string()),
            key: None,
            default_value: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"domain":"color","dict_type":"String"}"#);
    }

    #[test]
    fn test_function_record_shape() {
        let record = KnobRecord {
            domain: "didLoad".to_string(),
            dict_type: Some("function".to_string()),
            ..KnobRecord::default()
        };
        assert_eq!(record.key, None);
        assert_eq!(record.default_value, None);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"domain":"didLoad","dict_type":"function"}"#);
    }

    #[test]
    fn test_knob_with_no_records_omits_fields_array() {
        let knob = Knob {
            identifiers: vec!["c1".to_string()],
            name: "XKnobSet".to_string(),
            records: vec![],
        };
        let json = serde_json::to_string(&knob).unwrap();
        assert_eq!(json, r#"{"identifiers":["c1"],"knob_name":"XKnobSet"}"#);
    }

    #[test]
    fn test_full_knob_serialization() {
        let knob = Knob {
            identifiers: vec!["c1".to_string()],
            name: "XKnobSet".to_string(),
            records: vec![KnobRecord {
                domain: "color".to_string(),
                dict_type: Some("String".to_string()),
                key: Some("color".to_string()),
                default_value: Some("\"red\"".to_string()),
            }],
        };
        let json = serde_json::to_string(&knob).unwrap();
        assert_eq!(
            json,
            r#"{"identifiers":["c1"],"knob_name":"XKnobSet","knob_fields":[{"domain":"color","dict_type":"String","key":"color","default_value":"\"red\""}]}"#
        );
    }
}
