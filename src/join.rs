//! Identifier-driven join of the two scanned datasets
//!
//! The output is built by iterating identifiers and searching the knobs, not
//! the reverse. A knob referenced by several identifiers therefore appears
//! once per identifier, each copy carrying that single identifier, and a
//! knob referenced by none is dropped. That duplication is an established
//! behavioral property of the output format and is preserved deliberately.

use crate::model::{Identifier, Knob};

/// Produce one output knob per `(identifier, matching knob)` pair.
///
/// Output order is identifier order, nested by knob order; the result is
/// deterministic given deterministic inputs.
pub fn join(knobs: &[Knob], identifiers: &[Identifier]) -> Vec<Knob> {
    let mut joined = Vec::new();
    for identifier in identifiers {
        for knob in knobs {
            if identifier.knob_set_name == knob.name {
                let mut matched = knob.clone();
                matched.identifiers.push(identifier.id.clone());
                joined.push(matched);
            }
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knob(name: &str) -> Knob {
        Knob {
            name: name.to_string(),
            ..Knob::default()
        }
    }

    fn identifier(knob_set_name: &str, id: &str) -> Identifier {
        Identifier {
            knob_set_name: knob_set_name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_matching_pair_produces_one_entry() {
        let joined = join(&[knob("X")], &[identifier("X", "c1")]);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].name, "X");
        assert_eq!(joined[0].identifiers, vec!["c1"]);
    }

    #[test]
    fn test_unmatched_identifier_contributes_nothing() {
        let joined = join(&[knob("X")], &[identifier("Y", "c1")]);
        assert!(joined.is_empty());
    }

    #[test]
    fn test_unreferenced_knob_is_dropped() {
        let joined = join(&[knob("X"), knob("Z")], &[identifier("X", "c1")]);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].name, "X");
    }

    #[test]
    fn test_knob_matched_twice_appears_twice() {
        let joined = join(
            &[knob("X")],
            &[identifier("X", "c1"), identifier("X", "c2")],
        );
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].identifiers, vec!["c1"]);
        assert_eq!(joined[1].identifiers, vec!["c2"]);
    }

    #[test]
    fn test_output_order_is_identifier_driven() {
        let joined = join(
            &[knob("A"), knob("B")],
            &[identifier("B", "c1"), identifier("A", "c2")],
        );
        let names: Vec<&str> = joined.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_join_is_deterministic() {
        let knobs = [knob("A"), knob("B")];
        let identifiers = [
            identifier("A", "c1"),
            identifier("B", "c2"),
            identifier("A", "c3"),
        ];
        assert_eq!(join(&knobs, &identifiers), join(&knobs, &identifiers));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(join(&[], &[]).is_empty());
        assert!(join(&[knob("X")], &[]).is_empty());
        assert!(join(&[], &[identifier("X", "c1")]).is_empty());
    }
}
