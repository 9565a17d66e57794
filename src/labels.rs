//! Node label codec.
//!
//! Maps small integer node identifiers to single-letter display labels
//! (`0 -> 'A'`, `1 -> 'B'`, ...) for human-readable step messages. Pure
//! string/integer transforms; no algorithm ever consults a label.

use wasm_bindgen::prelude::*;

/// Display letter for a node identifier (`0..=25` maps to `'A'..='Z'`).
///
/// Identifiers beyond 25 are outside the supported range — the graph
/// construction boundary caps the node count, so they only arise from
/// caller error and map to `'?'`.
pub fn node_id_to_label(id: usize) -> char {
    u32::try_from(id)
        .ok()
        .and_then(|id| char::from_u32('A' as u32 + id))
        .unwrap_or('?')
}

/// Node identifier for a display letter, case-insensitive.
///
/// Returns `None` for anything that is not an ASCII letter; the viewer uses
/// this to validate free-form edge input.
pub fn label_to_node_id(label: char) -> Option<usize> {
    if label.is_ascii_alphabetic() {
        Some(label.to_ascii_uppercase() as usize - 'A' as usize)
    } else {
        None
    }
}

/// Display letter as a string, for the JS side.
#[wasm_bindgen(js_name = nodeIdToLabel)]
pub fn node_id_to_label_js(id: usize) -> String {
    node_id_to_label(id).to_string()
}

/// Node identifier for a one-letter string, case-insensitive.
/// Returns `undefined` in JS for anything but a single ASCII letter.
#[wasm_bindgen(js_name = labelToNodeId)]
pub fn label_to_node_id_js(label: &str) -> Option<usize> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => label_to_node_id(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_alphabet() {
        assert_eq!(node_id_to_label(0), 'A');
        assert_eq!(node_id_to_label(1), 'B');
        assert_eq!(node_id_to_label(25), 'Z');
    }

    #[test]
    fn test_label_roundtrip() {
        for id in 0..26 {
            assert_eq!(label_to_node_id(node_id_to_label(id)), Some(id));
        }
    }

    #[test]
    fn test_label_case_insensitive() {
        assert_eq!(label_to_node_id('a'), Some(0));
        assert_eq!(label_to_node_id('A'), Some(0));
        assert_eq!(label_to_node_id('e'), Some(4));
    }

    #[test]
    fn test_label_rejects_non_letters() {
        assert_eq!(label_to_node_id('3'), None);
        assert_eq!(label_to_node_id('-'), None);
        assert_eq!(label_to_node_id(' '), None);
    }

    #[test]
    fn test_js_string_boundary() {
        assert_eq!(node_id_to_label_js(2), "C");
        assert_eq!(label_to_node_id_js("d"), Some(3));
        assert_eq!(label_to_node_id_js("ab"), None);
        assert_eq!(label_to_node_id_js(""), None);
    }
}
