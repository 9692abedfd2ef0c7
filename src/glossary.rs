//! Glossary extraction from structured content
//!
//! Structured-content definitions are nested trees of lists and tagged
//! objects. The walk is a depth-first descent that captures the text of
//! `li` (list item) nodes:
//!
//! - List: visit each child in order.
//! - Object with `content`:
//!   - `tag == "li"`: list content is captured as its elements joined by a
//!     single space (shallow, not recursive); object content is descended
//!     into; any other value is captured as text.
//!   - then `content` is descended into again, whether or not the node was
//!     an `li`.
//! - Anything else: ignored.
//!
//! The second descent means an `li` whose content is itself an object is
//! walked twice, so nested items come out duplicated. Existing consumers
//! depend on that output, so [`Traversal::RevisitItems`] keeps it as the
//! default and [`Traversal::SingleVisit`] is available as an opt-in.

use serde_json::Value;

/// Marker value of the `type` field on structured-content definitions
pub const STRUCTURED_CONTENT: &str = "structured-content";

/// How `li` nodes are revisited during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Capture an `li` node, then descend into its `content` again
    #[default]
    RevisitItems,
    /// Capture an `li` node and skip the second descent
    SingleVisit,
}

/// Walk a structured-content tree, appending captured glosses to `out`.
pub fn extract_glossary(node: &Value, traversal: Traversal, out: &mut Vec<String>) {
    match node {
        Value::Array(children) => {
            for child in children {
                extract_glossary(child, traversal, out);
            }
        }
        Value::Object(fields) => {
            let Some(content) = fields.get("content") else {
                return;
            };

            if fields.get("tag").and_then(Value::as_str) == Some("li") {
                match content {
                    Value::Array(parts) => out.push(join_parts(parts)),
                    Value::Object(_) => extract_glossary(content, traversal, out),
                    scalar => out.push(value_text(scalar)),
                }
                if traversal == Traversal::SingleVisit {
                    return;
                }
            }

            extract_glossary(content, traversal, out);
        }
        _ => {}
    }
}

/// Extract every gloss from an entry's definition list, in order.
///
/// Only `{"type": "structured-content", "content": ...}` items are walked;
/// plain string glosses and other definition kinds contribute nothing.
pub fn glossary_for_definitions(definitions: &[Value], traversal: Traversal) -> Vec<String> {
    let mut glossary = Vec::new();
    for definition in definitions.iter().filter(|d| is_structured_content(d)) {
        match definition.get("content") {
            Some(content) => extract_glossary(content, traversal, &mut glossary),
            None => tracing::debug!("Structured-content definition without content"),
        }
    }
    glossary
}

/// Check whether a definition item is a structured-content object
pub fn is_structured_content(definition: &Value) -> bool {
    definition.get("type").and_then(Value::as_str) == Some(STRUCTURED_CONTENT)
}

fn join_parts(parts: &[Value]) -> String {
    parts.iter().map(value_text).collect::<Vec<_>>().join(" ")
}

/// Flat text of a single value.
///
/// Strings are taken verbatim and `null` is empty. Everything else uses its
/// compact JSON form, with object keys in source order.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn walk(node: Value) -> Vec<String> {
        let mut out = Vec::new();
        extract_glossary(&node, Traversal::default(), &mut out);
        out
    }

    #[test]
    fn test_list_item_with_list_content_is_joined() {
        let glosses = walk(json!([{"tag": "li", "content": ["a", "b"]}]));
        assert_eq!(glosses, vec!["a b"]);
    }

    #[test]
    fn test_list_item_nested_under_div() {
        let glosses = walk(json!({"tag": "div", "content": [{"tag": "li", "content": "x"}]}));
        assert_eq!(glosses, vec!["x"]);
    }

    #[test]
    fn test_join_is_shallow() {
        let glosses = walk(json!({
            "tag": "li",
            "content": ["to ", {"tag": "span", "content": "read"}]
        }));
        assert_eq!(glosses, vec![r#"to  {"tag":"span","content":"read"}"#]);
    }

    #[test]
    fn test_object_keys_keep_source_order() {
        let node: Value = serde_json::from_str(
            r#"{"tag":"li","content":["to",{"tag":"span","content":"read","data":{"z":1,"a":2}},true,null]}"#,
        )
        .unwrap();
        assert_eq!(
            walk(node),
            vec![r#"to {"tag":"span","content":"read","data":{"z":1,"a":2}} true "#]
        );
    }

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(walk(json!({"tag": "li", "content": 42})), vec!["42"]);
        assert_eq!(walk(json!({"tag": "li", "content": ["n", 1, true]})), vec!["n 1 true"]);
        assert_eq!(walk(json!({"tag": "li", "content": null})), vec![""]);
    }

    #[test]
    fn test_item_with_object_content_is_walked_twice() {
        // Current output duplicates nested items; see Traversal::SingleVisit.
        let node = json!({"tag": "li", "content": {"tag": "li", "content": "x"}});
        assert_eq!(walk(node), vec!["x", "x"]);
    }

    #[test]
    fn test_single_visit_skips_second_descent() {
        let node = json!({"tag": "li", "content": {"tag": "li", "content": "x"}});
        let mut out = Vec::new();
        extract_glossary(&node, Traversal::SingleVisit, &mut out);
        assert_eq!(out, vec!["x"]);
    }

    #[test]
    fn test_items_inside_joined_list_are_still_visited() {
        let node = json!({"tag": "li", "content": [{"tag": "li", "content": "inner"}]});
        assert_eq!(
            walk(node.clone()),
            vec![r#"{"tag":"li","content":"inner"}"#.to_string(), "inner".to_string()]
        );

        let mut out = Vec::new();
        extract_glossary(&node, Traversal::SingleVisit, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_nodes_without_items_capture_nothing() {
        assert!(walk(json!("plain")).is_empty());
        assert!(walk(json!({"tag": "ul"})).is_empty());
        assert!(walk(json!({"tag": "div", "content": ["a", {"tag": "span", "content": "b"}]})).is_empty());
        assert!(walk(json!({"tag": "li"})).is_empty());
    }

    #[test]
    fn test_dfs_order_is_preserved() {
        let glosses = walk(json!([
            {"tag": "ol", "content": [
                {"tag": "li", "content": "first"},
                {"tag": "li", "content": ["second", "part"]}
            ]},
            {"tag": "li", "content": "third"}
        ]));
        assert_eq!(glosses, vec!["first", "second part", "third"]);
    }

    #[test]
    fn test_only_structured_content_definitions_are_walked() {
        let definitions = vec![
            json!("plain gloss"),
            json!({"type": "image", "content": {"tag": "li", "content": "ignored"}}),
            json!({"type": "structured-content", "content": [{"tag": "li", "content": ["a", "b"]}]}),
            json!({"type": "structured-content"}),
            json!({"type": "structured-content", "content": {"tag": "li", "content": "c"}}),
        ];

        let glossary = glossary_for_definitions(&definitions, Traversal::default());
        assert_eq!(glossary, vec!["a b", "c"]);
    }
}
