//! Dotted key expansion into nested JSON objects

use crate::error::{GslocError, GslocResult};
use crate::types::Translation;
use serde_json::{Map, Value};

/// Nested locale document; inner nodes are objects, leaves are strings
pub type LocaleTree = Map<String, Value>;

/// Set `value` at the dotted `key` path, creating intermediate objects.
///
/// Descending through an existing string leaf, or replacing an object with
/// a leaf, fails with [`GslocError::KeyPathConflict`]. Setting the same leaf
/// twice keeps the later value.
pub fn insert_path(tree: &mut LocaleTree, key: &str, value: &str) -> GslocResult<()> {
    let mut segments: Vec<&str> = key.split('.').collect();
    // split always yields at least one segment
    let last = segments.pop().unwrap_or(key);

    let mut node = tree;
    for segment in segments {
        let child = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        node = match child {
            Value::Object(map) => map,
            _ => return Err(conflict(key, segment, "value")),
        };
    }

    if let Some(Value::Object(_)) = node.get(last) {
        return Err(conflict(key, last, "group of keys"));
    }
    node.insert(last.to_string(), Value::String(value.to_string()));

    Ok(())
}

/// Fold a locale's translations into one tree
pub fn build_tree(translations: &[Translation]) -> GslocResult<LocaleTree> {
    let mut tree = LocaleTree::new();
    for t in translations {
        insert_path(&mut tree, &t.key, &t.value)?;
    }
    Ok(tree)
}

fn conflict(key: &str, segment: &str, existing: &'static str) -> GslocError {
    GslocError::KeyPathConflict {
        key: key.to_string(),
        segment: segment.to_string(),
        existing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_segment() {
        let mut tree = LocaleTree::new();
        insert_path(&mut tree, "title", "Hello").unwrap();
        assert_eq!(Value::Object(tree), json!({"title": "Hello"}));
    }

    #[test]
    fn test_siblings_share_parent() {
        let mut tree = LocaleTree::new();
        insert_path(&mut tree, "a.b", "x").unwrap();
        insert_path(&mut tree, "a.c", "y").unwrap();
        assert_eq!(Value::Object(tree), json!({"a": {"b": "x", "c": "y"}}));
    }

    #[test]
    fn test_deep_paths() {
        let tree = build_tree(&[
            Translation::new("menu.file.open", "Open"),
            Translation::new("menu.file.close", "Close"),
            Translation::new("menu.edit", "Edit"),
        ])
        .unwrap();
        assert_eq!(
            Value::Object(tree),
            json!({"menu": {"file": {"open": "Open", "close": "Close"}, "edit": "Edit"}})
        );
    }

    #[test]
    fn test_insertion_order_kept() {
        let tree = build_tree(&[
            Translation::new("z", "1"),
            Translation::new("a", "2"),
            Translation::new("m", "3"),
        ])
        .unwrap();
        let keys: Vec<&String> = tree.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_leaf_last_wins() {
        let tree = build_tree(&[Translation::new("a.b", "old"), Translation::new("a.b", "new")])
            .unwrap();
        assert_eq!(Value::Object(tree), json!({"a": {"b": "new"}}));
    }

    #[test]
    fn test_conflict_descending_through_leaf() {
        let err = build_tree(&[Translation::new("a", "x"), Translation::new("a.b", "y")])
            .unwrap_err();
        match err {
            GslocError::KeyPathConflict { key, segment, .. } => {
                assert_eq!(key, "a.b");
                assert_eq!(segment, "a");
            }
            other => panic!("expected KeyPathConflict, got {other}"),
        }
    }

    #[test]
    fn test_conflict_leaf_over_group() {
        let err = build_tree(&[Translation::new("a.b", "x"), Translation::new("a", "y")])
            .unwrap_err();
        assert!(matches!(err, GslocError::KeyPathConflict { ref segment, .. } if segment == "a"));
    }

    #[test]
    fn test_empty_segments_are_literal() {
        let tree = build_tree(&[Translation::new("a..b", "x")]).unwrap();
        assert_eq!(Value::Object(tree), json!({"a": {"": {"b": "x"}}}));
    }
}
