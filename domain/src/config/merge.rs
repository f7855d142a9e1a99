//! Merging configuration fragments
//!
//! Used when values are written into an existing configuration file: arrays
//! are concatenated, objects are merged recursively and everything else is
//! overwritten by the incoming value.

use crate::project::ProjectFile;
use serde_json::{Map, Value, json};

/// Merges `source` into `dest`.
///
/// For each key of `source`:
/// - both values are arrays: the source items are appended to `dest`'s
/// - `dest` holds an object: merge recursively (a non-object source value
///   contributes nothing)
/// - otherwise the source value replaces `dest`'s
///
/// Nothing happens unless both sides are objects. Duplicates are not
/// removed; callers check for existing entries beforehand.
pub fn merge(source: &Value, dest: &mut Value) {
    let (Some(source), Some(dest)) = (source.as_object(), dest.as_object_mut()) else {
        return;
    };

    for (key, value) in source {
        match (dest.get_mut(key), value) {
            (Some(Value::Array(existing)), Value::Array(extra)) => {
                existing.extend(extra.iter().cloned());
            }
            (Some(existing @ Value::Object(_)), _) => {
                if value.is_object() {
                    merge(value, existing);
                }
            }
            _ => {
                dest.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Initial contents for a configuration file created on demand.
pub fn defaults_for(file: ProjectFile) -> Option<Value> {
    match file {
        ProjectFile::TernProject => Some(json!({
            "ecmaVersion": 6,
            "libs": ["ecma5", "ecma6"],
            "plugins": Value::Object(Map::new()),
            "loadEagerly": [],
        })),
        _ => None,
    }
}

/// Serializes a configuration document the way project files are written:
/// pretty-printed with tab indentation.
pub fn to_pretty_json(value: &Value) -> String {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    match serde::Serialize::serialize(value, &mut serializer) {
        Ok(()) => String::from_utf8(out).unwrap_or_default(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrays_concatenate() {
        let mut dest = json!({"libs": ["ecma5"]});
        merge(&json!({"libs": ["browser"]}), &mut dest);
        assert_eq!(dest, json!({"libs": ["ecma5", "browser"]}));
    }

    #[test]
    fn test_objects_merge_deeply() {
        let mut dest = json!({"plugins": {"node": {}, "doc": {"strong": true}}});
        merge(
            &json!({"plugins": {"requirejs": {}, "doc": {"fullDocs": true}}}),
            &mut dest,
        );
        assert_eq!(
            dest,
            json!({"plugins": {
                "node": {},
                "requirejs": {},
                "doc": {"strong": true, "fullDocs": true}
            }})
        );
    }

    #[test]
    fn test_scalars_overwrite() {
        let mut dest = json!({"ecmaVersion": 5, "keep": 1});
        merge(&json!({"ecmaVersion": 6, "added": "x"}), &mut dest);
        assert_eq!(dest, json!({"ecmaVersion": 6, "keep": 1, "added": "x"}));
    }

    #[test]
    fn test_non_object_source_leaves_object_alone() {
        let mut dest = json!({"plugins": {"node": {}}});
        merge(&json!({"plugins": null}), &mut dest);
        assert_eq!(dest, json!({"plugins": {"node": {}}}));
    }

    #[test]
    fn test_array_over_scalar_replaces() {
        let mut dest = json!({"libs": "ecma5"});
        merge(&json!({"libs": ["ecma6"]}), &mut dest);
        assert_eq!(dest, json!({"libs": ["ecma6"]}));
    }

    #[test]
    fn test_defaults_for_tern_project() {
        let defaults = defaults_for(ProjectFile::TernProject).unwrap();
        assert_eq!(defaults["ecmaVersion"], json!(6));
        assert_eq!(defaults["libs"], json!(["ecma5", "ecma6"]));
        assert!(defaults_for(ProjectFile::PackageJson).is_none());
    }

    #[test]
    fn test_pretty_json_uses_tabs() {
        let text = to_pretty_json(&json!({"a": 1}));
        assert_eq!(text, "{\n\t\"a\": 1\n}");
    }
}
