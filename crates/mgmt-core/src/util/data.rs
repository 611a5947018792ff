//! JSON value helpers used by the layered configuration.

use serde_json::Value;

/// Deep merge two values.
/// Recursively merges objects, with overlay values taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}

/// Get value at a path in dotted notation.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            Value::Array(arr) => {
                let index: usize = part.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Set a value at a dotted path, creating intermediate objects as needed.
///
/// Non-object intermediates are replaced by objects.
pub fn set_path(data: &mut Value, path: &str, value: Value) {
    let mut parts: Vec<&str> = path.split('.').collect();
    let last = match parts.pop() {
        Some(last) => last,
        None => return,
    };

    let mut current = data;
    for part in parts {
        if !current.is_object() {
            *current = Value::Object(Default::default());
        }
        current = match current {
            Value::Object(map) => map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Default::default())),
            _ => return,
        };
    }

    if !current.is_object() {
        *current = Value::Object(Default::default());
    }
    if let Value::Object(map) = current {
        map.insert(last.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_overlay_wins() {
        let base = json!({"logging": {"level": "info", "persist": true}});
        let overlay = json!({"logging": {"level": "debug"}});

        let merged = deep_merge(base, overlay);
        assert_eq!(merged, json!({"logging": {"level": "debug", "persist": true}}));
    }

    #[test]
    fn test_get_path() {
        let value = json!({"logging": {"backup_count": 3}, "list": [1, 2]});
        assert_eq!(get_path(&value, "logging.backup_count"), Some(&json!(3)));
        assert_eq!(get_path(&value, "list.1"), Some(&json!(2)));
        assert_eq!(get_path(&value, "logging.missing"), None);
    }

    #[test]
    fn test_set_path_creates_intermediates() {
        let mut value = json!({"logging": "scalar"});
        set_path(&mut value, "logging.path", json!("/tmp/logs"));
        set_path(&mut value, "other.deep.key", json!(true));

        assert_eq!(value["logging"]["path"], json!("/tmp/logs"));
        assert_eq!(value["other"]["deep"]["key"], json!(true));
    }
}
