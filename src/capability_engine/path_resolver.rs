use serde_json::{Map, Value};

/// Walks `path` through nested objects. A missing key, or a non-object on the way, ends the walk with `None`.
pub fn resolve_path<'a>(root: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter().try_fold(root.get(*first)?, |value, key| value.as_object()?.get(*key))
}
