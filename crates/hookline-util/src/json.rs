//! JSON pointer lookup (RFC 6901).

use serde_json::Value;

static NULL: Value = Value::Null;

/// Resolves `pointer` against `value`.
///
/// - `""` resolves to `value` itself.
/// - A non-empty pointer without a leading `/` resolves to JSON `null`.
/// - Object members are looked up by key (members holding `null` are found).
/// - Array elements are looked up by an all-digit index.
/// - Anything else, including a missing member or an out-of-range index,
///   resolves to `None`.
pub fn json_pointer<'v>(value: &'v Value, pointer: &str) -> Option<&'v Value> {
    let Some(path) = pointer.strip_prefix('/') else {
        return if pointer.is_empty() { Some(value) } else { Some(&NULL) };
    };

    let mut data = value;
    for part in path.split('/') {
        let key = part.replace("~1", "/").replace("~0", "~");
        data = match data {
            Value::Object(map) => map.get(&key)?,
            Value::Array(items) if is_index(&key) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(data)
}

fn is_index(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}
