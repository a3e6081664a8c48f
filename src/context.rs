use std::collections::BTreeMap;

use serde_json::Value;

/// Flat key/value map of miscellaneous client state consumed by extensions
/// and UI conditionals. Stored `Value::Null` entries are legal; `Null` only
/// means deletion when it appears in an update passed to
/// [`apply_context_update`].
pub type Context = BTreeMap<String, Value>;

/// Fold a partial update into an existing context, producing a new map.
///
/// For every key in `update`: a `Null` value removes the key from the result
/// (a no-op if it was absent), any other value sets or overwrites it. Keys of
/// `base` not mentioned in `update` pass through unchanged. Neither input is
/// mutated.
pub fn apply_context_update(base: &Context, update: &Context) -> Context {
    let mut result = base.clone();
    for (key, value) in update {
        if value.is_null() {
            result.remove(key);
        } else {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}
