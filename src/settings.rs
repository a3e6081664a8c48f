// src/settings.rs
use serde_json::{Map, Value};

/// A settings cascade resolved into one effective "final" view. This crate
/// only reads the final view; resolving the cascade itself belongs to the
/// configuration engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsCascade {
    final_settings: Map<String, Value>,
}

impl SettingsCascade {
    pub fn new(final_settings: Map<String, Value>) -> Self {
        Self { final_settings }
    }

    /// Build a cascade whose final view is the given JSON object. Any
    /// non-object value yields an empty cascade.
    pub fn from_final(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map),
            _ => Self::default(),
        }
    }

    /// Look up a dotted settings path in the final view.
    ///
    /// Settings objects may store compound keys literally (both `"a"` and
    /// `"a.b"` can be direct keys), so the lookup tries an explicit ordered
    /// candidate list at each object level: the longest dot-joined literal
    /// key first, then progressively shorter heads, descending into nested
    /// objects for the remainder. The most-specific literal key wins.
    pub fn final_value(&self, path: &str) -> Option<&Value> {
        let parts: Vec<&str> = path.split('.').collect();
        lookup_path(&self.final_settings, &parts)
    }
}

fn lookup_path<'a>(map: &'a Map<String, Value>, parts: &[&str]) -> Option<&'a Value> {
    for split in (1..=parts.len()).rev() {
        let key = parts[..split].join(".");
        let Some(value) = map.get(&key) else {
            continue;
        };
        if split == parts.len() {
            return Some(value);
        }
        if let Value::Object(inner) = value {
            if let Some(found) = lookup_path(inner, &parts[split..]) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn cascade(final_view: Value) -> SettingsCascade {
        SettingsCascade::from_final(final_view)
    }

    #[test]
    fn flat_compound_keys() {
        let settings = cascade(json!({ "a": 1, "a.b": 2, "c.d": 3 }));
        assert_eq!(settings.final_value("a"), Some(&json!(1)));
        assert_eq!(settings.final_value("a.b"), Some(&json!(2)));
        assert_eq!(settings.final_value("c.d"), Some(&json!(3)));
        assert_eq!(settings.final_value("x"), None);
    }

    #[test]
    fn nested_object_descent() {
        let settings = cascade(json!({ "a": { "b": { "c": 5 } } }));
        assert_eq!(settings.final_value("a.b.c"), Some(&json!(5)));
        assert_eq!(settings.final_value("a.b"), Some(&json!({ "c": 5 })));
        assert_eq!(settings.final_value("a.b.missing"), None);
    }

    #[test]
    fn literal_key_beats_nested_path() {
        let settings = cascade(json!({ "a.b": 2, "a": { "b": 9 } }));
        assert_eq!(settings.final_value("a.b"), Some(&json!(2)));
    }

    #[test]
    fn partial_literal_key_descends_into_remainder() {
        let settings = cascade(json!({ "a.b": { "c": 7 } }));
        assert_eq!(settings.final_value("a.b.c"), Some(&json!(7)));
    }

    #[test]
    fn non_object_final_view_is_empty() {
        let settings = cascade(json!("not an object"));
        assert_eq!(settings.final_value("a"), None);
        assert_eq!(settings, SettingsCascade::default());
    }

    #[test]
    fn empty_path_is_a_literal_empty_key() {
        let settings = cascade(json!({ "": 1 }));
        assert_eq!(settings.final_value(""), Some(&json!(1)));
        assert_eq!(SettingsCascade::default().final_value(""), None);
    }
}
