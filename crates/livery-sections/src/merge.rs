//! Override merging and the visibility rule.

use serde_json::Value;

/// Merges `overlay` into `target`.
///
/// Objects merge key by key, recursively. Anything else in `overlay`
/// (scalars, arrays, null) replaces the target value wholesale. An object
/// overlaid on a non-object starts from an empty object.
///
/// ```rust
/// use livery_sections::deep_merge;
/// use serde_json::json;
///
/// let mut base = json!({"content": {"title": "Hi", "items": [1, 2]}, "order": 1});
/// deep_merge(&mut base, &json!({"content": {"items": [3]}, "order": 2}));
/// assert_eq!(base, json!({"content": {"title": "Hi", "items": [3]}, "order": 2}));
/// ```
pub fn deep_merge(target: &mut Value, overlay: &Value) {
    match overlay {
        Value::Object(overlay) => {
            if !target.is_object() {
                *target = Value::Object(Default::default());
            }
            if let Value::Object(target) = target {
                for (key, value) in overlay {
                    deep_merge(target.entry(key.clone()).or_insert(Value::Null), value);
                }
            }
        }
        other => *target = other.clone(),
    }
}

/// Decides whether a section is listed, given the baseline flag and the
/// override's `visible` field (`None` when there is no override or it does
/// not mention visibility).
///
/// A section is shown only when both sides explicitly say so. The cases
/// are evaluated in this order:
///
/// | override | baseline | result |
/// |----------|----------|--------|
/// | absent   | any      | hidden |
/// | `true`   | `false`  | hidden |
/// | `false`  | `true`   | hidden |
/// | `false`  | `false`  | hidden |
/// | `true`   | `true`   | shown  |
pub fn is_visible(has_override: bool, base_visible: bool, override_visible: Option<bool>) -> bool {
    if !has_override {
        return false;
    }
    match (override_visible, base_visible) {
        (Some(true), false) => false,
        (Some(false), true) => false,
        (Some(false), false) => false,
        (Some(true), true) => true,
        // Override present but silent about visibility.
        (None, _) => false,
    }
}
