//! Safe nested-field access over raw error values
//!
//! Raw errors arrive with arbitrary shapes: bare strings, numbers,
//! nested objects, nulls. Builders probe optional fields through this
//! module so that a malformed payload can never fail classification: a
//! missing step resolves to `None`, and a value of the wrong shape
//! falls back to the default declared at the call site.

use serde_json::{Map, Value};

/// Traverse a dotted path into a raw value
///
/// An empty path (or an empty path segment) is a no-op step that yields
/// the container itself. Any missing intermediate or terminal key yields
/// `None`, including probes into scalars. Numeric segments index into
/// arrays.
#[must_use]
pub fn resolve<'v>(container: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(container, |current, key| {
        if key.is_empty() {
            return Some(current);
        }
        current
            .get(key)
            .or_else(|| key.parse::<usize>().ok().and_then(|index| current.get(index)))
    })
}

/// Shapes a resolved field can be read as
///
/// Implemented for the target types builders declare at their call
/// sites. A traversed value converts only when its JSON shape matches
/// the declared type, which is what makes [`resolve_or`] total: a
/// string where a number was declared falls back to the default instead
/// of surfacing an error.
pub trait FieldShape: Sized {
    /// Convert a traversed value into the declared shape
    fn from_field(value: &Value) -> Option<Self>;
}

impl FieldShape for String {
    fn from_field(value: &Value) -> Option<Self> {
        value.as_str().map(ToOwned::to_owned)
    }
}

impl FieldShape for i64 {
    fn from_field(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FieldShape for bool {
    fn from_field(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldShape for Value {
    fn from_field(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FieldShape for Map<String, Value> {
    fn from_field(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FieldShape for Vec<Value> {
    fn from_field(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

/// Resolve a dotted path, falling back when the path is missing or the
/// found value does not convert to the declared shape
#[must_use]
pub fn resolve_or<T: FieldShape>(container: &Value, path: &str, default: T) -> T {
    resolve(container, path).and_then(T::from_field).unwrap_or(default)
}
