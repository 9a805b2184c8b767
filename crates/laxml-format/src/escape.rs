//! Escaping for attribute values.

use std::borrow::Cow;

/// Escape an attribute value for writing between double quotes.
///
/// Only `"` needs escaping; it becomes `\"`. Backslashes are written as-is, since the
/// attribute syntax has no way to escape them.
pub fn escape_arg_value(value: &str) -> Cow<'_, str> {
    if !value.contains('"') {
        return Cow::Borrowed(value);
    }
    Cow::Owned(value.replace('"', "\\\""))
}
