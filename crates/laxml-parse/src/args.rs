//! Attribute string parsing.

use std::borrow::Cow;
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Parsed attributes: name to unescaped value.
pub type ArgMap = BTreeMap<String, String>;

/// `key = "value"`, where the value may contain `\"`.
static ARG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<key>[a-zA-Z][a-zA-Z0-9_-]*)\s*=\s*"(?P<value>(?:\\"|[^"])*)""#)
        .expect("attribute pattern is a valid regex")
});

/// Parse a raw attribute fragment such as `id="1" title="say \"hi\""`.
///
/// Matches are collected left to right without overlap. Text that does not form a
/// `key="value"` pair is skipped, and a key that appears twice keeps its last value.
/// Never fails: an unparseable fragment yields an empty map.
pub fn parse_arg_string(arg_string: &str) -> ArgMap {
    ARG_REGEX
        .captures_iter(arg_string)
        .map(|caps| {
            let value = unescape_arg_value(&caps["value"]).into_owned();
            (caps["key"].to_string(), value)
        })
        .collect()
}

/// Replace every `\"` with `"`. Other backslashes are left alone.
pub fn unescape_arg_value(value: &str) -> Cow<'_, str> {
    if value.contains("\\\"") {
        Cow::Owned(value.replace("\\\"", "\""))
    } else {
        Cow::Borrowed(value)
    }
}
