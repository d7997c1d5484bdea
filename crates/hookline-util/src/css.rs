//! CSS escape sequences.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static CSS_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([0-9a-fA-F]{1,6})\s?").expect("valid css escape regex"));

/// Unescapes CSS hex escapes such as `\2603` or `\002603 `.
///
/// Escaped newlines (`\` followed by `n`) are dropped first. A hex escape
/// consumes at most one trailing whitespace character. Code points that are
/// not valid scalar values become U+FFFD.
pub fn css_unescape(value: &str) -> String {
    let value = value.replace("\\n", "");
    CSS_ESCAPE
        .replace_all(&value, |caps: &Captures<'_>| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
                .to_string()
        })
        .into_owned()
}
