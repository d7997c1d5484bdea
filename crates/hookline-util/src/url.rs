//! URL splitting and percent-decoding.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The reference regular expression from RFC 3986, appendix B.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?")
        .expect("valid RFC 3986 regex")
});

/// The five components of a URI reference. Missing parts are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    /// Scheme without the trailing `:`.
    pub scheme: String,
    /// Authority without the leading `//`.
    pub authority: String,
    /// Path, possibly relative.
    pub path: String,
    /// Query without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`.
    pub fragment: String,
}

/// Splits a URI reference into its components.
///
/// No validation or normalization happens; this is a purely syntactic
/// split that accepts relative references and IRIs.
pub fn url_split(url: &str) -> Option<UrlParts> {
    let caps = URL_RE.captures(url)?;
    let part = |i: usize| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default();

    Some(UrlParts {
        scheme: part(2),
        authority: part(4),
        path: part(5),
        query: part(7),
        fragment: part(9),
    })
}

/// Percent-decodes `value`, returning `None` instead of failing.
///
/// Fails on a `%` not followed by two hex digits and on escapes that do not
/// decode to valid UTF-8.
pub fn decode_uri_component_safe(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
}
