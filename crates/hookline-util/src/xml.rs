//! XML escaping.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static XML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(amp|lt|gt|quot|apos|#39);").expect("valid entity regex"));

/// Markup that is already safe and must not be escaped again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafeString(String);

impl SafeString {
    /// Marks `value` as safe markup.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SafeString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SafeString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Values that know how to render themselves as XML text.
pub trait XmlEscape {
    /// Returns the XML-escaped form, borrowing when nothing needs escaping.
    fn xml_escaped(&self) -> Cow<'_, str>;
}

impl XmlEscape for str {
    fn xml_escaped(&self) -> Cow<'_, str> {
        escape_markup(self)
    }
}

impl XmlEscape for String {
    fn xml_escaped(&self) -> Cow<'_, str> {
        escape_markup(self)
    }
}

impl XmlEscape for SafeString {
    fn xml_escaped(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

/// Escapes `& < > " '` for use in XML text and attributes.
///
/// [`SafeString`] values are returned unchanged.
pub fn xml_escape<V: XmlEscape + ?Sized>(value: &V) -> String {
    value.xml_escaped().into_owned()
}

/// Reverses the entities produced by [`xml_escape`], plus `&apos;`.
///
/// Any other entity is left alone.
pub fn xml_unescape(value: &str) -> String {
    XML_ENTITY
        .replace_all(value, |caps: &Captures<'_>| match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "'",
        })
        .into_owned()
}

fn escape_markup(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
