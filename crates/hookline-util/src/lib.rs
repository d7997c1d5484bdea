//! # hookline-util
//!
//! Stateless helpers used by hook handlers and the command-line binary.
//! Every function here is a pure input-to-output transformation.

pub mod css;
pub mod json;
pub mod pattern;
pub mod text;
pub mod url;
pub mod xml;

pub use css::css_unescape;
pub use json::json_pointer;
pub use pattern::{StickyCursor, escape_regexp, sticky_match};
pub use text::{tablify, term_escape};
pub use url::{UrlParts, decode_uri_component_safe, url_split};
pub use xml::{SafeString, XmlEscape, xml_escape, xml_unescape};
