//! Text escaping commands.

use serde_json::Value;

use hookline_util::{css_unescape, escape_regexp, term_escape, xml_escape, xml_unescape};

use super::{CommandRegistry, arg};

/// Hook name of the `xml-escape` command.
pub const XML_ESCAPE: &str = "xml-escape";
/// Hook name of the `xml-unescape` command.
pub const XML_UNESCAPE: &str = "xml-unescape";
/// Hook name of the `css-unescape` command.
pub const CSS_UNESCAPE: &str = "css-unescape";
/// Hook name of the `escape-regex` command.
pub const ESCAPE_REGEX: &str = "escape-regex";
/// Hook name of the `term-escape` command.
pub const TERM_ESCAPE: &str = "term-escape";

/// Register the escaping commands.
pub async fn install(registry: &CommandRegistry) {
    registry
        .add_fn(XML_ESCAPE, |args: &Vec<String>| {
            Ok(Some(Value::String(xml_escape(arg(args, 0, "value")?))))
        })
        .await;
    registry
        .add_fn(XML_UNESCAPE, |args: &Vec<String>| {
            Ok(Some(Value::String(xml_unescape(arg(args, 0, "value")?))))
        })
        .await;
    registry
        .add_fn(CSS_UNESCAPE, |args: &Vec<String>| {
            Ok(Some(Value::String(css_unescape(arg(args, 0, "value")?))))
        })
        .await;
    registry
        .add_fn(ESCAPE_REGEX, |args: &Vec<String>| {
            Ok(Some(Value::String(escape_regexp(arg(args, 0, "value")?))))
        })
        .await;
    registry
        .add_fn(TERM_ESCAPE, |args: &Vec<String>| {
            Ok(Some(Value::String(term_escape(arg(args, 0, "value")?))))
        })
        .await;
}
