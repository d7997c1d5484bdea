//! URL commands.

use serde_json::Value;

use hookline_core::error::AppError;
use hookline_util::{decode_uri_component_safe, url_split};

use super::{CommandRegistry, arg};

/// Hook name of the `url-split` command.
pub const URL_SPLIT: &str = "url-split";
/// Hook name of the `url-decode` command.
pub const URL_DECODE: &str = "url-decode";

/// Register the URL commands.
pub async fn install(registry: &CommandRegistry) {
    registry
        .add_fn(URL_SPLIT, |args: &Vec<String>| {
            let url = arg(args, 0, "url")?;
            let parts = url_split(url)
                .ok_or_else(|| AppError::validation(format!("Not a URI reference: {url}")))?;
            Ok(Some(serde_json::to_value(parts)?))
        })
        .await;
    registry
        .add_fn(URL_DECODE, |args: &Vec<String>| {
            let value = arg(args, 0, "value")?;
            decode_uri_component_safe(value)
                .map(|decoded| Some(Value::String(decoded)))
                .ok_or_else(|| AppError::validation(format!("Malformed URI component: {value}")))
        })
        .await;
}
