//! JSON pointer command.

use serde_json::Value;

use hookline_core::error::AppError;
use hookline_util::json_pointer;

use super::{CommandRegistry, arg};

/// Hook name of the `json-pointer` command.
pub const JSON_POINTER: &str = "json-pointer";

/// Register the JSON pointer command.
pub async fn install(registry: &CommandRegistry) {
    registry
        .add_fn(JSON_POINTER, |args: &Vec<String>| {
            let pointer = arg(args, 0, "pointer")?;
            let document: Value = serde_json::from_str(arg(args, 1, "document")?)?;
            json_pointer(&document, pointer)
                .cloned()
                .map(Some)
                .ok_or_else(|| AppError::not_found(format!("Nothing at JSON pointer '{pointer}'")))
        })
        .await;
}
