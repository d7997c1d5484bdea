//! Table formatting command.

use serde_json::Value;

use hookline_util::tablify;

use super::{CommandRegistry, arg};

/// Hook name of the `tablify` command.
pub const TABLIFY: &str = "tablify";

/// Register the table command.
pub async fn install(registry: &CommandRegistry) {
    registry
        .add_fn(TABLIFY, |args: &Vec<String>| {
            let delimiter = arg(args, 0, "delimiter")?;
            let input = arg(args, 1, "input")?;
            let rows: Vec<Vec<&str>> = input
                .lines()
                .map(|line| line.split(delimiter).collect())
                .collect();
            Ok(Some(Value::String(tablify(&rows))))
        })
        .await;
}
