//! Text and JSON output formatting for CLI commands.

use serde_json::{Value, json};

use hookline_core::AppResult;
use hookline_util::term_escape;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON object with the command name and its output
    Json,
}

/// Print a command result in the selected format
pub fn print_value(
    command: &str,
    value: &Value,
    format: OutputFormat,
    raw: bool,
) -> AppResult<()> {
    let rendered = render(command, value, format, raw)?;
    print!("{}", rendered);
    Ok(())
}

/// Render a command result without printing it.
pub fn render(
    command: &str,
    value: &Value,
    format: OutputFormat,
    raw: bool,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => {
            let text = match value {
                Value::String(s) => s.clone(),
                other => serde_json::to_string_pretty(other)?,
            };
            let mut text = if raw { text } else { term_escape(&text) };
            if !text.ends_with('\n') {
                text.push('\n');
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let document = json!({ "command": command, "output": value });
            Ok(format!("{}\n", serde_json::to_string_pretty(&document)?))
        }
    }
}
