//! CLI command definitions and dispatch.
//!
//! Every subcommand is a hook name. Its handler is registered at start-up
//! and the command runs by dispatching that hook with the command's
//! positional arguments.

pub mod escape;
pub mod json;
pub mod table;
pub mod url;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tokio::io::AsyncReadExt;

use hookline_core::AppResult;
use hookline_core::error::AppError;
use hookline_hooks::HookRegistry;

use crate::output::{self, OutputFormat};

/// Registry mapping command names to handlers.
pub type CommandRegistry = HookRegistry<Vec<String>, Value, AppError>;

/// hookline: escaping, URL and JSON helpers
#[derive(Debug, Parser)]
#[command(name = "hookline", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print text output without escaping terminal control characters
    #[arg(long)]
    pub raw: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Escape `& < > " '` as XML entities
    XmlEscape {
        /// Text to escape
        value: String,
    },
    /// Decode the basic XML entities
    XmlUnescape {
        /// Text to unescape
        value: String,
    },
    /// Decode CSS hex escapes
    CssUnescape {
        /// Text to unescape
        value: String,
    },
    /// Escape regular expression metacharacters
    EscapeRegex {
        /// Text to escape
        value: String,
    },
    /// Split a URL into scheme, authority, path, query and fragment
    UrlSplit {
        /// URL to split
        url: String,
    },
    /// Percent-decode a URI component
    UrlDecode {
        /// Encoded component
        value: String,
    },
    /// Resolve a JSON pointer against a document
    JsonPointer {
        /// Pointer such as `/foo/0`
        pointer: String,
        /// Read the document from this file instead of stdin
        #[arg(long)]
        file: Option<String>,
    },
    /// Align delimited rows from stdin into columns
    Tablify {
        /// Cell delimiter
        #[arg(short, long, default_value = "\t")]
        delimiter: String,
    },
    /// Escape terminal control characters
    TermEscape {
        /// Text to escape
        value: String,
    },
}

impl Commands {
    /// Returns the hook name this command dispatches.
    pub fn hook_name(&self) -> &'static str {
        match self {
            Self::XmlEscape { .. } => escape::XML_ESCAPE,
            Self::XmlUnescape { .. } => escape::XML_UNESCAPE,
            Self::CssUnescape { .. } => escape::CSS_UNESCAPE,
            Self::EscapeRegex { .. } => escape::ESCAPE_REGEX,
            Self::TermEscape { .. } => escape::TERM_ESCAPE,
            Self::UrlSplit { .. } => url::URL_SPLIT,
            Self::UrlDecode { .. } => url::URL_DECODE,
            Self::JsonPointer { .. } => json::JSON_POINTER,
            Self::Tablify { .. } => table::TABLIFY,
        }
    }

    /// Collects the hook arguments, reading stdin or files where needed.
    pub async fn arguments(&self) -> AppResult<Vec<String>> {
        let args = match self {
            Self::XmlEscape { value }
            | Self::XmlUnescape { value }
            | Self::CssUnescape { value }
            | Self::EscapeRegex { value }
            | Self::TermEscape { value }
            | Self::UrlDecode { value } => vec![value.clone()],
            Self::UrlSplit { url } => vec![url.clone()],
            Self::JsonPointer { pointer, file } => {
                let document = match file {
                    Some(path) => tokio::fs::read_to_string(path).await?,
                    None => read_stdin().await?,
                };
                vec![pointer.clone(), document]
            }
            Self::Tablify { delimiter } => vec![delimiter.clone(), read_stdin().await?],
        };
        Ok(args)
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, registry: &CommandRegistry) -> AppResult<()> {
        let name = self.command.hook_name();
        let args = self.command.arguments().await?;

        let value = registry
            .run_hook(name, args)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No handler produced output for '{name}'")))?;

        output::print_value(name, &value, self.format, self.raw)
    }
}

/// Registers the handlers of every command.
pub async fn install(registry: &CommandRegistry) {
    escape::install(registry).await;
    url::install(registry).await;
    json::install(registry).await;
    table::install(registry).await;
}

/// Helper: fetch a positional hook argument.
pub fn arg<'a>(args: &'a [String], index: usize, what: &str) -> AppResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| AppError::validation(format!("Missing argument: {what}")))
}

async fn read_stdin() -> AppResult<String> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    Ok(input)
}
