//! Hook names and handler outcome types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque key identifying a category of event, e.g. `"request"` or `"render"`.
///
/// Any string is a valid hook name, including one that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookName(String);

impl HookName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HookName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for HookName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for HookName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for HookName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Outcome of a single handler, and of a whole chain.
///
/// - `Ok(None)`: the handler has nothing to say, the chain continues.
/// - `Ok(Some(value))`: the chain stops and `value` is its result.
/// - `Err(error)`: the chain stops and `error` is propagated as-is.
///
/// Any `Some` stops the chain, including `Some(false)` or an empty value.
pub type HookResult<T, E> = Result<Option<T>, E>;
