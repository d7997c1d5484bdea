//! Hook dispatcher configuration.

use serde::{Deserialize, Serialize};

/// Dispatcher tuning knobs.
///
/// None of these change which handlers run or in what order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Yield to the runtime after each handler that lets the chain continue.
    #[serde(default = "default_true")]
    pub cooperative_yield: bool,
    /// Warn when a single handler runs longer than this many milliseconds
    /// (0 = disabled).
    #[serde(default)]
    pub slow_handler_warn_ms: u64,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            cooperative_yield: true,
            slow_handler_warn_ms: 0,
        }
    }
}

fn default_true() -> bool {
    true
}
