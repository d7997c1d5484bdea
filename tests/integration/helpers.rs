//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hookline_core::error::AppError;
use hookline_hooks::HookRegistry;

/// Registry type used by most tests: string arguments, JSON results.
pub type TestRegistry = HookRegistry<String, serde_json::Value, AppError>;

/// Shared, ordered record of handler side effects.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().expect("log poisoned").push(entry.into());
    }

    /// Snapshot of all entries so far.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().expect("log poisoned").clone()
    }
}

/// Register an async handler that records `start{n}`, sleeps, then records
/// `end{n}` and lets the chain continue.
pub async fn add_marker_handler(
    registry: &TestRegistry,
    name: &str,
    log: &EventLog,
    n: u32,
    delay: Duration,
) {
    let log = log.clone();
    registry
        .add_async(name, move |arg: &String| {
            let log = log.clone();
            let arg = arg.clone();
            async move {
                log.push(format!("start{n}:{arg}"));
                tokio::time::sleep(delay).await;
                log.push(format!("end{n}:{arg}"));
                Ok(None)
            }
        })
        .await;
}
