//! Hook dispatch. Runs a chain sequentially and stops at the first answer.
//!
//! - Handlers run one at a time, in registration order.
//! - `Ok(None)` continues with the next handler.
//! - `Ok(Some(value))` stops the chain; `value` is the result.
//! - `Err(error)` stops the chain; `error` is returned unchanged.
//!
//! The chain is snapshotted when dispatch starts. Handlers added or removed
//! while it runs only affect later dispatches.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use hookline_core::error::AbortError;

use super::definitions::HookResult;
use super::registry::HookRegistry;

impl<A, T, E> HookRegistry<A, T, E>
where
    A: Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Dispatches the chain registered under `name` against `args`.
    ///
    /// Resolves to `Ok(None)` when no chain is registered or every handler
    /// continued.
    pub async fn run_hook(&self, name: &str, args: A) -> HookResult<T, E> {
        let Some(chain) = self.chain(name).await else {
            trace!(hook = %name, "No handlers registered");
            return Ok(None);
        };

        debug!(hook = %name, handler_count = chain.len(), "Dispatching hook");

        let slow_after = match self.config.slow_handler_warn_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };

        for (position, handler) in chain.iter().enumerate() {
            let started = Instant::now();
            let outcome = handler.handle(&args).await;

            if let Some(limit) = slow_after {
                let elapsed = started.elapsed();
                if elapsed > limit {
                    warn!(
                        hook = %name,
                        handler = handler.name(),
                        position,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Hook handler was slow"
                    );
                }
            }

            match outcome {
                Ok(None) => {
                    if self.config.cooperative_yield {
                        tokio::task::yield_now().await;
                    }
                }
                Ok(Some(value)) => {
                    debug!(
                        hook = %name,
                        handler = handler.name(),
                        position,
                        "Handler stopped the chain"
                    );
                    return Ok(Some(value));
                }
                Err(err) => {
                    debug!(
                        hook = %name,
                        handler = handler.name(),
                        position,
                        "Handler failed, aborting chain"
                    );
                    return Err(err);
                }
            }
        }

        Ok(None)
    }

    /// Dispatches like [`run_hook`](Self::run_hook), but gives up as soon as
    /// `cancel` fires.
    ///
    /// A cancelled dispatch resolves to [`AbortError`] converted into `E`;
    /// the handler in flight is dropped and no further handlers run.
    pub async fn run_hook_cancellable(
        &self,
        name: &str,
        args: A,
        cancel: &CancellationToken,
    ) -> HookResult<T, E>
    where
        E: From<AbortError>,
    {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(hook = %name, "Hook dispatch cancelled");
                Err(AbortError::default().into())
            }
            outcome = self.run_hook(name, args) => outcome,
        }
    }
}
