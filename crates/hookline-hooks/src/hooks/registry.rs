//! Hook registry: handlers registered by hook name, kept in registration order.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use hookline_core::config::hooks::HooksConfig;
use hookline_core::error::AppError;

use super::definitions::{HookName, HookResult};
use super::handler::{AsyncFnHook, FnHook, HandlerRef};

/// Registry of hook handlers organized by hook name.
///
/// `A` is the argument type shared by every handler of a chain, `T` the
/// value a handler returns to stop the chain, `E` the failure type. The
/// registry is an ordinary value: construct one per component that needs it
/// and share it through an `Arc`.
pub struct HookRegistry<A, T, E = AppError> {
    /// Hook name → handlers in registration order.
    chains: RwLock<HashMap<HookName, Vec<HandlerRef<A, T, E>>>>,
    /// Dispatcher settings.
    pub(crate) config: HooksConfig,
}

impl<A, T, E> HookRegistry<A, T, E>
where
    A: Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a new empty hook registry with default settings.
    pub fn new() -> Self {
        Self::with_config(HooksConfig::default())
    }

    /// Creates a new empty hook registry with the given dispatcher settings.
    pub fn with_config(config: HooksConfig) -> Self {
        Self {
            chains: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Returns the dispatcher settings.
    pub fn config(&self) -> &HooksConfig {
        &self.config
    }

    /// Appends a handler to the chain for `name`, creating the chain if absent.
    ///
    /// Handlers are not deduplicated: adding the same handle twice makes it
    /// run twice per dispatch.
    pub async fn add_hook(&self, name: impl Into<HookName>, handler: HandlerRef<A, T, E>) {
        let name = name.into();
        let mut chains = self.chains.write().await;
        let chain = chains.entry(name.clone()).or_default();
        chain.push(handler);

        debug!(hook = %name, chain_len = chain.len(), "Hook handler registered");
    }

    /// Registers a synchronous closure and returns its handle.
    pub async fn add_fn<F>(&self, name: impl Into<HookName>, handler: F) -> HandlerRef<A, T, E>
    where
        F: Fn(&A) -> HookResult<T, E> + Send + Sync + 'static,
    {
        let name = name.into();
        let handler: HandlerRef<A, T, E> = Arc::new(FnHook::new(name.as_str(), handler));
        self.add_hook(name, handler.clone()).await;
        handler
    }

    /// Registers an asynchronous closure and returns its handle.
    pub async fn add_async<F, Fut>(
        &self,
        name: impl Into<HookName>,
        handler: F,
    ) -> HandlerRef<A, T, E>
    where
        F: Fn(&A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<T, E>> + Send + 'static,
    {
        let name = name.into();
        let handler: HandlerRef<A, T, E> = Arc::new(AsyncFnHook::new(name.as_str(), handler));
        self.add_hook(name, handler.clone()).await;
        handler
    }

    /// Removes handlers from the chain for `name`.
    ///
    /// With `None`, the whole chain is deleted and later dispatches behave as
    /// if `name` was never registered. With `Some(handler)`, every occurrence
    /// of that exact handle is removed and the remaining handlers keep their
    /// order. Unknown names and absent handlers are ignored.
    pub async fn remove_hook(&self, name: &str, handler: Option<&HandlerRef<A, T, E>>) {
        let mut chains = self.chains.write().await;

        match handler {
            None => {
                if chains.remove(name).is_some() {
                    debug!(hook = %name, "Hook chain removed");
                }
            }
            Some(target) => {
                if let Some(chain) = chains.get_mut(name) {
                    let before = chain.len();
                    chain.retain(|h| !Arc::ptr_eq(h, target));
                    debug!(
                        hook = %name,
                        removed = before - chain.len(),
                        chain_len = chain.len(),
                        "Hook handler removed"
                    );
                }
            }
        }
    }

    /// Returns a snapshot of the chain for `name`, or `None` if no chain is
    /// registered.
    ///
    /// The read guard is released before this returns, so the snapshot can
    /// be executed while other tasks register or remove handlers.
    pub async fn chain(&self, name: &str) -> Option<Vec<HandlerRef<A, T, E>>> {
        let chains = self.chains.read().await;
        chains.get(name).cloned()
    }

    /// Returns whether a chain (possibly empty) exists for `name`.
    pub async fn has_hooks(&self, name: &str) -> bool {
        let chains = self.chains.read().await;
        chains.contains_key(name)
    }

    /// Returns the number of handlers registered for `name`.
    pub async fn handler_count(&self, name: &str) -> usize {
        let chains = self.chains.read().await;
        chains.get(name).map(Vec::len).unwrap_or(0)
    }

    /// Returns all registered hook names, sorted.
    pub async fn hook_names(&self) -> Vec<HookName> {
        let chains = self.chains.read().await;
        let mut names: Vec<HookName> = chains.keys().cloned().collect();
        names.sort();
        names
    }
}

impl<A, T, E> Default for HookRegistry<A, T, E>
where
    A: Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, E> fmt::Debug for HookRegistry<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("HookRegistry");
        match self.chains.try_read() {
            Ok(chains) => {
                let sizes: HashMap<&str, usize> = chains
                    .iter()
                    .map(|(name, chain)| (name.as_str(), chain.len()))
                    .collect();
                debug.field("chains", &sizes);
            }
            Err(_) => {
                debug.field("chains", &"<locked>");
            }
        }
        debug.field("config", &self.config).finish()
    }
}
