//! Hook handler trait and closure adapters.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use hookline_core::error::AppError;

use super::definitions::HookResult;

/// A unit of behaviour registered under a hook name.
///
/// Every handler of a chain receives the same argument value for a given
/// invocation. The registry never inspects a handler beyond the outcome it
/// returns.
#[async_trait]
pub trait HookHandler<A, T, E = AppError>: Send + Sync
where
    A: Send + Sync,
{
    /// Handles one hook invocation.
    async fn handle(&self, args: &A) -> HookResult<T, E>;

    /// Label used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a registered handler.
///
/// The `Arc` allocation is the handler's identity: two handles are the same
/// handler only if [`Arc::ptr_eq`] says so.
pub type HandlerRef<A, T, E = AppError> = Arc<dyn HookHandler<A, T, E>>;

/// Adapts a synchronous closure to [`HookHandler`].
pub struct FnHook<F> {
    /// Label used in logs.
    name: String,
    /// Handler function.
    handler: F,
}

impl<F> FnHook<F> {
    /// Creates a new synchronous handler.
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> fmt::Debug for FnHook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHook")
            .field("name", &self.name)
            .field("handler", &"<closure>")
            .finish()
    }
}

#[async_trait]
impl<A, T, E, F> HookHandler<A, T, E> for FnHook<F>
where
    A: Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
    F: Fn(&A) -> HookResult<T, E> + Send + Sync,
{
    async fn handle(&self, args: &A) -> HookResult<T, E> {
        (self.handler)(args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Boxed future returned by [`AsyncFnHook`] closures.
type HandlerFuture<T, E> = Pin<Box<dyn Future<Output = HookResult<T, E>> + Send>>;

/// Adapts an asynchronous closure to [`HookHandler`].
///
/// The closure borrows the arguments only while building its future; the
/// future itself must own whatever it needs.
pub struct AsyncFnHook<A, T, E = AppError> {
    /// Label used in logs.
    name: String,
    /// Handler function.
    handler: Box<dyn Fn(&A) -> HandlerFuture<T, E> + Send + Sync>,
}

impl<A, T, E> AsyncFnHook<A, T, E> {
    /// Creates a new asynchronous handler.
    pub fn new<F, Fut>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<T, E>> + Send + 'static,
    {
        Self {
            name: name.into(),
            handler: Box::new(move |args: &A| -> HandlerFuture<T, E> { Box::pin(handler(args)) }),
        }
    }
}

impl<A, T, E> fmt::Debug for AsyncFnHook<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFnHook")
            .field("name", &self.name)
            .field("handler", &"<closure>")
            .finish()
    }
}

#[async_trait]
impl<A, T, E> HookHandler<A, T, E> for AsyncFnHook<A, T, E>
where
    A: Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    async fn handle(&self, args: &A) -> HookResult<T, E> {
        (self.handler)(args).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
