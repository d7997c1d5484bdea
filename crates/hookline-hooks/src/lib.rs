//! # hookline-hooks
//!
//! Named, ordered, asynchronous hook chains. Provides:
//!
//! - A registry mapping hook names to handlers in registration order
//! - Sequential dispatch that stops at the first handler returning a value
//!   and propagates the first failure unchanged
//! - Closure adapters for synchronous and asynchronous handlers
//! - Cancellable dispatch driven by a `CancellationToken`

pub mod hooks;
pub mod prelude;

pub use hooks::definitions::{HookName, HookResult};
pub use hooks::handler::{AsyncFnHook, FnHook, HandlerRef, HookHandler};
pub use hooks::registry::HookRegistry;
