//! Prelude for convenient imports.

pub use async_trait::async_trait;
pub use tokio_util::sync::CancellationToken;

pub use hookline_core::error::{AbortError, AppError};

pub use crate::hooks::definitions::{HookName, HookResult};
pub use crate::hooks::handler::{AsyncFnHook, FnHook, HandlerRef, HookHandler};
pub use crate::hooks::registry::HookRegistry;
