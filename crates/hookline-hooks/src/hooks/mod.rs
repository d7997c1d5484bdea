//! Hook system: named handler chains and their dispatcher.

pub mod definitions;
pub mod dispatcher;
pub mod handler;
pub mod registry;

pub use definitions::{HookName, HookResult};
pub use handler::{AsyncFnHook, FnHook, HandlerRef, HookHandler};
pub use registry::HookRegistry;
