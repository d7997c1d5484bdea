//! Convenience result type alias for hookline.

use crate::error::AppError;

/// A specialized `Result` type for hookline operations.
///
/// Hook chains default to [`AppError`] as their failure type, so handlers and
/// callers can write `AppResult<Option<T>>` instead of spelling it out.
pub type AppResult<T> = Result<T, AppError>;
