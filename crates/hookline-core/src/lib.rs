//! # hookline-core
//!
//! Core crate for hookline. Contains the configuration schemas and the
//! unified error system used by the hook dispatcher, the utility crate and
//! the command-line binary.
//!
//! This crate has **no** internal dependencies on other hookline crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AbortError, AppError, ErrorKind};
pub use result::AppResult;
