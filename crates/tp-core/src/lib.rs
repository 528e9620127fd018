//! # tp-core
//!
//! Shared error handling and configuration types for the tauprod workspace.
//!
//! Everything here is resolved once at startup and read-only afterwards;
//! year-dependent input field names come from a per-year record rather
//! than a mutable shared mapping.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Channel, FieldNames};

/// Workspace version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
