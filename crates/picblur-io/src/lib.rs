#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level picture reading and writing functions.
///
/// See [`functional::load`] for automatic format detection.
pub mod functional;

pub use crate::error::IoError;
pub use crate::functional::{load, read_picture, save, write_picture};
