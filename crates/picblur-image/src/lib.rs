#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// colour models and their channel layouts.
pub mod color_mode;

/// Error types for the picture module.
pub mod error;

/// pixel grid storage.
pub mod grid;

/// picture representation for the blur pipeline.
pub mod picture;

pub use crate::color_mode::ColorMode;
pub use crate::error::PictureError;
pub use crate::grid::{PictureSize, PixelGrid};
pub use crate::picture::Picture;
