//! Filter operations
//!
//! This module provides the gaussian blur pipeline for pictures.

/// Filter kernels
pub mod kernels;
pub use kernels::Kernel;

/// Dense 2D convolution
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
