#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image filtering module.
pub mod filter;

/// operations to normalize pictures to their colour mode range.
pub mod normalize;

/// module containing parallization utilities.
pub mod parallel;
