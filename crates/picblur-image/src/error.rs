/// An error type for the picture and filtering modules.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PictureError {
    /// Error when the picture has a zero dimension.
    #[error("Invalid picture size: width {0}, height {1}, components {2}")]
    InvalidPictureSize(usize, usize, usize),

    /// Error when the pixel data length does not match the picture size.
    #[error("Data length ({0}) does not match the picture size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a row or a cell of a nested grid has an unexpected length.
    #[error("Row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Length found.
        actual: usize,
    },

    /// Error when the component count does not match the colour mode.
    #[error("Colour mode {mode} expects {expected} components per pixel, got {actual}")]
    InvalidComponentCount {
        /// Name of the colour mode.
        mode: String,
        /// Canonical channel count of the mode.
        expected: usize,
        /// Component count of the grid.
        actual: usize,
    },

    /// Error when the blur radius is not positive.
    #[error("Invalid blur radius {0}, the radius must be positive")]
    InvalidRadius(usize),

    /// Error when the kernel is not square or not odd sized.
    #[error("Kernel must be square and odd sized, got {0}x{1}")]
    DimensionMismatch(usize, usize),

    /// Error when the kernel weights do not fill the kernel shape.
    #[error("Kernel of shape {0}x{1} needs {2} weights, got {3}")]
    InvalidKernelLength(usize, usize, usize, usize),

    /// Error when the kernel of a blur radius has more weights than can be allocated.
    #[error("Blur radius {0} is too large for a kernel")]
    KernelTooLarge(usize),

    /// Error when a colour mode is not recognised.
    #[error("Unsupported colour mode: {0}")]
    UnsupportedMode(String),

    /// Error when a thread pool is requested with zero threads.
    #[error("Thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// Error when the local thread pool cannot be built.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    /// Error when a sample cannot be represented in the target type.
    #[error("Failed to cast sample to {0}")]
    CastError(String),
}
