use picblur_image::{ColorMode, PictureError, PixelGrid};

use super::kernels::Kernel;
use crate::parallel::{self, ExecutionStrategy};

/// Largest channel count of any colour mode.
const MAX_CHANNELS: usize = 4;

/// How neighbors falling outside the grid contribute to a convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Skip out-of-grid neighbors without redistributing their weight.
    ///
    /// Pixels near the border receive less than unit gain, which darkens
    /// (or lightens) the edges of the picture.
    #[default]
    Exclude,

    /// Read the nearest edge pixel for out-of-grid neighbors.
    Replicate,

    /// Skip out-of-grid neighbors and divide by the weight actually used.
    Renormalize,
}

/// Options for [`convolve_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvolveOptions {
    /// Boundary handling.
    pub border: BorderMode,
    /// How the rows are scheduled.
    pub strategy: ExecutionStrategy,
}

/// Convolve a pixel grid with a square, odd sized kernel.
///
/// Uses [`BorderMode::Exclude`] and [`ExecutionStrategy::Auto`].
/// For explicit control, use [`convolve_with_options`].
///
/// # Arguments
///
/// * `src` - The source grid with shape (H, W, C).
/// * `kernel` - The kernel, centered on every output pixel.
/// * `mode` - The colour mode of the grid. The alpha channel of [`ColorMode::Rgba`]
///   is copied through unchanged.
///
/// # Returns
///
/// A new grid with the same shape holding the unrounded, unclipped result.
///
/// # Errors
///
/// * [`PictureError::DimensionMismatch`] if the kernel is not square or not odd sized.
/// * [`PictureError::InvalidComponentCount`] if the grid does not match `mode`.
///
/// # Example
///
/// ```
/// use picblur_image::{ColorMode, PictureSize, PixelGrid};
/// use picblur_imgproc::filter::{convolve, kernels::gaussian_kernel_2d};
///
/// let src = PixelGrid::from_size_val(PictureSize { width: 5, height: 5 }, 1, 10.0).unwrap();
/// let kernel = gaussian_kernel_2d(3).unwrap();
///
/// let dst = convolve(&src, &kernel, ColorMode::Grey).unwrap();
///
/// assert!((dst.get(2, 2, 0).unwrap() - 10.0).abs() < 1e-9);
/// assert!(dst.get(0, 0, 0).unwrap() < 10.0);
/// ```
pub fn convolve(
    src: &PixelGrid,
    kernel: &Kernel,
    mode: ColorMode,
) -> Result<PixelGrid, PictureError> {
    convolve_with_options(src, kernel, mode, &ConvolveOptions::default())
}

/// Convolve a pixel grid with explicit border and execution options.
///
/// See [`convolve`] for the arguments and errors.
pub fn convolve_with_options(
    src: &PixelGrid,
    kernel: &Kernel,
    mode: ColorMode,
    options: &ConvolveOptions,
) -> Result<PixelGrid, PictureError> {
    if !kernel.is_centered() {
        return Err(PictureError::DimensionMismatch(kernel.rows(), kernel.cols()));
    }

    let channels = src.components();
    if channels != mode.channels() {
        return Err(PictureError::InvalidComponentCount {
            mode: mode.to_string(),
            expected: mode.channels(),
            actual: channels,
        });
    }

    let rows = src.height();
    let cols = src.width();
    let alpha = mode.alpha_index();
    let half = kernel.center() as isize;
    let offsets = (0..kernel.size())
        .map(|i| i as isize - half)
        .collect::<Vec<_>>();

    let src_data = src.as_slice();
    let weights = kernel.as_slice();
    let ksize = kernel.size();

    let mut dst_data = vec![0.0f64; src_data.len()];

    parallel::for_each_row(
        options.strategy,
        &mut dst_data,
        cols * channels,
        rows * cols,
        |r, row_dst| {
            for c in 0..cols {
                let mut acc = [0.0f64; MAX_CHANNELS];
                let mut used = 0.0f64;

                for (ki, &dy) in offsets.iter().enumerate() {
                    let Some(y) = resolve(r as isize + dy, rows, options.border) else {
                        continue;
                    };
                    for (kj, &dx) in offsets.iter().enumerate() {
                        let Some(x) = resolve(c as isize + dx, cols, options.border) else {
                            continue;
                        };
                        let w = weights[ki * ksize + kj];
                        let idx = (y * cols + x) * channels;
                        acc[..channels]
                            .iter_mut()
                            .zip(&src_data[idx..idx + channels])
                            .for_each(|(a, &v)| *a += w * v);
                        used += w;
                    }
                }

                if options.border == BorderMode::Renormalize && used > 0.0 {
                    acc[..channels].iter_mut().for_each(|a| *a /= used);
                }

                let out_idx = c * channels;
                row_dst[out_idx..out_idx + channels].copy_from_slice(&acc[..channels]);

                if let Some(k) = alpha {
                    let src_idx = (r * cols + c) * channels + k;
                    row_dst[out_idx + k] = src_data[src_idx];
                }
            }
        },
    )?;

    PixelGrid::new(src.size(), channels, dst_data)
}

/// Map a possibly out-of-grid coordinate to a grid coordinate according to the border mode.
#[inline]
fn resolve(pos: isize, len: usize, border: BorderMode) -> Option<usize> {
    if pos >= 0 && pos < len as isize {
        return Some(pos as usize);
    }
    match border {
        BorderMode::Replicate => Some(pos.clamp(0, len as isize - 1) as usize),
        BorderMode::Exclude | BorderMode::Renormalize => None,
    }
}
