use picblur_image::{Picture, PictureError};

use super::{convolve_with_options, kernels, BorderMode, ConvolveOptions};
use crate::{normalize::normalize, parallel::ExecutionStrategy};

/// Options for [`blur_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlurOptions {
    /// Boundary handling of the convolution.
    pub border: BorderMode,
    /// How the convolution rows are scheduled.
    pub strategy: ExecutionStrategy,
}

impl From<BlurOptions> for ConvolveOptions {
    fn from(options: BlurOptions) -> Self {
        ConvolveOptions {
            border: options.border,
            strategy: options.strategy,
        }
    }
}

/// Blur a picture using a gaussian blur filter
///
/// The kernel is generated from `radius`, convolved with the picture pixels and the
/// result normalized to the picture colour mode. The source picture is left untouched.
///
/// # Arguments
///
/// * `src` - The source picture.
/// * `radius` - The blur radius in pixels. Even radii are bumped to the next odd value.
///
/// # Returns
///
/// A new picture with the same mode, format and size, and a derived file name.
///
/// # Errors
///
/// Returns [`PictureError::InvalidRadius`] when `radius` is zero. Nothing is returned
/// on failure.
///
/// # Example
///
/// ```
/// use picblur_image::{ColorMode, Picture, PictureSize, PixelGrid};
/// use picblur_imgproc::filter::blur;
///
/// let pixels = PixelGrid::from_size_val(PictureSize { width: 5, height: 5 }, 3, 255.0).unwrap();
/// let picture = Picture::new(pixels, ColorMode::Rgb).unwrap().with_filename("white.png");
///
/// let blurred = blur(&picture, 3).unwrap();
///
/// assert_eq!(blurred.filename(), Some("white_blur.png"));
/// assert_eq!(blurred.pixels().pixel(2, 2), Some(&[255.0, 255.0, 255.0][..]));
/// assert!(blurred.pixels().get(0, 0, 0).unwrap() < 255.0);
/// ```
pub fn blur(src: &Picture, radius: usize) -> Result<Picture, PictureError> {
    blur_with_options(src, radius, &BlurOptions::default())
}

/// Blur a picture with explicit border and execution options.
///
/// See [`blur`] for the arguments and errors.
pub fn blur_with_options(
    src: &Picture,
    radius: usize,
    options: &BlurOptions,
) -> Result<Picture, PictureError> {
    let kernel = kernels::gaussian_kernel_2d(radius)?;

    log::debug!(
        "blurring {} {} picture with a {}x{} kernel ({:?})",
        src.size(),
        src.mode(),
        kernel.size(),
        kernel.size(),
        options.border
    );

    let pixels = convolve_with_options(src.pixels(), &kernel, src.mode(), &(*options).into())?;

    let mut dst = src.derive(pixels)?;
    normalize(&mut dst)?;

    Ok(dst)
}

/// Extension trait to blur a picture with method syntax.
pub trait BlurExt {
    /// Blur with the default options. See [`blur`].
    fn blur(&self, radius: usize) -> Result<Picture, PictureError>;

    /// Blur with explicit options. See [`blur_with_options`].
    fn blur_with_options(
        &self,
        radius: usize,
        options: &BlurOptions,
    ) -> Result<Picture, PictureError>;
}

impl BlurExt for Picture {
    fn blur(&self, radius: usize) -> Result<Picture, PictureError> {
        blur(self, radius)
    }

    fn blur_with_options(
        &self,
        radius: usize,
        options: &BlurOptions,
    ) -> Result<Picture, PictureError> {
        blur_with_options(self, radius, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picblur_image::{ColorMode, PictureSize, PixelGrid};

    fn white_rgb() -> Result<Picture, PictureError> {
        let pixels = PixelGrid::from_size_val(
            PictureSize {
                width: 5,
                height: 5,
            },
            3,
            255.0,
        )?;
        Ok(Picture::new(pixels, ColorMode::Rgb)?
            .with_filename("white.png")
            .with_format("PNG"))
    }

    #[test]
    fn test_blur_white_square() -> Result<(), PictureError> {
        let src = white_rgb()?;
        let dst = blur(&src, 3)?;

        assert_eq!(dst.pixels().pixel(2, 2), Some(&[255.0, 255.0, 255.0][..]));
        for (r, c) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            let corner = dst.pixels().pixel(r, c).unwrap_or_default();
            assert!(corner.iter().all(|&v| v < 255.0), "corner ({r}, {c})");
            // 255 * 1.02234 / 1.04493 = 249.49
            assert_eq!(corner, &[249.0, 249.0, 249.0]);
        }
        Ok(())
    }

    #[test]
    fn test_blur_keeps_source_and_metadata() -> Result<(), PictureError> {
        let src = white_rgb()?;
        let snapshot = src.clone();
        let dst = src.blur(4)?;

        assert_eq!(src, snapshot);
        assert_eq!(dst.filename(), Some("white_blur.png"));
        assert_eq!(dst.format(), Some("PNG"));
        assert_eq!(dst.mode(), ColorMode::Rgb);
        assert_eq!(dst.size(), src.size());
        assert_eq!(dst.components(), 3);
        Ok(())
    }

    #[test]
    fn test_blur_invalid_radius() -> Result<(), PictureError> {
        let src = white_rgb()?;
        assert_eq!(blur(&src, 0), Err(PictureError::InvalidRadius(0)));
        Ok(())
    }

    #[test]
    fn test_blur_radius_one_is_identity() -> Result<(), PictureError> {
        let src = Picture::from_rows(
            vec![vec![vec![1.0, 2.0, 3.0], vec![250.0, 100.0, 0.0]]],
            ColorMode::Rgb,
        )?;
        let dst = blur(&src, 1)?;
        assert_eq!(dst.pixels(), src.pixels());
        Ok(())
    }

    #[test]
    fn test_blur_replicate_has_no_vignette() -> Result<(), PictureError> {
        let src = white_rgb()?;
        let options = BlurOptions {
            border: BorderMode::Replicate,
            strategy: ExecutionStrategy::Serial,
        };
        let dst = src.blur_with_options(5, &options)?;
        assert!(dst.pixels().as_slice().iter().all(|&v| v == 255.0));
        Ok(())
    }
}
