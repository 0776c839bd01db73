//! Colour-mode aware normalization of picture values.
//!
//! After filtering, a picture holds fractional and possibly out-of-range
//! components. Normalization brings every component back to the representation
//! of its colour mode:
//!
//! | mode             | rounding        | range                                  |
//! |------------------|-----------------|----------------------------------------|
//! | RGB, RGBA, GREY  | integer         | `[0, 255]`, alpha included             |
//! | CMYK             | integer         | `[0, 100]`                             |
//! | HSL, HSV         | two decimals    | `[0, 1]`                               |
//! | LAB              | integer         | L* in `[0, 100]`, a* b* in `[-128, 127]` |
//!
//! Values are rounded half up first and clipped afterwards, which makes the
//! operation idempotent.
//!
//! # Example
//!
//! ```
//! use picblur_image::{ColorMode, Picture};
//! use picblur_imgproc::normalize::normalize;
//!
//! let mut picture = Picture::from_rows(
//!     vec![vec![vec![-10.4, 257.6, 128.5]]],
//!     ColorMode::Rgb,
//! ).unwrap();
//!
//! normalize(&mut picture).unwrap();
//!
//! assert_eq!(picture.pixels().as_slice(), &[0.0, 255.0, 129.0]);
//! ```

use picblur_image::{ColorMode, Picture, PictureError};

/// Rounding rule of a colour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round half up to an integer.
    Integer,
    /// Round half up to two decimal places.
    Hundredths,
}

impl Rounding {
    /// Apply the rounding rule to a value.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::Integer => round_half_up(value),
            Rounding::Hundredths => round_half_up(value * 100.0) / 100.0,
        }
    }
}

// decided on the fractional part, `value + 0.5` can round up to the next integer
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounding rule used by a colour mode.
pub fn rounding(mode: ColorMode) -> Rounding {
    match mode {
        ColorMode::Hsl | ColorMode::Hsv => Rounding::Hundredths,
        _ => Rounding::Integer,
    }
}

/// Valid inclusive range of channel `channel` in `mode`.
///
/// # Example
///
/// ```
/// use picblur_image::ColorMode;
/// use picblur_imgproc::normalize::channel_range;
///
/// assert_eq!(channel_range(ColorMode::Lab, 0), (0.0, 100.0));
/// assert_eq!(channel_range(ColorMode::Lab, 2), (-128.0, 127.0));
/// ```
pub fn channel_range(mode: ColorMode, channel: usize) -> (f64, f64) {
    match mode {
        ColorMode::Rgb | ColorMode::Rgba | ColorMode::Grey => (0.0, 255.0),
        ColorMode::Cmyk => (0.0, 100.0),
        ColorMode::Hsl | ColorMode::Hsv => (0.0, 1.0),
        ColorMode::Lab if channel == 0 => (0.0, 100.0),
        ColorMode::Lab => (-128.0, 127.0),
    }
}

/// Round and clip a single component of channel `channel` in `mode`.
pub fn normalize_value(value: f64, mode: ColorMode, channel: usize) -> f64 {
    let (min, max) = channel_range(mode, channel);
    rounding(mode).apply(value).clamp(min, max)
}

/// Normalize every component of a picture in place.
///
/// # Arguments
///
/// * `picture` - The picture to normalize. Its pixel grid is overwritten.
///
/// # Errors
///
/// Returns [`PictureError::InvalidComponentCount`] if the grid does not carry the
/// canonical channel count of the picture mode.
pub fn normalize(picture: &mut Picture) -> Result<(), PictureError> {
    let mode = picture.mode();
    let channels = picture.components();
    if channels != mode.channels() {
        return Err(PictureError::InvalidComponentCount {
            mode: mode.to_string(),
            expected: mode.channels(),
            actual: channels,
        });
    }

    let ranges = (0..channels)
        .map(|k| channel_range(mode, k))
        .collect::<Vec<_>>();
    let rounding = rounding(mode);

    picture
        .pixels_mut()
        .as_slice_mut()
        .chunks_exact_mut(channels)
        .for_each(|pixel| {
            pixel
                .iter_mut()
                .zip(ranges.iter())
                .for_each(|(v, &(min, max))| *v = rounding.apply(*v).clamp(min, max));
        });

    Ok(())
}
