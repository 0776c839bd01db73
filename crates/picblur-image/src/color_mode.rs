use std::{fmt, str::FromStr};

use crate::error::PictureError;

/// Colour model of a picture.
///
/// The mode fixes how many components each pixel carries and, once the
/// picture is normalized, which numeric range every component lives in.
///
/// # Examples
///
/// ```
/// use picblur_image::ColorMode;
///
/// let mode: ColorMode = "rgba".parse().unwrap();
///
/// assert_eq!(mode, ColorMode::Rgba);
/// assert_eq!(mode.channels(), 4);
/// assert_eq!(mode.alpha_index(), Some(3));
/// assert_eq!(mode.to_string(), "RGBA");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue and a trailing alpha channel.
    Rgba,
    /// Single luminance channel.
    Grey,
    /// Cyan, magenta, yellow, key in percent.
    Cmyk,
    /// Hue, saturation, lightness in the unit range.
    Hsl,
    /// Hue, saturation, value in the unit range.
    Hsv,
    /// CIE L*a*b*.
    Lab,
}

impl ColorMode {
    /// Every supported colour mode.
    pub const ALL: [ColorMode; 7] = [
        ColorMode::Rgb,
        ColorMode::Rgba,
        ColorMode::Grey,
        ColorMode::Cmyk,
        ColorMode::Hsl,
        ColorMode::Hsv,
        ColorMode::Lab,
    ];

    /// Canonical number of components per pixel.
    pub fn channels(&self) -> usize {
        match self {
            ColorMode::Grey => 1,
            ColorMode::Rgb | ColorMode::Hsl | ColorMode::Hsv | ColorMode::Lab => 3,
            ColorMode::Rgba | ColorMode::Cmyk => 4,
        }
    }

    /// Index of the alpha component, if the mode has one.
    pub fn alpha_index(&self) -> Option<usize> {
        match self {
            ColorMode::Rgba => Some(3),
            _ => None,
        }
    }

    /// Canonical upper-case name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Grey => "GREY",
            ColorMode::Cmyk => "CMYK",
            ColorMode::Hsl => "HSL",
            ColorMode::Hsv => "HSV",
            ColorMode::Lab => "LAB",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RGB" => Ok(ColorMode::Rgb),
            "RGBA" => Ok(ColorMode::Rgba),
            "GREY" | "GRAY" | "L" => Ok(ColorMode::Grey),
            "CMYK" => Ok(ColorMode::Cmyk),
            "HSL" => Ok(ColorMode::Hsl),
            "HSV" => Ok(ColorMode::Hsv),
            "LAB" => Ok(ColorMode::Lab),
            _ => Err(PictureError::UnsupportedMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts() {
        let counts: Vec<usize> = ColorMode::ALL.iter().map(|m| m.channels()).collect();
        assert_eq!(counts, vec![3, 4, 1, 4, 3, 3, 3]);
    }

    #[test]
    fn parse_round_trip() -> Result<(), PictureError> {
        for mode in ColorMode::ALL {
            assert_eq!(mode.to_string().parse::<ColorMode>()?, mode);
        }
        assert_eq!("gray".parse::<ColorMode>()?, ColorMode::Grey);
        assert_eq!(" L ".parse::<ColorMode>()?, ColorMode::Grey);
        Ok(())
    }

    #[test]
    fn parse_unknown_mode() {
        assert_eq!(
            "YCbCr".parse::<ColorMode>(),
            Err(PictureError::UnsupportedMode("YCbCr".to_string()))
        );
        assert!("P".parse::<ColorMode>().is_err());
    }

    #[test]
    fn alpha_only_for_rgba() {
        for mode in ColorMode::ALL {
            let expected = if mode == ColorMode::Rgba { Some(3) } else { None };
            assert_eq!(mode.alpha_index(), expected);
        }
    }
}
