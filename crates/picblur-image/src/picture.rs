use crate::{
    color_mode::ColorMode,
    error::PictureError,
    grid::{PictureSize, PixelGrid},
};

/// Marker inserted in the file name of derived pictures.
const DERIVED_MARKER: &str = "_blur";

/// A picture: a pixel grid tagged with its colour mode and descriptive metadata.
///
/// The number of components of the grid always matches [`ColorMode::channels`].
/// Component values may be fractional or out of range until the picture is normalized.
///
/// # Examples
///
/// ```
/// use picblur_image::{ColorMode, Picture, PictureSize, PixelGrid};
///
/// let pixels = PixelGrid::from_size_val(PictureSize { width: 4, height: 3 }, 3, 255.0).unwrap();
/// let picture = Picture::new(pixels, ColorMode::Rgb)
///     .unwrap()
///     .with_filename("white.png")
///     .with_format("PNG");
///
/// assert_eq!(picture.width(), 4);
/// assert_eq!(picture.height(), 3);
/// assert_eq!(picture.components(), 3);
/// assert_eq!(picture.filename(), Some("white.png"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Picture {
    pixels: PixelGrid,
    mode: ColorMode,
    filename: Option<String>,
    format: Option<String>,
}

impl Picture {
    /// Create a new picture from a pixel grid and its colour mode.
    ///
    /// # Errors
    ///
    /// If the grid component count differs from the mode channel count, an error is returned.
    pub fn new(pixels: PixelGrid, mode: ColorMode) -> Result<Self, PictureError> {
        if pixels.components() != mode.channels() {
            return Err(PictureError::InvalidComponentCount {
                mode: mode.to_string(),
                expected: mode.channels(),
                actual: pixels.components(),
            });
        }

        Ok(Self {
            pixels,
            mode,
            filename: None,
            format: None,
        })
    }

    /// Create a picture from nested rows of pixels.
    pub fn from_rows(rows: Vec<Vec<Vec<f64>>>, mode: ColorMode) -> Result<Self, PictureError> {
        Self::new(PixelGrid::from_rows(rows)?, mode)
    }

    /// Attach a file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Attach a format name.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Build a picture from another one's metadata and a new pixel grid.
    ///
    /// The file name gains a marker so that the derived picture never shadows its source,
    /// e.g. `cat.png` becomes `cat_blur.png`.
    pub fn derive(&self, pixels: PixelGrid) -> Result<Self, PictureError> {
        let mut picture = Self::new(pixels, self.mode)?;
        if picture.size() != self.size() {
            return Err(PictureError::InvalidDataLength(
                picture.pixels.as_slice().len(),
                self.pixels.as_slice().len(),
            ));
        }
        picture.filename = self.filename.as_deref().map(derived_filename);
        picture.format = self.format.clone();
        Ok(picture)
    }

    /// Get the pixel grid.
    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Get the mutable pixel grid.
    ///
    /// The grid shape cannot change through this reference, so the picture invariants hold.
    pub fn pixels_mut(&mut self) -> &mut PixelGrid {
        &mut self.pixels
    }

    /// Consume the picture and return the pixel grid.
    pub fn into_pixels(self) -> PixelGrid {
        self.pixels
    }

    /// Get the colour mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Get the file name, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Get the format name, if any.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Get the size of the picture in pixels.
    pub fn size(&self) -> PictureSize {
        self.pixels.size()
    }

    /// Get the width of the picture in pixels.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Get the height of the picture in pixels.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Get the number of components of every pixel.
    pub fn components(&self) -> usize {
        self.pixels.components()
    }
}

/// Insert the derivation marker before the extension of a file name.
fn derived_filename(filename: &str) -> String {
    let stem_start = filename.rfind(&['/', '\\'][..]).map_or(0, |sep| sep + 1);
    match filename.rfind('.') {
        Some(dot) if dot > stem_start => format!(
            "{}{}{}",
            &filename[..dot],
            DERIVED_MARKER,
            &filename[dot..]
        ),
        _ => format!("{filename}{DERIVED_MARKER}"),
    }
}
