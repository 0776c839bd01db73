use crate::error::PictureError;

/// Picture size in pixels
///
/// # Examples
///
/// ```
/// use picblur_image::PictureSize;
///
/// let size = PictureSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PictureSize {
    /// Width of the picture in pixels
    pub width: usize,
    /// Height of the picture in pixels
    pub height: usize,
}

impl std::fmt::Display for PictureSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "PictureSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for PictureSize {
    fn from(size: [usize; 2]) -> Self {
        PictureSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A grid of pixels, each holding the same number of floating point components.
///
/// The data is stored contiguously in row-major order with shape (H, W, C).
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    size: PictureSize,
    components: usize,
    data: Vec<f64>,
}

impl PixelGrid {
    /// Create a new grid from contiguous pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in pixels.
    /// * `components` - The number of components of every pixel.
    /// * `data` - The pixel data with shape (H, W, C).
    ///
    /// # Errors
    ///
    /// If a dimension is zero or the data length does not match the size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use picblur_image::{PictureSize, PixelGrid};
    ///
    /// let grid = PixelGrid::new(
    ///     PictureSize { width: 2, height: 1 },
    ///     3,
    ///     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    /// ).unwrap();
    ///
    /// assert_eq!(grid.pixel(0, 1), Some(&[3.0, 4.0, 5.0][..]));
    /// ```
    pub fn new(size: PictureSize, components: usize, data: Vec<f64>) -> Result<Self, PictureError> {
        if size.width == 0 || size.height == 0 || components == 0 {
            return Err(PictureError::InvalidPictureSize(
                size.width,
                size.height,
                components,
            ));
        }

        let expected = size.width * size.height * components;
        if data.len() != expected {
            return Err(PictureError::InvalidDataLength(data.len(), expected));
        }

        Ok(Self {
            size,
            components,
            data,
        })
    }

    /// Create a new grid with every component set to `val`.
    pub fn from_size_val(
        size: PictureSize,
        components: usize,
        val: f64,
    ) -> Result<Self, PictureError> {
        Self::new(size, components, vec![val; size.width * size.height * components])
    }

    /// Create a grid from nested rows of pixels.
    ///
    /// Every row must have the same number of cells and every cell the same
    /// number of components.
    ///
    /// # Examples
    ///
    /// ```
    /// use picblur_image::PixelGrid;
    ///
    /// let grid = PixelGrid::from_rows(vec![
    ///     vec![vec![0.0], vec![1.0]],
    ///     vec![vec![2.0], vec![3.0]],
    /// ]).unwrap();
    ///
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.get(1, 0, 0), Some(2.0));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Vec<f64>>>) -> Result<Self, PictureError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let components = rows
            .first()
            .and_then(|r| r.first())
            .map_or(0, |p| p.len());

        let mut data = Vec::with_capacity(width * height * components);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PictureError::RaggedRow {
                    row: r,
                    expected: width,
                    actual: row.len(),
                });
            }
            for cell in row {
                if cell.len() != components {
                    return Err(PictureError::RaggedRow {
                        row: r,
                        expected: components,
                        actual: cell.len(),
                    });
                }
                data.extend(cell);
            }
        }

        Self::new(PictureSize { width, height }, components, data)
    }

    /// Create a grid by casting samples of any numeric type to `f64`.
    ///
    /// This is the entry point for buffers handed over by an image codec.
    pub fn from_samples<T>(
        size: PictureSize,
        components: usize,
        samples: &[T],
    ) -> Result<Self, PictureError>
    where
        T: Copy + num_traits::NumCast,
    {
        let data = samples
            .iter()
            .map(|&x| {
                <f64 as num_traits::NumCast>::from(x)
                    .ok_or_else(|| PictureError::CastError("f64".to_string()))
            })
            .collect::<Result<Vec<f64>, PictureError>>()?;

        Self::new(size, components, data)
    }

    /// Cast the components to another numeric type.
    ///
    /// # Errors
    ///
    /// If a component does not fit in the target type, an error is returned.
    pub fn to_samples<U>(&self) -> Result<Vec<U>, PictureError>
    where
        U: num_traits::NumCast,
    {
        self.data
            .iter()
            .map(|&x| {
                U::from(x)
                    .ok_or_else(|| PictureError::CastError(std::any::type_name::<U>().to_string()))
            })
            .collect()
    }

    /// Get the size of the grid in pixels.
    pub fn size(&self) -> PictureSize {
        self.size
    }

    /// Get the width of the grid in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the grid in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of components of every pixel.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Get the components of the pixel at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> Option<&[f64]> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        let offset = self.offset(row, col);
        Some(&self.data[offset..offset + self.components])
    }

    /// Get the mutable components of the pixel at `(row, col)`.
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> Option<&mut [f64]> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        let offset = self.offset(row, col);
        Some(&mut self.data[offset..offset + self.components])
    }

    /// Get a single component value.
    pub fn get(&self, row: usize, col: usize, k: usize) -> Option<f64> {
        if k >= self.components {
            return None;
        }
        self.pixel(row, col).map(|p| p[k])
    }

    /// Iterate over the rows of the grid, each row as a flat slice of W * C values.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.size.width * self.components)
    }

    /// Copy the grid into nested rows of pixels.
    pub fn to_rows(&self) -> Vec<Vec<Vec<f64>>> {
        self.rows()
            .map(|row| row.chunks_exact(self.components).map(|p| p.to_vec()).collect())
            .collect()
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the grid and return the pixel data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.size.width + col) * self.components
    }
}
