use picblur_image::PictureError;

/// A 2D grid of filter weights stored in row-major order.
///
/// Kernels produced by [`gaussian_kernel_2d`] are square, odd sized and sum to one.
/// Arbitrary shapes can be built with [`Kernel::new`]; the convolution rejects the
/// ones that are not square and odd sized.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    rows: usize,
    cols: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from its shape and row-major weights.
    ///
    /// # Errors
    ///
    /// If the number of weights does not match `rows * cols`, an error is returned.
    pub fn new(rows: usize, cols: usize, weights: Vec<f64>) -> Result<Self, PictureError> {
        if weights.len() != rows * cols {
            return Err(PictureError::InvalidKernelLength(
                rows,
                cols,
                rows * cols,
                weights.len(),
            ));
        }
        Ok(Self {
            rows,
            cols,
            weights,
        })
    }

    /// Number of rows of the kernel.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the kernel.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Side length of a square kernel.
    pub fn size(&self) -> usize {
        self.rows
    }

    /// Index of the center cell along each axis.
    pub fn center(&self) -> usize {
        self.rows / 2
    }

    /// Weight at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.weights[i * self.cols + j])
    }

    /// The weights as a flat row-major slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all the weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Whether the kernel is square with an odd side, i.e. has a well defined center.
    pub fn is_centered(&self) -> bool {
        self.rows == self.cols && self.rows % 2 == 1
    }
}

/// Standard deviation used for a blur radius.
///
/// Even radii are bumped to the next odd value first, so that `sigma = (radius - 1) / 6`
/// places three standard deviations on each side of the center.
pub fn gaussian_sigma(radius: usize) -> f64 {
    (odd_radius(radius) - 1) as f64 / 6.0
}

fn odd_radius(radius: usize) -> usize {
    if radius % 2 == 0 {
        radius + 1
    } else {
        radius
    }
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f64> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size as f64 - 1.0) / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f64 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f64>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Create a normalized 2D gaussian kernel from a blur radius.
///
/// The side of the kernel is the radius, bumped to the next odd value when even.
/// A radius of one yields the identity kernel. The kernel is the outer product of
/// [`gaussian_kernel_1d`] with itself.
///
/// # Arguments
///
/// * `radius` - The blur radius in pixels.
///
/// # Errors
///
/// Returns [`PictureError::InvalidRadius`] when `radius` is zero and
/// [`PictureError::KernelTooLarge`] when the weights cannot be allocated.
///
/// # Example
///
/// ```
/// use picblur_imgproc::filter::kernels::gaussian_kernel_2d;
///
/// let kernel = gaussian_kernel_2d(4).unwrap();
///
/// assert_eq!(kernel.size(), 5);
/// assert!((kernel.sum() - 1.0).abs() < 1e-9);
/// ```
pub fn gaussian_kernel_2d(radius: usize) -> Result<Kernel, PictureError> {
    if radius == 0 {
        return Err(PictureError::InvalidRadius(radius));
    }

    let size = odd_radius(radius);
    if size == 1 {
        return Kernel::new(1, 1, vec![1.0]);
    }

    let len = size
        .checked_mul(size)
        .ok_or(PictureError::KernelTooLarge(radius))?;
    let mut weights: Vec<f64> = Vec::new();
    weights
        .try_reserve_exact(len)
        .map_err(|_| PictureError::KernelTooLarge(radius))?;

    let sigma = gaussian_sigma(size);
    let kernel_1d = gaussian_kernel_1d(size, sigma);
    for wy in &kernel_1d {
        weights.extend(kernel_1d.iter().map(|wx| wy * wx));
    }

    log::debug!("gaussian kernel: radius {radius}, size {size}, sigma {sigma:.4}");

    Kernel::new(size, size, weights)
}
