use rayon::prelude::*;

use picblur_image::PictureError;

/// Number of pixels from which [`ExecutionStrategy::Auto`] switches to parallel execution.
pub const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

/// Controls how per-row operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small pictures, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    Parallel,

    /// Parallel for pictures of at least [`AUTO_PARALLEL_THRESHOLD`] pixels, serial otherwise.
    #[default]
    Auto,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Whether the strategy runs on more than the calling thread for a picture of `num_pixels`.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel => true,
            ExecutionStrategy::Auto => num_pixels >= AUTO_PARALLEL_THRESHOLD,
            ExecutionStrategy::Fixed(n) => *n > 1,
        }
    }
}

/// Fill every row of `dst` with `f(row_index, row)`.
///
/// `dst` is split in chunks of `row_len` values; each chunk is written by exactly one call,
/// so `f` only needs shared access to whatever it reads. `num_pixels` drives the
/// [`ExecutionStrategy::Auto`] decision.
///
/// # Errors
///
/// Returns [`PictureError::InvalidThreadCount`] for `Fixed(0)` and
/// [`PictureError::ThreadPool`] when the local pool cannot be built.
pub fn for_each_row<F>(
    strategy: ExecutionStrategy,
    dst: &mut [f64],
    row_len: usize,
    num_pixels: usize,
    f: F,
) -> Result<(), PictureError>
where
    F: Fn(usize, &mut [f64]) + Send + Sync,
{
    if row_len == 0 {
        return Ok(());
    }

    log::trace!("running {strategy:?} over {} rows", dst.len() / row_len);

    match strategy {
        ExecutionStrategy::Fixed(0) => return Err(PictureError::InvalidThreadCount(0)),
        ExecutionStrategy::Fixed(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| PictureError::ThreadPool(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_mut(row_len)
                    .enumerate()
                    .for_each(|(r, row)| f(r, row));
            });
        }
        s if s.is_parallel(num_pixels) => {
            dst.par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(r, row)| f(r, row));
        }
        _ => {
            dst.chunks_mut(row_len)
                .enumerate()
                .for_each(|(r, row)| f(r, row));
        }
    }

    Ok(())
}
