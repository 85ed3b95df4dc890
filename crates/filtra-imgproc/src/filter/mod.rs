//! Spatial filtering with small convolution kernels.
//!
//! The entry point is [`convolve`], which applies a [`kernels::Kernel`] to an
//! 8-bit image under an [`ExecutionStrategy`](crate::parallel::ExecutionStrategy).
//! Out-of-bounds taps clamp to the nearest edge pixel, so the output always
//! has the same shape as the input.

/// Named kernel catalog and the kernel container type.
pub mod kernels;

mod convolution;
pub use convolution::{convolve, filter_2d};

use thiserror::Error;

/// Errors that can occur during filtering.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The requested filter name is not in the catalog.
    #[error("unknown filter \"{0}\"")]
    UnknownFilter(String),

    /// Kernel sides must be odd so the kernel has a center tap.
    #[error("kernel side must be odd, got {0}")]
    KernelSideEven(usize),

    /// The kernel weight buffer does not match the declared side.
    #[error("kernel of side {0} cannot have {1} weights")]
    KernelLengthMismatch(usize, usize),

    /// Error coming from the image container.
    #[error(transparent)]
    Image(#[from] filtra_image::ImageError),

    /// Error coming from the parallel dispatch layer.
    #[error(transparent)]
    Parallel(#[from] crate::parallel::ParallelError),
}
