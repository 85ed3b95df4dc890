use filtra_image::{Image, ImageError, ImageSize};

use super::kernels::Kernel;
use super::FilterError;
use crate::parallel::{dispatch_rows, ExecutionStrategy};

/// Flat offset of the pixel at `(x, y)` in a row-major (H, W, C) buffer,
/// with out-of-range coordinates clamped to the nearest edge.
///
/// Every index computation into the source buffer goes through here; the
/// clamp is what keeps kernel taps near the border inside the image.
#[inline]
fn clamped_pixel_offset<const C: usize>(x: isize, y: isize, size: ImageSize) -> usize {
    let sx = x.clamp(0, size.width as isize - 1) as usize;
    let sy = y.clamp(0, size.height as isize - 1) as usize;
    (sy * size.width + sx) * C
}

/// Convolve one output row against the full source image.
///
/// Each channel accumulates in f32, scanning the kernel row-major, and the
/// result is clamped to `[0, 255]` before the cast so the write saturates
/// instead of wrapping.
fn convolve_row<const C: usize>(
    src: &[u8],
    dst_row: &mut [u8],
    row: usize,
    size: ImageSize,
    kernel: &Kernel,
) {
    let half = kernel.half() as isize;
    for x in 0..size.width {
        for c in 0..C {
            let mut sum = 0.0f32;
            for ky in -half..=half {
                for kx in -half..=half {
                    let offset =
                        clamped_pixel_offset::<C>(x as isize + kx, row as isize + ky, size);
                    let weight = kernel.weight((ky + half) as usize, (kx + half) as usize);
                    sum += weight * src[offset + c] as f32;
                }
            }
            // truncating cast, not a round
            dst_row[x * C + c] = sum.clamp(0.0, 255.0) as u8;
        }
    }
}

/// Apply a 2d convolution to an image, writing into a preallocated output.
///
/// The border is handled by clamping to the edge, so `dst` has the same
/// shape as `src`. The per-pixel arithmetic is independent of the strategy
/// and of the number of threads; every [`ExecutionStrategy`] produces
/// byte-identical output.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The square kernel to convolve with.
/// * `strategy` - How to schedule the output rows.
///
/// # Errors
///
/// Returns an error when `dst` does not match the shape of `src`, or when
/// the strategy is misconfigured.
pub fn filter_2d<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel,
    strategy: ExecutionStrategy,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::Image(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )));
    }

    let size = src.size();
    let row_stride = size.width * C;
    if row_stride == 0 || size.height == 0 {
        return Ok(());
    }

    let src_data = src.as_slice();
    dispatch_rows(strategy, dst.as_slice_mut(), row_stride, |row, dst_row| {
        convolve_row::<C>(src_data, dst_row, row, size, kernel);
    })?;

    Ok(())
}

/// Apply a 2d convolution to an image.
///
/// Allocates the output image and delegates to [`filter_2d`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `kernel` - The square kernel to convolve with.
/// * `strategy` - How to schedule the output rows.
///
/// # Returns
///
/// The filtered image with the same shape as `src`.
///
/// # Example
///
/// ```
/// use filtra_image::{Image, ImageSize};
/// use filtra_imgproc::filter::{convolve, kernels};
/// use filtra_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![10, 20, 30, 40],
/// )
/// .unwrap();
///
/// let kernel = kernels::lookup("identity").unwrap();
/// let filtered = convolve(&image, &kernel, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(filtered.as_slice(), image.as_slice());
/// ```
pub fn convolve<const C: usize>(
    src: &Image<u8, C>,
    kernel: &Kernel,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, C>, FilterError> {
    let mut dst = Image::from_size_val(src.size(), 0)?;
    filter_2d(src, &mut dst, kernel, strategy)?;
    Ok(dst)
}
