/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image dimensions.
    #[error("data length ({0}) does not match the image dimensions ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two images that must share a shape do not.
    #[error("source size ({0}x{1}) does not match destination size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel buffer could not be allocated.
    #[error("failed to allocate an image buffer of {0} bytes")]
    AllocationFailed(usize),
}
