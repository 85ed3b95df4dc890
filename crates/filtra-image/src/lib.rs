#![deny(missing_docs)]
//! Image container types for raster processing.

/// Flat row-major image container and size type.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
