use std::path::Path;

use image::{ColorType, ImageReader};

use filtra_image::{Image, ImageSize};

use crate::error::IoError;

/// A decoded image in any of the supported 8-bit channel layouts.
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
}

impl GenericImage {
    /// The size of the underlying image.
    pub fn size(&self) -> ImageSize {
        match self {
            Self::L8(img) => img.size(),
            Self::La8(img) => img.size(),
            Self::Rgb8(img) => img.size(),
            Self::Rgba8(img) => img.size(),
        }
    }

    /// The number of channels of the underlying image.
    pub fn num_channels(&self) -> usize {
        match self {
            Self::L8(_) => 1,
            Self::La8(_) => 2,
            Self::Rgb8(_) => 3,
            Self::Rgba8(_) => 4,
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image
/// crate, guessing the format from the file content. Sources with more than
/// 8 bits per channel are narrowed to 8 bits; the channel layout is kept.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// The decoded image as one of the [`GenericImage`] layouts.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = ImageReader::open(file_path)?.with_guessed_format()?.decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        ColorType::L8 | ColorType::L16 => {
            GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?)
        }
        ColorType::La8 | ColorType::La16 => {
            GenericImage::La8(Image::new(size, img.into_luma_alpha8().into_raw())?)
        }
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => {
            GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?)
        }
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
            GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?)
        }
        other => return Err(IoError::UnsupportedColorType(format!("{other:?}"))),
    };

    Ok(image)
}
