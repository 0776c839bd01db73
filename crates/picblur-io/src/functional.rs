use std::path::Path;

use image::{ColorType, DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use picblur_image::{ColorMode, Picture, PictureError, PictureSize, PixelGrid};

use crate::error::IoError;

/// Decodes a picture from the raw bytes of an encoded image.
///
/// The format is sniffed from the bytes. Luma images become [`ColorMode::Grey`],
/// RGB images [`ColorMode::Rgb`] and images with an alpha channel [`ColorMode::Rgba`].
/// Samples deeper than 8 bits are reduced to 8 bits.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the encoded image.
///
/// # Returns
///
/// A picture whose `format` is the name of the detected format, e.g. `PNG`.
pub fn load(bytes: &[u8]) -> Result<Picture, IoError> {
    let format = image::guess_format(bytes)?;
    let img = image::load_from_memory_with_format(bytes, format)?;

    let size = PictureSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let (mode, samples) = match img.color() {
        ColorType::L8 => (ColorMode::Grey, img.into_luma8().into_raw()),
        ColorType::Rgb8 => (ColorMode::Rgb, img.into_rgb8().into_raw()),
        ColorType::Rgba8 | ColorType::La8 => (ColorMode::Rgba, img.into_rgba8().into_raw()),
        ColorType::L16 => {
            log::warn!("reducing 16-bit luma samples to 8 bits");
            (ColorMode::Grey, img.into_luma8().into_raw())
        }
        ColorType::Rgb16 | ColorType::Rgb32F => {
            log::warn!("reducing {:?} samples to 8 bits", img.color());
            (ColorMode::Rgb, img.into_rgb8().into_raw())
        }
        other => {
            log::warn!("reducing {other:?} samples to 8-bit RGBA");
            (ColorMode::Rgba, img.into_rgba8().into_raw())
        }
    };

    let pixels = PixelGrid::from_samples(size, mode.channels(), &samples)?;
    let format_name = format!("{format:?}").to_ascii_uppercase();
    log::debug!("decoded {format_name} picture: {size}, {mode}");

    Ok(Picture::new(pixels, mode)?.with_format(format_name))
}

/// Encodes a picture into the given image format.
///
/// Only [`ColorMode::Grey`], [`ColorMode::Rgb`] and [`ColorMode::Rgba`] pictures can be
/// encoded. Components are rounded and clamped to 8 bits.
///
/// # Arguments
///
/// * `picture` - The picture to encode.
/// * `format` - The target image format.
///
/// # Returns
///
/// The encoded bytes.
pub fn save(picture: &Picture, format: ImageFormat) -> Result<Vec<u8>, IoError> {
    let mode = picture.mode();
    if !matches!(mode, ColorMode::Grey | ColorMode::Rgb | ColorMode::Rgba) {
        return Err(IoError::UnsupportedMode(mode.to_string()));
    }

    let (width, height) = encoded_size(picture.size())?;
    let samples = to_u8_samples(picture.pixels());
    let expected = samples.len();

    let img = match mode {
        ColorMode::Grey => {
            GrayImage::from_raw(width, height, samples).map(DynamicImage::ImageLuma8)
        }
        ColorMode::Rgb => RgbImage::from_raw(width, height, samples).map(DynamicImage::ImageRgb8),
        _ => RgbaImage::from_raw(width, height, samples).map(DynamicImage::ImageRgba8),
    }
    .ok_or(PictureError::InvalidDataLength(
        expected,
        picture.width() * picture.height() * mode.channels(),
    ))?;

    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), format)?;

    Ok(bytes)
}

/// Reads a picture from the given file path.
///
/// The file name of the returned picture is the file name of `file_path`.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
pub fn read_picture(file_path: impl AsRef<Path>) -> Result<Picture, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let bytes = std::fs::read(&file_path)?;
    let picture = load(&bytes)?;

    Ok(match file_path.file_name() {
        Some(name) => picture.with_filename(name.to_string_lossy()),
        None => picture,
    })
}

/// Writes a picture to the given file path.
///
/// The format is inferred from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `picture` - The picture to encode.
pub fn write_picture(file_path: impl AsRef<Path>, picture: &Picture) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let format = ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    let bytes = save(picture, format)?;
    std::fs::write(file_path, bytes)?;

    Ok(())
}

/// Dimensions of a picture as taken by the codec.
fn encoded_size(size: PictureSize) -> Result<(u32, u32), IoError> {
    match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(IoError::PictureTooLarge(size.width, size.height)),
    }
}

/// Round and clamp every component to an 8-bit sample.
fn to_u8_samples(pixels: &PixelGrid) -> Vec<u8> {
    let lossy = pixels
        .as_slice()
        .iter()
        .any(|&v| v.fract() != 0.0 || !(0.0..=255.0).contains(&v));
    if lossy {
        log::warn!("picture is not normalized, rounding samples to 8 bits");
    }

    pixels
        .as_slice()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect()
}
