use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, RgbImage, imageops};
use tracing::info;

use crate::domain::thumbnails::strip_data_url;

const JPEG_QUALITY: u8 = 98;
const SHARPEN_SIGMA: f32 = 1.5;
const SHARPEN_THRESHOLD: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ImageProcessingError {
    #[error("invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unrecognised image format: {0}")]
    UnknownFormat(image::ImageError),
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode enhanced image: {0}")]
    Encode(image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Decode base64 image data (optionally a `data:` URL), run the enhancement
/// chain and return the result as base64 JPEG.
pub fn enhance_base64_image(image: &str) -> Result<String, ImageProcessingError> {
    let bytes = STANDARD.decode(strip_data_url(image))?;
    let enhanced = enhance_image_bytes(&bytes)?;
    Ok(STANDARD.encode(enhanced))
}

/// Apply the fixed thumbnail enhancement chain and export as JPEG.
///
/// Brightness, saturation and a warm hue shift first, then contrast with a
/// shadow lift, gamma, sharpening, a second colour boost, gamma and contrast.
pub fn enhance_image_bytes(bytes: &[u8]) -> Result<Vec<u8>, ImageProcessingError> {
    let (decoded, metadata) = decode(bytes)?;
    info!(
        format = ?metadata.format,
        width = metadata.width,
        height = metadata.height,
        "processing thumbnail"
    );

    let mut rgb = apply_orientation(decoded, exif_orientation(bytes)).to_rgb8();

    modulate(&mut rgb, 1.25, 1.22, 3.0);
    linear(&mut rgb, 1.35, -15.0);
    gamma(&mut rgb, 1.2);
    let mut rgb = imageops::unsharpen(&rgb, SHARPEN_SIGMA, SHARPEN_THRESHOLD);
    modulate(&mut rgb, 1.08, 1.12, 0.0);
    gamma(&mut rgb, 1.15);
    linear(&mut rgb, 1.12, -5.0);

    encode_jpeg(&rgb)
}

fn decode(bytes: &[u8]) -> Result<(DynamicImage, ImageMetadata), ImageProcessingError> {
    let format = image::guess_format(bytes).map_err(ImageProcessingError::UnknownFormat)?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(ImageProcessingError::Decode)?;
    let metadata = ImageMetadata {
        format,
        width: decoded.width(),
        height: decoded.height(),
    };
    Ok((decoded, metadata))
}

fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>, ImageProcessingError> {
    let mut buf = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(ImageProcessingError::Encode)?;
    Ok(buf)
}

fn exif_orientation(bytes: &[u8]) -> Option<u32> {
    let exif = exif::Reader::new()
        .read_from_container(&mut Cursor::new(bytes))
        .ok()?;
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?
        .value
        .get_uint(0)
}

fn apply_orientation(image: DynamicImage, orientation: Option<u32>) -> DynamicImage {
    match orientation {
        Some(2) => image.fliph(),
        Some(3) => image.rotate180(),
        Some(4) => image.flipv(),
        Some(5) => image.rotate90().fliph(),
        Some(6) => image.rotate90(),
        Some(7) => image.rotate270().fliph(),
        Some(8) => image.rotate270(),
        _ => image,
    }
}

/// Scale brightness and saturation, then rotate hue by `hue_degrees`.
fn modulate(image: &mut RgbImage, brightness: f32, saturation: f32, hue_degrees: f32) {
    let hue = (hue_degrees != 0.0).then(|| hue_matrix(hue_degrees));

    for pixel in image.pixels_mut() {
        let [r, g, b] = pixel.0.map(|c| f32::from(c) * brightness);
        let luma = 0.299 * r + 0.587 * g + 0.114 * b;
        let mut rgb = [r, g, b].map(|c| luma + (c - luma) * saturation);

        if let Some(m) = &hue {
            let [r, g, b] = rgb;
            rgb = [
                m[0] * r + m[1] * g + m[2] * b,
                m[3] * r + m[4] * g + m[5] * b,
                m[6] * r + m[7] * g + m[8] * b,
            ];
        }

        pixel.0 = rgb.map(to_channel);
    }
}

fn hue_matrix(degrees: f32) -> [f32; 9] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        0.213 + cos * 0.787 - sin * 0.213,
        0.715 - cos * 0.715 - sin * 0.715,
        0.072 - cos * 0.072 + sin * 0.928,
        0.213 - cos * 0.213 + sin * 0.143,
        0.715 + cos * 0.285 + sin * 0.140,
        0.072 - cos * 0.072 - sin * 0.283,
        0.213 - cos * 0.213 - sin * 0.787,
        0.715 - cos * 0.715 + sin * 0.715,
        0.072 + cos * 0.928 + sin * 0.072,
    ]
}

/// `out = multiplier * in + offset` on every channel.
fn linear(image: &mut RgbImage, multiplier: f32, offset: f32) {
    for pixel in image.pixels_mut() {
        pixel.0 = pixel.0.map(|c| to_channel(f32::from(c) * multiplier + offset));
    }
}

fn gamma(image: &mut RgbImage, gamma: f32) {
    let exponent = gamma.recip();
    let lut: [u8; 256] =
        std::array::from_fn(|i| to_channel(255.0 * (i as f32 / 255.0).powf(exponent)));

    for pixel in image.pixels_mut() {
        pixel.0 = pixel.0.map(|c| lut[usize::from(c)]);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0..=255 first
fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
