//! # Image Codecs Module
//!
//! Questo modulo incapsula l'encoding in-process verso ogni formato target.
//!
//! ## Responsabilità:
//! - Una funzione di encode per formato (JPEG, PNG, GIF, WebP, AVIF)
//! - Applicazione dei preset statici di `presets`
//! - Conversione del color model dove il formato lo richiede (JPEG senza alpha)
//!
//! ## Codec utilizzati:
//! - JPEG/PNG/GIF/AVIF: encoder della crate `image`
//! - WebP lossy: crate `webp` (binding libwebp), unica via per controllare
//!   la qualità del canale alpha
//!
//! Tutte le funzioni sono sincrone e CPU-bound: i chiamanti le eseguono sul
//! blocking pool di tokio.

use crate::error::ConvertError;
use crate::presets::{AvifPreset, GifPreset, JpegPreset, PngPreset, WebpPreset};
use image::codecs::avif::AvifEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, ImageEncoder};

/// Encode to JPEG with the configured quality.
///
/// JPEG has no alpha channel; transparent sources are flattened to RGB.
pub fn encode_jpeg(image: &DynamicImage, preset: &JpegPreset) -> Result<Vec<u8>, ConvertError> {
    let rgb = image.to_rgb8();
    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, preset.quality);
    encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)?;
    Ok(out)
}

/// Encode to PNG with maximum compression per the preset.
pub fn encode_png(image: &DynamicImage, preset: &PngPreset) -> Result<Vec<u8>, ConvertError> {
    let rgba = image.to_rgba8();
    let compression = if preset.compression_level >= 9 {
        CompressionType::Best
    } else {
        CompressionType::Default
    };

    let mut out = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut out, compression, FilterType::Adaptive);
    encoder.write_image(rgba.as_raw(), rgba.width(), rgba.height(), ColorType::Rgba8)?;
    Ok(out)
}

/// Encode to GIF; the encoder quantizes down to the 256-color palette.
pub fn encode_gif(image: &DynamicImage, _preset: &GifPreset) -> Result<Vec<u8>, ConvertError> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut out = Vec::new();
    {
        // Speed 1-30 trades quantization quality for time; 10 keeps the full
        // 256-color palette accurate without the slowest search
        let mut encoder = GifEncoder::new_with_speed(&mut out, 10);
        encoder.encode(rgba.as_raw(), width, height, ColorType::Rgba8)?;
    }
    Ok(out)
}

/// Encode to lossy WebP with separate color and alpha quality.
pub fn encode_webp(image: &DynamicImage, preset: &WebpPreset) -> Result<Vec<u8>, ConvertError> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut config = webp::WebPConfig::new().map_err(|_| {
        ConvertError::WebpEncode("failed to initialize WebP encoder configuration".to_string())
    })?;
    config.quality = preset.quality as f32;
    config.alpha_quality = preset.alpha_quality as i32;

    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| ConvertError::WebpEncode(format!("{e:?}")))?;
    Ok(memory.to_vec())
}

/// Encode to AVIF with the configured quality and encoder speed.
pub fn encode_avif(image: &DynamicImage, preset: &AvifPreset) -> Result<Vec<u8>, ConvertError> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut out = Vec::new();
    let encoder = AvifEncoder::new_with_speed_quality(&mut out, preset.speed, preset.quality);
    encoder.write_image(rgba.as_raw(), width, height, ColorType::Rgba8)?;
    Ok(out)
}
