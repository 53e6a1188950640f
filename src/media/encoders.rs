// SPDX-License-Identifier: GPL-3.0-only

//! Async photo encoding
//!
//! This module handles encoding composited images for the save sink:
//! - JPEG (with quality control)
//! - PNG (lossless)
//!
//! All encoding operations run asynchronously to avoid blocking.

use crate::errors::{AppResult, MediaError};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Supported encoding formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EncodingFormat {
    /// JPEG format (lossy compression)
    #[default]
    Jpeg,
    /// PNG format (lossless compression)
    Png,
}

impl EncodingFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            EncodingFormat::Jpeg => "jpg",
            EncodingFormat::Png => "png",
        }
    }
}

/// Encoding quality settings (JPEG only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EncodingQuality {
    /// Low quality (high compression)
    Low,
    /// Medium quality (balanced)
    Medium,
    /// High quality (low compression)
    #[default]
    High,
    /// Maximum quality (minimal compression)
    Maximum,
}

impl EncodingQuality {
    /// Get JPEG quality value (0-100)
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            EncodingQuality::Low => 60,
            EncodingQuality::Medium => 80,
            EncodingQuality::High => 92,
            EncodingQuality::Maximum => 98,
        }
    }
}

/// Encoded image data ready for saving
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub format: EncodingFormat,
    pub width: u32,
    pub height: u32,
}

/// Photo encoder
pub struct PhotoEncoder {
    format: EncodingFormat,
    quality: EncodingQuality,
}

impl PhotoEncoder {
    /// Create a new encoder with JPEG format and high quality
    pub fn new() -> Self {
        Self {
            format: EncodingFormat::Jpeg,
            quality: EncodingQuality::High,
        }
    }

    /// Set encoding format
    pub fn set_format(&mut self, format: EncodingFormat) {
        self.format = format;
    }

    /// Set encoding quality (only affects JPEG)
    pub fn set_quality(&mut self, quality: EncodingQuality) {
        self.quality = quality;
    }

    /// Encode a composited image asynchronously.
    ///
    /// Runs the encoding in a background task to avoid blocking.
    pub async fn encode(&self, image: RgbaImage) -> AppResult<EncodedImage> {
        let format = self.format;
        let quality = self.quality;
        let (width, height) = image.dimensions();
        info!(width, height, ?format, "Starting encoding");

        let data = tokio::task::spawn_blocking(move || match format {
            EncodingFormat::Jpeg => Self::encode_jpeg(&image, quality),
            EncodingFormat::Png => Self::encode_png(&image),
        })
        .await
        .map_err(|e| MediaError::EncodingFailed(format!("encoding task error: {}", e)))??;

        debug!(size = data.len(), "Encoding complete");

        Ok(EncodedImage {
            data,
            format,
            width,
            height,
        })
    }

    /// Save encoded image to disk asynchronously.
    ///
    /// Generates a timestamped filename and saves to the given directory.
    pub async fn save(&self, encoded: EncodedImage, output_dir: PathBuf) -> AppResult<PathBuf> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("IMG_{}.{}", timestamp, encoded.format.extension());
        let filepath = output_dir.join(&filename);

        info!(path = %filepath.display(), "Saving photo");

        let filepath_clone = filepath.clone();
        tokio::task::spawn_blocking(move || {
            std::fs::write(&filepath_clone, &encoded.data)
                .map_err(|e| MediaError::SaveFailed(format!("failed to save photo: {}", e)))
        })
        .await
        .map_err(|e| MediaError::SaveFailed(format!("save task error: {}", e)))??;

        info!(path = %filepath.display(), "Photo saved successfully");
        Ok(filepath)
    }

    /// Encode image as JPEG (alpha dropped)
    fn encode_jpeg(image: &RgbaImage, quality: EncodingQuality) -> AppResult<Vec<u8>> {
        let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);

        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality.jpeg_quality());

        encoder
            .encode(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| MediaError::EncodingFailed(format!("JPEG encoding failed: {}", e)))?;

        Ok(buffer)
    }

    /// Encode image as PNG
    fn encode_png(image: &RgbaImage) -> AppResult<Vec<u8>> {
        let mut buffer = Vec::new();

        image
            .write_to(
                &mut std::io::Cursor::new(&mut buffer),
                image::ImageFormat::Png,
            )
            .map_err(|e| MediaError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

        Ok(buffer)
    }
}

impl Default for PhotoEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_format_extensions() {
        assert_eq!(EncodingFormat::Jpeg.extension(), "jpg");
        assert_eq!(EncodingFormat::Png.extension(), "png");
    }

    #[test]
    fn test_jpeg_quality_values() {
        assert_eq!(EncodingQuality::Low.jpeg_quality(), 60);
        assert_eq!(EncodingQuality::Medium.jpeg_quality(), 80);
        assert_eq!(EncodingQuality::High.jpeg_quality(), 92);
        assert_eq!(EncodingQuality::Maximum.jpeg_quality(), 98);
    }

    #[tokio::test]
    async fn png_encoding_is_lossless() {
        let img = RgbaImage::from_pixel(12, 9, Rgba([17, 34, 51, 255]));
        let mut encoder = PhotoEncoder::new();
        encoder.set_format(EncodingFormat::Png);
        let encoded = encoder.encode(img.clone()).await.expect("encode");
        let back = image::load_from_memory(&encoded.data)
            .expect("decode")
            .to_rgba8();
        assert_eq!(back, img);
    }

    #[tokio::test]
    async fn jpeg_encoding_produces_valid_output() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([128, 128, 128, 255]));
        let encoder = PhotoEncoder::new();
        let encoded = encoder.encode(img).await.expect("encode");
        assert_eq!(encoded.format, EncodingFormat::Jpeg);
        assert!(!encoded.data.is_empty());
        assert!(image::load_from_memory(&encoded.data).is_ok());
    }

    #[tokio::test]
    async fn save_writes_timestamped_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let img = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let encoder = PhotoEncoder::new();
        let encoded = encoder.encode(img).await.expect("encode");
        let path = encoder
            .save(encoded, dir.path().to_path_buf())
            .await
            .expect("save");
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));
    }
}
