// SPDX-License-Identifier: GPL-3.0-only

//! Async image decoding with order preservation

use crate::errors::{AppResult, MediaError};
use image::RgbaImage;
use tracing::debug;

/// Decode an encoded image buffer off the async executor.
pub async fn decode_image(bytes: Vec<u8>) -> AppResult<RgbaImage> {
    let image = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes)
            .map(|img| img.to_rgba8())
            .map_err(|e| MediaError::DecodeFailed(e.to_string()))
    })
    .await
    .map_err(|e| MediaError::DecodeFailed(format!("decode task error: {}", e)))??;

    debug!(
        width = image.width(),
        height = image.height(),
        "Image decoded"
    );
    Ok(image)
}

/// Decode a batch of buffers, one at a time, into a pre-sized result
/// vector.
///
/// The pipeline never parallelizes decodes against each other; results
/// occupy the slot of their input index, so downstream consumers see the
/// original (capture) order no matter when each decode finishes. Failed
/// slots carry their error instead of aborting the batch.
pub async fn decode_all_ordered(buffers: Vec<Vec<u8>>) -> Vec<AppResult<RgbaImage>> {
    let mut results: Vec<AppResult<RgbaImage>> = Vec::with_capacity(buffers.len());
    for (index, bytes) in buffers.into_iter().enumerate() {
        let result = decode_image(bytes).await;
        if result.is_err() {
            debug!(slot = index, "Decode failed for slot");
        }
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn png_bytes(level: u8) -> Vec<u8> {
        let img = RgbaImage::from_pixel(6, 6, Rgba([level, level, level, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .expect("encode");
        bytes
    }

    #[tokio::test]
    async fn decode_round_trip() {
        let decoded = decode_image(png_bytes(42)).await.expect("decode");
        assert_eq!(decoded.get_pixel(0, 0)[0], 42);
    }

    #[tokio::test]
    async fn garbage_bytes_fail_with_decode_error() {
        let err = decode_image(vec![1, 2, 3]).await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::AppError::Media(MediaError::DecodeFailed(_))
        ));
    }

    #[tokio::test]
    async fn batch_preserves_input_order_and_isolates_failures() {
        let buffers = vec![png_bytes(10), vec![0xff, 0x00], png_bytes(30)];
        let results = decode_all_ordered(buffers).await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().expect("slot 0").get_pixel(0, 0)[0], 10);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().expect("slot 2").get_pixel(0, 0)[0], 30);
    }
}
