// SPDX-License-Identifier: GPL-3.0-only

//! Frame source boundary, single-shot capture, and the in-memory gallery
//!
//! A [`FrameSource`] hands out one frame at a time; [`capture_single`]
//! pulls exactly one frame, runs it through the compositor, and stamps the
//! result as an immutable [`CapturedImage`]. The caller decides where the
//! record goes, usually a [`Gallery`] or a photobooth session.

mod sources;

pub use sources::{FolderSource, StillSource};

use crate::compositor::{self, AdjustmentParams};
use crate::errors::AppResult;
use crate::filters::FilterEffect;
use chrono::{DateTime, Local};
use image::RgbaImage;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Boundary consumed by the pipeline: "give me the current frame".
///
/// Implemented by a live camera feed or a loaded file. Returns
/// `CaptureError::SourceUnavailable` when no frame can be provided; the
/// pipeline reports that, it never retries.
pub trait FrameSource {
    /// Pull the current frame.
    fn next_frame(&mut self) -> AppResult<RgbaImage>;
}

/// One captured, composited photo. Immutable once created.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// Unique id derived from the capture time
    pub id: String,
    /// Composited bitmap
    pub image: Arc<RgbaImage>,
    /// Capture timestamp
    pub captured_at: DateTime<Local>,
    /// Name of the applied filter, if any
    pub filter_name: Option<String>,
    /// Snapshot of the adjustments used
    pub adjustments: AdjustmentParams,
}

// Sequence counter keeps ids unique when captures land in the same
// millisecond.
static CAPTURE_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_capture_id(at: DateTime<Local>) -> String {
    let seq = CAPTURE_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("IMG_{}_{:04}", at.format("%Y%m%d_%H%M%S%3f"), seq)
}

/// Capture one frame and run it through the compositor.
///
/// Pulls exactly one frame from the source, composes it, and stamps the
/// result with a timestamp and a fresh id. Fails with `SourceUnavailable`
/// when the source has no frame; prior gallery state is untouched.
pub fn capture_single<S: FrameSource + ?Sized>(
    source: &mut S,
    params: &AdjustmentParams,
    filter: Option<&FilterEffect>,
) -> AppResult<CapturedImage> {
    capture_single_with_rng(source, params, filter, &mut rand::rng())
}

/// [`capture_single`] with a caller-supplied random source (grain).
pub fn capture_single_with_rng<S: FrameSource + ?Sized, R: Rng + ?Sized>(
    source: &mut S,
    params: &AdjustmentParams,
    filter: Option<&FilterEffect>,
    rng: &mut R,
) -> AppResult<CapturedImage> {
    let frame = source.next_frame()?;
    debug!(
        width = frame.width(),
        height = frame.height(),
        "Frame pulled from source"
    );

    let composed = compositor::compose_with_rng(&frame, params, filter, rng)?;
    let captured_at = Local::now();
    let id = next_capture_id(captured_at);

    info!(%id, filter = filter.map(|f| f.id).unwrap_or("none"), "Photo captured");

    Ok(CapturedImage {
        id,
        image: Arc::new(composed),
        captured_at,
        filter_name: filter.map(|f| f.name.to_string()),
        adjustments: *params,
    })
}

/// Ordered in-memory list of captured photos.
#[derive(Debug, Default)]
pub struct Gallery {
    shots: Vec<CapturedImage>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shot, preserving capture order.
    pub fn push(&mut self, shot: CapturedImage) {
        self.shots.push(shot);
    }

    /// Remove a shot by id. Returns the removed record, if found.
    pub fn remove(&mut self, id: &str) -> Option<CapturedImage> {
        let index = self.shots.iter().position(|s| s.id == id)?;
        Some(self.shots.remove(index))
    }

    pub fn shots(&self) -> &[CapturedImage] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn clear(&mut self) {
        self.shots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, CaptureError};
    use image::Rgba;

    struct FailingSource;

    impl FrameSource for FailingSource {
        fn next_frame(&mut self) -> AppResult<RgbaImage> {
            Err(CaptureError::SourceUnavailable("device not ready".into()).into())
        }
    }

    fn test_frame() -> RgbaImage {
        RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn capture_stamps_id_and_snapshot() {
        let mut source = StillSource::new(test_frame());
        let params = AdjustmentParams::default().with_brightness(110.0);
        let shot = capture_single(&mut source, &params, None).expect("capture");
        assert!(shot.id.starts_with("IMG_"));
        assert_eq!(shot.adjustments, params);
        assert!(shot.filter_name.is_none());
    }

    #[test]
    fn capture_ids_are_unique() {
        let mut source = StillSource::new(test_frame());
        let params = AdjustmentParams::default();
        let a = capture_single(&mut source, &params, None).expect("capture");
        let b = capture_single(&mut source, &params, None).expect("capture");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn unavailable_source_is_reported() {
        let mut source = FailingSource;
        let err = capture_single(&mut source, &AdjustmentParams::default(), None).unwrap_err();
        assert!(matches!(
            err,
            AppError::Capture(CaptureError::SourceUnavailable(_))
        ));
    }

    #[test]
    fn gallery_preserves_order_and_removes_by_id() {
        let mut source = StillSource::new(test_frame());
        let params = AdjustmentParams::default();
        let mut gallery = Gallery::new();

        let first = capture_single(&mut source, &params, None).expect("capture");
        let second = capture_single(&mut source, &params, None).expect("capture");
        let first_id = first.id.clone();
        let second_id = second.id.clone();
        gallery.push(first);
        gallery.push(second);

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.shots()[0].id, first_id);

        let removed = gallery.remove(&first_id).expect("remove");
        assert_eq!(removed.id, first_id);
        assert_eq!(gallery.shots()[0].id, second_id);
        assert!(gallery.remove("missing").is_none());
    }
}
