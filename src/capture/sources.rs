// SPDX-License-Identifier: GPL-3.0-only

//! Built-in frame sources
//!
//! [`StillSource`] serves a fixed bitmap (uploaded photo, tests).
//! [`FolderSource`] cycles through the image files of a directory, which
//! stands in for a live feed in headless runs.

use crate::capture::FrameSource;
use crate::errors::{AppResult, CaptureError};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Frame source backed by a single fixed bitmap.
#[derive(Debug, Clone)]
pub struct StillSource {
    frame: RgbaImage,
}

impl StillSource {
    pub fn new(frame: RgbaImage) -> Self {
        Self { frame }
    }

    /// Load the still from an image file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let img = image::open(path).map_err(|e| {
            CaptureError::SourceUnavailable(format!(
                "cannot load {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::new(img.to_rgba8()))
    }
}

impl FrameSource for StillSource {
    fn next_frame(&mut self) -> AppResult<RgbaImage> {
        Ok(self.frame.clone())
    }
}

/// Frame source that cycles through the image files of a directory.
pub struct FolderSource {
    paths: Vec<PathBuf>,
    cursor: usize,
}

impl FolderSource {
    /// Scan a directory for JPEG and PNG files, sorted by name.
    pub fn new(dir: &Path) -> AppResult<Self> {
        let mut paths = Vec::new();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            CaptureError::SourceUnavailable(format!("cannot read {}: {}", dir.display(), e))
        })?;
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy();
                if ext.eq_ignore_ascii_case("jpg")
                    || ext.eq_ignore_ascii_case("jpeg")
                    || ext.eq_ignore_ascii_case("png")
                {
                    paths.push(path);
                }
            }
        }
        paths.sort();
        debug!(dir = %dir.display(), count = paths.len(), "Folder source scanned");
        Ok(Self { paths, cursor: 0 })
    }
}

impl FrameSource for FolderSource {
    fn next_frame(&mut self) -> AppResult<RgbaImage> {
        if self.paths.is_empty() {
            return Err(
                CaptureError::SourceUnavailable("no image files in folder".to_string()).into(),
            );
        }
        let path = &self.paths[self.cursor % self.paths.len()];
        self.cursor += 1;
        match image::open(path) {
            Ok(img) => Ok(img.to_rgba8()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Frame file failed to load");
                Err(CaptureError::SourceUnavailable(format!(
                    "cannot load {}: {}",
                    path.display(),
                    e
                ))
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn still_source_repeats_its_frame() {
        let frame = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let mut source = StillSource::new(frame.clone());
        assert_eq!(source.next_frame().expect("frame"), frame);
        assert_eq!(source.next_frame().expect("frame"), frame);
    }

    #[test]
    fn empty_folder_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut source = FolderSource::new(dir.path()).expect("source");
        assert!(source.next_frame().is_err());
    }

    #[test]
    fn folder_source_cycles_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = RgbaImage::from_pixel(2, 2, Rgba([10, 0, 0, 255]));
        let b = RgbaImage::from_pixel(2, 2, Rgba([0, 10, 0, 255]));
        a.save(dir.path().join("a.png")).expect("save");
        b.save(dir.path().join("b.png")).expect("save");

        let mut source = FolderSource::new(dir.path()).expect("source");
        let first = source.next_frame().expect("frame");
        let second = source.next_frame().expect("frame");
        let third = source.next_frame().expect("frame");
        assert_ne!(first, second);
        assert_eq!(first, third, "source should wrap around");
    }
}
