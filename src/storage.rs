// SPDX-License-Identifier: GPL-3.0-only

//! Storage utilities for saved photos and strips

use std::path::{Path, PathBuf};
use tracing::debug;

/// Default output directory (`~/Pictures/photobooth`), created on demand.
///
/// Falls back to the current directory when the system has no Pictures
/// directory configured.
pub fn photos_dir() -> PathBuf {
    let base = dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("photobooth")
}

/// Ensure the output directory exists, returning its path.
pub fn ensure_photos_dir() -> std::io::Result<PathBuf> {
    let dir = photos_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// List saved photo files in a directory, newest first.
///
/// Scans for JPEG and PNG files using blocking std::fs inside a blocking
/// task.
pub async fn list_saved_photos(dir: PathBuf) -> Vec<PathBuf> {
    let entries = tokio::task::spawn_blocking(move || scan_photo_files(&dir))
        .await
        .unwrap_or_default();

    debug!(count = entries.len(), "Saved photos listed");
    entries
}

fn scan_photo_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<(std::time::SystemTime, PathBuf)> = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(ext) = path.extension() else {
                continue;
            };
            let ext = ext.to_string_lossy();
            if !(ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("png")) {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
            files.push((modified, path));
        }
    }
    // Newest first
    files.sort_by(|a, b| b.0.cmp(&a.0));
    files.into_iter().map(|(_, path)| path).collect()
}
