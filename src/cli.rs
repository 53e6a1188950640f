// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for photobooth operations
//!
//! This module provides command-line functionality for:
//! - Listing available filters
//! - Adjusting a single photo
//! - Running a full booth session
//! - Composing a photo strip from existing images

use chrono::Local;
use photobooth::capture::{FolderSource, FrameSource, StillSource, capture_single};
use photobooth::compositor::{AdjustmentParams, compose};
use photobooth::config::Config;
use photobooth::constants::{TimerSetting, booth_limits};
use photobooth::filters;
use photobooth::media::{EncodingFormat, PhotoEncoder};
use photobooth::session::{BoothSession, driver};
use photobooth::storage;
use photobooth::strip::{StripOptions, compose_session_strip, compose_strip};
use std::path::PathBuf;
use std::sync::Arc;

/// List all filters in the catalog
pub fn list_filters() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available filters:");
    println!();
    for effect in filters::catalog() {
        println!("  {:<8} {}", effect.id, effect.name);
        println!("           {}", effect.description);
        println!();
    }
    Ok(())
}

fn resolve_filter(
    id: Option<&str>,
) -> Result<Option<&'static filters::FilterEffect>, Box<dyn std::error::Error>> {
    match id {
        Some(id) => {
            let effect = filters::find(id)
                .ok_or_else(|| format!("Unknown filter '{id}' (see 'photobooth filters')"))?;
            Ok(Some(effect))
        }
        None => Ok(None),
    }
}

/// List saved photos, newest first
pub fn list_photos(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = dir.unwrap_or_else(storage::photos_dir);
    let runtime = tokio::runtime::Runtime::new()?;
    let photos = runtime.block_on(storage::list_saved_photos(dir.clone()));

    if photos.is_empty() {
        println!("No saved photos in {}", dir.display());
        return Ok(());
    }
    for path in &photos {
        println!("{}", path.display());
    }
    Ok(())
}

/// Apply a filter and adjustments to a single photo
#[allow(clippy::too_many_arguments)]
pub fn adjust_photo(
    input: PathBuf,
    output: Option<PathBuf>,
    filter: Option<String>,
    brightness: f32,
    contrast: f32,
    saturation: f32,
    temperature: f32,
    grain: f32,
    fade: f32,
    vignette: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let effect = resolve_filter(filter.as_deref())?;
    let params = AdjustmentParams::new(
        brightness,
        contrast,
        saturation,
        temperature,
        grain,
        fade,
        vignette,
    );

    let mut source = StillSource::from_path(&input)?;
    let frame = source.next_frame()?;
    let composed = compose(&frame, &params, effect)?;

    let mut encoder = PhotoEncoder::new();
    encoder.set_format(EncodingFormat::Png);

    let runtime = tokio::runtime::Runtime::new()?;
    let saved = match output {
        // Explicit file path, write the bytes directly
        Some(path) if !path.is_dir() => {
            let encoded = runtime.block_on(encoder.encode(composed))?;
            std::fs::write(&path, &encoded.data)?;
            path
        }
        other => {
            let output_dir = match other {
                Some(dir) => dir,
                None => storage::ensure_photos_dir()?,
            };
            runtime.block_on(async {
                let encoded = encoder.encode(composed).await?;
                encoder.save(encoded, output_dir).await
            })?
        }
    };
    println!("Saved: {}", saved.display());

    Ok(())
}

/// Run a full booth session against a folder of source frames
pub fn run_booth(
    source_dir: PathBuf,
    shots: u32,
    timer: Option<u32>,
    filter: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    let effect = match filter.as_deref() {
        Some(_) => resolve_filter(filter.as_deref())?,
        None => config.default_filter.as_deref().and_then(filters::find),
    };

    let shots = shots.clamp(booth_limits::SHOTS_MIN, booth_limits::SHOTS_MAX);
    let timer_seconds = match timer {
        Some(seconds) => TimerSetting::ALL
            .iter()
            .find(|t| t.seconds() == seconds)
            .map(|t| t.seconds())
            .ok_or_else(|| format!("Unsupported timer '{seconds}' (use 3, 5 or 10)"))?,
        None => config.timer.seconds(),
    };

    let mut source = FolderSource::new(&source_dir)?;
    let mut session = BoothSession::new();
    session.set_filter(effect);
    session.start(shots, timer_seconds)?;

    println!("Starting booth session: {shots} shots, {timer_seconds}s countdown");

    let runtime = tokio::runtime::Runtime::new()?;
    let (_stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let captured = runtime.block_on(driver::run(&mut session, &mut source, stop_rx))?;

    if captured.is_empty() {
        println!("Session ended without captures.");
        return Ok(());
    }

    let output_dir = match output {
        Some(path) => {
            std::fs::create_dir_all(&path)?;
            path
        }
        None => storage::ensure_photos_dir()?,
    };

    // Save individual shots
    let mut encoder = PhotoEncoder::new();
    encoder.set_format(config.output_format);
    encoder.set_quality(config.encoding_quality);
    for shot in &captured {
        let image = (*shot.image).clone();
        let dir = output_dir.clone();
        let saved = runtime.block_on(async {
            let encoded = encoder.encode(image).await?;
            encoder.save(encoded, dir).await
        })?;
        println!("Saved shot: {}", saved.display());
    }

    // Compose and save the strip
    let options = StripOptions {
        caption: config.strip_caption.clone(),
        studio_label: config.studio_label.clone(),
        date: None,
    };
    let strip = compose_session_strip(&captured, shots, &options);
    let strip_path = output_dir.join(format!(
        "strip_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    std::fs::write(&strip_path, strip.to_png()?)?;
    println!("Saved strip: {}", strip_path.display());

    Ok(())
}

/// Compose a photo strip from existing image files
pub fn compose_strip_files(
    inputs: Vec<PathBuf>,
    shots: Option<u32>,
    caption: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if inputs.is_empty() {
        return Err("No input images given".into());
    }

    let config = Config::load();
    let shot_count = shots
        .unwrap_or(inputs.len() as u32)
        .clamp(booth_limits::SHOTS_MIN, booth_limits::SHOTS_MAX);

    let mut slots = Vec::with_capacity(shot_count as usize);
    for path in inputs.iter().take(shot_count as usize) {
        let mut source = StillSource::from_path(path)?;
        let frame = source.next_frame()?;
        slots.push(Some(Arc::new(frame)));
    }
    slots.resize(shot_count as usize, None);

    let options = StripOptions {
        caption: caption.unwrap_or(config.strip_caption),
        studio_label: config.studio_label,
        date: Some(Local::now()),
    };
    let strip = compose_strip(&slots, shot_count, &options);

    let path = match output {
        Some(path) => path,
        None => storage::ensure_photos_dir()?.join(format!(
            "strip_{}.png",
            Local::now().format("%Y%m%d_%H%M%S")
        )),
    };
    std::fs::write(&path, strip.to_png()?)?;
    println!("Saved strip: {}", path.display());

    Ok(())
}

/// Capture one still from a source folder and save it
pub fn snap(
    source_dir: PathBuf,
    filter: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let effect = resolve_filter(filter.as_deref())?;

    let mut source = FolderSource::new(&source_dir)?;
    let shot = capture_single(&mut source, &AdjustmentParams::default(), effect)?;

    let output_dir = match output {
        Some(path) => {
            std::fs::create_dir_all(&path)?;
            path
        }
        None => storage::ensure_photos_dir()?,
    };

    let mut encoder = PhotoEncoder::new();
    encoder.set_format(config.output_format);
    encoder.set_quality(config.encoding_quality);

    let runtime = tokio::runtime::Runtime::new()?;
    let image = (*shot.image).clone();
    let saved = runtime.block_on(async {
        let encoded = encoder.encode(image).await?;
        encoder.save(encoded, output_dir).await
    })?;
    println!("Saved: {}", saved.display());

    Ok(())
}
