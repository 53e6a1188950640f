// SPDX-License-Identifier: GPL-3.0-only

//! Strip composition
//!
//! Lays an ordered list of captured shots into one bordered, perforated
//! composite bitmap: a header band with caption and date, the photo cells
//! stacked in capture order, and a footer band with the studio label.
//! Slots without an image (never captured, or failed to decode) render as
//! a neutral placeholder panel with the same geometry, so a bad image
//! never aborts the whole strip.

mod glyphs;
mod layout;

pub use layout::{CellRect, StripLayout};

use crate::capture::CapturedImage;
use crate::constants::booth_limits;
use crate::errors::{AppResult, MediaError};
use crate::media::decoders;
use chrono::{DateTime, Local};
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::rect::Rect;
use std::sync::Arc;
use tracing::{debug, warn};

const PAPER: Rgba<u8> = Rgba([248, 244, 236, 255]);
const INK: Rgba<u8> = Rgba([52, 48, 44, 255]);
const PLACEHOLDER_FILL: Rgba<u8> = Rgba([226, 222, 214, 255]);
const PLACEHOLDER_INK: Rgba<u8> = Rgba([150, 146, 138, 255]);
const PERFORATION: Rgba<u8> = Rgba([64, 60, 56, 255]);

/// Text and date drawn into the strip bands.
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// Caption in the header band
    pub caption: String,
    /// Studio/brand label in the footer band
    pub studio_label: String,
    /// Date shown under the caption; defaults to today
    pub date: Option<DateTime<Local>>,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            caption: "PHOTOBOOTH".to_string(),
            studio_label: "MADE WITH LOVE".to_string(),
            date: None,
        }
    }
}

/// A composed strip: the bitmap plus the layout it was drawn with.
///
/// Derived data; regenerate from the session's images rather than storing.
#[derive(Debug, Clone)]
pub struct CompositeStrip {
    pub image: RgbaImage,
    pub layout: StripLayout,
}

impl CompositeStrip {
    /// Encode the strip losslessly.
    pub fn to_png(&self) -> AppResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.image
            .write_to(
                &mut std::io::Cursor::new(&mut buffer),
                image::ImageFormat::Png,
            )
            .map_err(|e| MediaError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;
        Ok(buffer)
    }
}

/// Compose a strip from pre-decoded slots.
///
/// `slots` holds up to `shot_count` entries in capture order; `None`
/// entries (and any index beyond `slots.len()`) render as placeholders.
pub fn compose_strip(
    slots: &[Option<Arc<RgbaImage>>],
    shot_count: u32,
    options: &StripOptions,
) -> CompositeStrip {
    let shot_count = shot_count.clamp(booth_limits::SHOTS_MIN, booth_limits::SHOTS_MAX);
    let layout = StripLayout::new(shot_count);
    debug!(
        width = layout.width,
        height = layout.height,
        shots = shot_count,
        filled = slots.iter().filter(|s| s.is_some()).count(),
        "Composing strip"
    );

    let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, PAPER);

    for (index, cell) in layout.cells.iter().enumerate() {
        match slots.get(index).and_then(|s| s.as_ref()) {
            Some(photo) => place_photo(&mut canvas, cell, photo),
            None => draw_placeholder(&mut canvas, cell, index),
        }
    }

    draw_header(&mut canvas, &layout, options);
    draw_footer(&mut canvas, &layout, options);
    draw_perforations(&mut canvas, &layout);

    CompositeStrip {
        image: canvas,
        layout,
    }
}

/// Compose a strip straight from a session's captured shots.
pub fn compose_session_strip(
    shots: &[CapturedImage],
    shot_count: u32,
    options: &StripOptions,
) -> CompositeStrip {
    let slots: Vec<Option<Arc<RgbaImage>>> =
        shots.iter().map(|s| Some(Arc::clone(&s.image))).collect();
    let mut options = options.clone();
    if options.date.is_none() {
        options.date = shots.first().map(|s| s.captured_at);
    }
    compose_strip(&slots, shot_count, &options)
}

/// Compose a strip from encoded image buffers, decoding asynchronously.
///
/// Decode results land in a pre-sized slot vector, so capture order is
/// preserved regardless of decode completion order. A slot that fails to
/// decode degrades to the placeholder panel with a warning; it does not
/// abort the composition.
pub async fn compose_encoded_strip(
    encoded: Vec<Vec<u8>>,
    shot_count: u32,
    options: &StripOptions,
) -> CompositeStrip {
    let decoded = decoders::decode_all_ordered(encoded).await;
    let slots: Vec<Option<Arc<RgbaImage>>> = decoded
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(img) => Some(Arc::new(img)),
            Err(err) => {
                warn!(slot = index, error = %err, "Slot failed to decode, using placeholder");
                None
            }
        })
        .collect();
    compose_strip(&slots, shot_count, options)
}

/// Scale the photo to cover the cell and center-crop the overflow
/// (`object-fit: cover`); cells are never letterboxed.
fn place_photo(canvas: &mut RgbaImage, cell: &CellRect, photo: &RgbaImage) {
    let fitted = DynamicImage::ImageRgba8(photo.clone())
        .resize_to_fill(cell.width, cell.height, imageops::FilterType::Triangle)
        .to_rgba8();
    imageops::overlay(canvas, &fitted, cell.x as i64, cell.y as i64);
}

fn draw_placeholder(canvas: &mut RgbaImage, cell: &CellRect, index: usize) {
    imageproc::drawing::draw_filled_rect_mut(
        canvas,
        Rect::at(cell.x as i32, cell.y as i32).of_size(cell.width, cell.height),
        PLACEHOLDER_FILL,
    );

    let label = format!("PHOTO {}", index + 1);
    let scale = 3;
    let text_w = glyphs::text_width(&label, scale);
    let x = cell.x + (cell.width.saturating_sub(text_w)) / 2;
    let y = cell.y + (cell.height.saturating_sub(glyphs::text_height(scale))) / 2;
    glyphs::draw_text(canvas, &label, x, y, scale, PLACEHOLDER_INK);
}

fn draw_header(canvas: &mut RgbaImage, layout: &StripLayout, options: &StripOptions) {
    let caption = options.caption.to_uppercase();
    let date = options.date.unwrap_or_else(Local::now);
    let date_label = date.format("%Y-%m-%d").to_string();

    // Caption line and date line centered together within the band.
    let gap = 8;
    let block = glyphs::text_height(3) + gap + glyphs::text_height(2);
    let top = layout.header.y + layout.header.height.saturating_sub(block) / 2;
    glyphs::draw_text_centered(canvas, &caption, layout.width, top, 3, INK);
    glyphs::draw_text_centered(
        canvas,
        &date_label,
        layout.width,
        top + glyphs::text_height(3) + gap,
        2,
        PLACEHOLDER_INK,
    );
}

fn draw_footer(canvas: &mut RgbaImage, layout: &StripLayout, options: &StripOptions) {
    let label = options.studio_label.to_uppercase();
    let y = layout.footer.y + (layout.footer.height - glyphs::text_height(2)) / 2;
    glyphs::draw_text_centered(canvas, &label, layout.width, y, 2, INK);
}

fn draw_perforations(canvas: &mut RgbaImage, layout: &StripLayout) {
    for &(x, y) in &layout.perforations {
        draw_filled_circle_mut(
            canvas,
            (x as i32, y as i32),
            layout.perforation_radius as i32,
            PERFORATION,
        );
    }
}
