// SPDX-License-Identifier: GPL-3.0-only

//! Strip layout metadata
//!
//! Derived entirely from the constants in [`crate::constants::strip_layout`]
//! and the shot count; the composer regenerates it on demand rather than
//! storing it.

use crate::constants::strip_layout as dims;

/// Pixel rectangle within the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Computed layout for one strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    /// Total strip width
    pub width: u32,
    /// Total strip height
    pub height: u32,
    /// Number of photo cells (filled or placeholder)
    pub shot_count: u32,
    /// Header band rectangle
    pub header: CellRect,
    /// Footer band rectangle
    pub footer: CellRect,
    /// Photo cell rectangles, top to bottom in capture order
    pub cells: Vec<CellRect>,
    /// Perforation mark centers, left edge then right edge
    pub perforations: Vec<(u32, u32)>,
    /// Perforation mark radius
    pub perforation_radius: u32,
}

impl StripLayout {
    /// Compute the layout for a given shot count.
    pub fn new(shot_count: u32) -> Self {
        let width = dims::STRIP_WIDTH;
        let height = dims::strip_height(shot_count);

        let header = CellRect {
            x: 0,
            y: 0,
            width,
            height: dims::HEADER_HEIGHT,
        };
        let footer = CellRect {
            x: 0,
            y: height - dims::FOOTER_HEIGHT,
            width,
            height: dims::FOOTER_HEIGHT,
        };

        let cells = (0..shot_count)
            .map(|i| CellRect {
                x: dims::SIDE_MARGIN,
                y: dims::HEADER_HEIGHT + i * (dims::PHOTO_HEIGHT + dims::PHOTO_SPACING),
                width: dims::PHOTO_WIDTH,
                height: dims::PHOTO_HEIGHT,
            })
            .collect();

        // Perforations are evenly spaced along the full strip height on
        // both edges, independent of how many cells there are.
        let mut perforations = Vec::with_capacity(2 * dims::PERFORATION_COUNT as usize);
        for i in 0..dims::PERFORATION_COUNT {
            let y = (height * (2 * i + 1)) / (2 * dims::PERFORATION_COUNT);
            perforations.push((dims::PERFORATION_INSET, y));
        }
        for i in 0..dims::PERFORATION_COUNT {
            let y = (height * (2 * i + 1)) / (2 * dims::PERFORATION_COUNT);
            perforations.push((width - 1 - dims::PERFORATION_INSET, y));
        }

        Self {
            width,
            height,
            shot_count,
            header,
            footer,
            cells,
            perforations,
            perforation_radius: dims::PERFORATION_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_follows_fixed_formula() {
        for count in 1..=5 {
            let layout = StripLayout::new(count);
            assert_eq!(layout.height, dims::strip_height(count));
            assert_eq!(layout.cells.len(), count as usize);
        }
    }

    #[test]
    fn cells_do_not_overlap_bands() {
        let layout = StripLayout::new(4);
        let first = layout.cells.first().expect("cells");
        let last = layout.cells.last().expect("cells");
        assert!(first.y >= layout.header.height);
        assert!(last.y + last.height <= layout.footer.y);
    }

    #[test]
    fn perforation_count_is_independent_of_shots() {
        let short = StripLayout::new(1);
        let tall = StripLayout::new(5);
        assert_eq!(short.perforations.len(), tall.perforations.len());
        assert_eq!(
            short.perforations.len(),
            2 * dims::PERFORATION_COUNT as usize
        );
    }

    #[test]
    fn perforations_sit_on_both_edges() {
        let layout = StripLayout::new(3);
        let left = layout
            .perforations
            .iter()
            .filter(|(x, _)| *x < layout.width / 2)
            .count();
        assert_eq!(left, dims::PERFORATION_COUNT as usize);
    }
}
