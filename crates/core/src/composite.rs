//! The output canvas and its collision index.
//!
//! A [`CompositeCanvas`] owns both the `side × side` luma buffer and the
//! [`OverlapIndex`] of placements drawn on it, so the two are always reset
//! together.

use image::{imageops, GrayImage};
use serde::{Deserialize, Serialize};

use crate::error::ScatterError;
use crate::overlap::OverlapIndex;
use crate::rect::Rect;
use crate::source::CanvasExporter;
use crate::sprite::Sprite;

/// What happened to one placement candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOutcome {
    /// Overlapped an earlier placement; nothing changed.
    Rejected,
    /// Crossed the canvas edge while overflow rejection is on; nothing changed.
    OutOfBounds,
    /// Recorded in the index and blitted.
    Drawn,
    /// Recorded in the index, but the box crosses the canvas edge so the
    /// pixels were not written.
    AcceptedNotDrawn,
}

impl PlacementOutcome {
    /// Whether the candidate now occupies space in the index.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Drawn | Self::AcceptedNotDrawn)
    }
}

#[derive(Debug, Clone)]
pub struct CompositeCanvas {
    image: GrayImage,
    index: OverlapIndex,
    reject_overflow: bool,
}

impl CompositeCanvas {
    /// Creates a zero-filled square canvas with an empty index.
    ///
    /// Returns `ScatterError::InvalidDimensions` if `side` is zero.
    pub fn new(side: u32) -> Result<Self, ScatterError> {
        if side == 0 {
            return Err(ScatterError::InvalidDimensions);
        }
        Ok(Self {
            image: GrayImage::new(side, side),
            index: OverlapIndex::new(),
            reject_overflow: false,
        })
    }

    /// Rejects candidates crossing the canvas edge before they reach the index.
    pub fn with_reject_overflow(mut self, reject: bool) -> Self {
        self.reject_overflow = reject;
        self
    }

    pub fn side(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn index(&self) -> &OverlapIndex {
        &self.index
    }

    /// Tests `rect` against the index and, on acceptance, blits `sprite` at
    /// the rect's origin.
    ///
    /// An accepted rect whose far corner lies outside the canvas stays in the
    /// index but is not drawn, unless overflow rejection is enabled.
    pub fn place(&mut self, rect: Rect, sprite: Sprite) -> PlacementOutcome {
        let in_bounds = rect.fits_within(self.side());
        if self.reject_overflow && !in_bounds {
            return PlacementOutcome::OutOfBounds;
        }
        if !self.index.test_and_insert(rect, sprite) {
            return PlacementOutcome::Rejected;
        }
        if !in_bounds {
            return PlacementOutcome::AcceptedNotDrawn;
        }
        if let Some(record) = self.index.records().last() {
            blit_into(&mut self.image, rect.x, rect.y, record.sprite());
        }
        PlacementOutcome::Drawn
    }

    /// Overwrites canvas pixels with `sprite` at `(x, y)`, clipped to the
    /// canvas. Padding outside the sprite's coverage leaves the canvas as is.
    pub fn blit(&mut self, x: u32, y: u32, sprite: &Sprite) {
        blit_into(&mut self.image, x, y, sprite);
    }

    /// Zero-fills the buffer and clears the index.
    pub fn reset(&mut self) {
        self.image.fill(0);
        self.index.clear();
    }

    /// Hands the buffer to `exporter` as output number `index`.
    ///
    /// Returns the destination identifier the exporter reports.
    pub fn export(
        &self,
        index: usize,
        exporter: &mut dyn CanvasExporter,
    ) -> Result<String, ScatterError> {
        exporter.export(index, &self.image)
    }
}

fn blit_into(image: &mut GrayImage, x: u32, y: u32, sprite: &Sprite) {
    if sprite.coverage().is_none() {
        imageops::replace(image, sprite.image(), i64::from(x), i64::from(y));
        return;
    }
    let (width, height) = image.dimensions();
    for (sx, sy, pixel) in sprite.image().enumerate_pixels() {
        let (dx, dy) = (u64::from(x) + u64::from(sx), u64::from(y) + u64::from(sy));
        if dx >= u64::from(width) || dy >= u64::from(height) || !sprite.is_covered(sx, sy) {
            continue;
        }
        image.put_pixel(dx as u32, dy as u32, *pixel);
    }
}
