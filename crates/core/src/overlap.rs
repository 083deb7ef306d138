//! First-fit collision index over accepted placements.
//!
//! The index holds the placements of the current canvas only. A candidate
//! is accepted when its bounding box overlaps none of the recorded boxes;
//! the first overlapping record short-circuits the test.

use crate::rect::Rect;
use crate::sprite::Sprite;

/// One accepted sprite instance: its bounding box and the pixels drawn for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    rect: Rect,
    sprite: Sprite,
}

impl PlacementRecord {
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

/// Ordered collection of placement records with no pairwise overlap.
#[derive(Debug, Clone, Default)]
pub struct OverlapIndex {
    records: Vec<PlacementRecord>,
}

impl OverlapIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `rect` overlaps any recorded placement.
    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.records.iter().any(|r| r.rect.overlaps(rect))
    }

    /// Inserts the candidate if it overlaps nothing already recorded.
    ///
    /// Returns `false` without mutating the index on overlap.
    pub fn test_and_insert(&mut self, rect: Rect, sprite: Sprite) -> bool {
        if self.overlaps(&rect) {
            return false;
        }
        self.records.push(PlacementRecord { rect, sprite });
        true
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in acceptance order.
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }
}
