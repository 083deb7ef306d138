//! Axis-aligned bounding boxes in canvas coordinates.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle `(x, y, width, height)`.
///
/// Used purely as a bounding box; it says nothing about the pixels inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Far horizontal edge, `x + width`. Widened so it cannot overflow.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Far vertical edge, `y + height`.
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    /// Bounding-box intersection test.
    ///
    /// Two rectangles overlap unless one lies strictly left of, right of,
    /// above, or below the other. Far edges are compared inclusively, so
    /// rectangles that share an edge count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let separated = u64::from(self.x) > other.right()
            || self.right() < u64::from(other.x)
            || u64::from(self.y) > other.bottom()
            || self.bottom() < u64::from(other.y);
        !separated
    }

    /// Whether the rectangle lies fully inside a `side × side` canvas.
    pub fn fits_within(&self, side: u32) -> bool {
        self.right() <= u64::from(side) && self.bottom() <= u64::from(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_rects_overlap() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.overlaps(&r));
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn edge_sharing_rects_overlap() {
        // a spans x in [0, 10], b starts at 10
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn one_pixel_gap_does_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(11, 0, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn vertical_separation_does_not_overlap() {
        let a = Rect::new(5, 0, 10, 10);
        let b = Rect::new(5, 30, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn diagonal_neighbours_without_shared_span_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 10, 10);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn far_edges_do_not_overflow() {
        let r = Rect::new(u32::MAX, u32::MAX, u32::MAX, 1);
        assert_eq!(r.right(), 2 * u64::from(u32::MAX));
        assert!(!r.fits_within(u32::MAX));
    }

    #[test]
    fn fits_within_accepts_flush_edge() {
        assert!(Rect::new(974, 974, 50, 50).fits_within(1024));
        assert!(!Rect::new(975, 974, 50, 50).fits_within(1024));
    }
}
