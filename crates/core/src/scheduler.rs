//! Bounded randomized placement of one shape on one canvas.
//!
//! The scheduler makes a fixed number of independent attempts (the attempt
//! budget `K`). Each attempt draws a position, transforms the normalized
//! sprite, and offers the result to the canvas. Rejected attempts are not
//! retried, so `K` bounds placements from above but guarantees none.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::composite::{CompositeCanvas, PlacementOutcome};
use crate::config::PlacementParams;
use crate::error::ScatterError;
use crate::prng::RandomSource;
use crate::shape::ShapeKind;
use crate::sprite::Sprite;
use crate::transform::GeometricTransform;

/// Attempt budget `K` for one shape type on one canvas.
///
/// `slots = floor(canvas_dim / sprite_dim) - 1` sprites fit along each axis
/// regardless of augmentation; the `slots²` grid is shared evenly between
/// the shape types. `(1024, 50, 4)` gives `19² / 4 = 90`.
///
/// Returns 0 when the sprite does not fit or either divisor is zero.
pub fn attempt_budget(canvas_dim: u32, sprite_dim: u32, shape_types: usize) -> usize {
    if sprite_dim == 0 || shape_types == 0 {
        return 0;
    }
    let slots = (canvas_dim / sprite_dim).saturating_sub(1) as usize;
    slots * slots / shape_types
}

/// Tally of one shape's attempts on one canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeReport {
    pub shape: ShapeKind,
    pub attempts: usize,
    /// Accepted into the overlap index (drawn or not).
    pub placed: usize,
    pub drawn: usize,
    pub rejected: usize,
    pub out_of_bounds: usize,
    /// Accepted but not drawn because the box crossed the canvas edge.
    pub skipped_blits: usize,
    pub transform_failures: usize,
}

impl ShapeReport {
    fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            attempts: 0,
            placed: 0,
            drawn: 0,
            rejected: 0,
            out_of_bounds: 0,
            skipped_blits: 0,
            transform_failures: 0,
        }
    }

    fn record(&mut self, outcome: PlacementOutcome) {
        match outcome {
            PlacementOutcome::Rejected => self.rejected += 1,
            PlacementOutcome::OutOfBounds => self.out_of_bounds += 1,
            PlacementOutcome::Drawn => self.drawn += 1,
            PlacementOutcome::AcceptedNotDrawn => self.skipped_blits += 1,
        }
        if outcome.is_accepted() {
            self.placed += 1;
        }
    }
}

/// Runs the attempt budget for one shape at a time.
#[derive(Debug, Clone, Copy)]
pub struct PlacementScheduler {
    params: PlacementParams,
    transform: GeometricTransform,
}

impl PlacementScheduler {
    pub fn new(params: PlacementParams) -> Self {
        Self {
            params,
            transform: GeometricTransform::new(&params),
        }
    }

    pub fn params(&self) -> &PlacementParams {
        &self.params
    }

    /// Attempt budget on a canvas of the given side, shared between every
    /// shape in [`ShapeKind::ALL`].
    pub fn budget(&self, canvas_side: u32) -> usize {
        attempt_budget(canvas_side, self.params.sprite_size, ShapeKind::ALL.len())
    }

    /// Makes up to `K` placement attempts for `shape` on `canvas`.
    ///
    /// The sprite is normalized to `sprite_size × sprite_size` once, and
    /// positions are drawn from `[0, side - sprite_size]` on both axes.
    /// Transform failures abandon the attempt and are counted, not returned.
    ///
    /// Returns `ScatterError::SpriteExceedsCanvas` if the normalized sprite
    /// is larger than the canvas.
    pub fn schedule(
        &self,
        shape: ShapeKind,
        sprite: &Sprite,
        canvas: &mut CompositeCanvas,
        rng: &mut dyn RandomSource,
    ) -> Result<ShapeReport, ScatterError> {
        let side = canvas.side();
        let size = self.params.sprite_size;
        let max_offset = side
            .checked_sub(size)
            .ok_or(ScatterError::SpriteExceedsCanvas {
                sprite: size,
                canvas: side,
            })?;
        let normalized = sprite.resized(size, size)?;

        let budget = self.budget(side);
        let mut report = ShapeReport::new(shape);
        for attempt in 0..budget {
            report.attempts += 1;
            let x = rng.next_inclusive(max_offset);
            let y = rng.next_inclusive(max_offset);

            let transformed = match self.transform.apply(&normalized, rng) {
                Ok(t) => t,
                Err(e) => {
                    warn!(shape = shape.name(), attempt, error = %e, "transform failed, skipping attempt");
                    report.transform_failures += 1;
                    continue;
                }
            };
            let rect = transformed.rect_at(x, y);
            let outcome = canvas.place(rect, transformed.into_sprite());
            debug!(shape = shape.name(), attempt, x, y, w = rect.width, h = rect.height, ?outcome);
            report.record(outcome);
        }

        info!(
            shape = shape.name(),
            placed = report.placed,
            attempts = report.attempts,
            index_len = canvas.index().len(),
            "shape scheduled"
        );
        Ok(report)
    }
}
