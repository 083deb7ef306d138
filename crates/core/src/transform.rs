//! Randomized scale, resize, and rotation of a sprite.
//!
//! The transform draws a scale and an angle, shrinks the sprite by an amount
//! coupled to the angle, then rotates it with an expanding canvas:
//!
//! 1. `scaled = floor(scale * original)` per axis
//! 2. `reduced_w = max(floor(scaled_w * cos(angle)), 1)`,
//!    `reduced_h = max(floor(scaled_h * sin(angle)), 1)`
//! 3. resize to `max(original - reduced, 1)` per axis (the *footprint*)
//! 4. rotate by `angle` degrees, growing the buffer so nothing is clipped
//!
//! In step 2 the drawn angle value is handed to `cos`/`sin` unchanged, i.e.
//! read as radians, while step 4 reads the same value as degrees.
//!
//! The footprint, not the rotated buffer, is the placement's bounding box.

use crate::config::PlacementParams;
use crate::error::ScatterError;
use crate::prng::RandomSource;
use crate::rect::Rect;
use crate::sprite::Sprite;

/// Output of a geometric transform.
#[derive(Debug, Clone)]
pub struct Transformed {
    footprint: (u32, u32),
    sprite: Sprite,
    scale: f64,
    angle: f64,
}

impl Transformed {
    /// Resized, un-rotated `(width, height)`.
    pub fn footprint(&self) -> (u32, u32) {
        self.footprint
    }

    /// The rotated pixels to draw.
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Drawn angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Bounding box of this placement anchored at `(x, y)`.
    pub fn rect_at(&self, x: u32, y: u32) -> Rect {
        Rect::new(x, y, self.footprint.0, self.footprint.1)
    }

    pub fn into_sprite(self) -> Sprite {
        self.sprite
    }
}

/// Draws transform parameters from configured uniform ranges.
#[derive(Debug, Clone, Copy)]
pub struct GeometricTransform {
    scale_min: f64,
    scale_max: f64,
    angle_max: f64,
}

impl Default for GeometricTransform {
    fn default() -> Self {
        Self::new(&PlacementParams::default())
    }
}

impl GeometricTransform {
    pub fn new(params: &PlacementParams) -> Self {
        Self {
            scale_min: params.scale_min,
            scale_max: params.scale_max,
            angle_max: params.angle_max,
        }
    }

    /// Draws `scale` then `angle` from `rng` and transforms `sprite`.
    ///
    /// Returns `ScatterError::Transform` when the computed dimensions are
    /// degenerate; the caller should abandon the attempt.
    pub fn apply(
        &self,
        sprite: &Sprite,
        rng: &mut dyn RandomSource,
    ) -> Result<Transformed, ScatterError> {
        let scale = rng.next_range(self.scale_min, self.scale_max);
        let angle = rng.next_range(0.0, self.angle_max);
        transform_with(sprite, scale, angle)
    }
}

/// Transforms `sprite` with fixed `scale` and `angle` (degrees).
pub fn transform_with(sprite: &Sprite, scale: f64, angle: f64) -> Result<Transformed, ScatterError> {
    if !scale.is_finite() || !angle.is_finite() {
        return Err(ScatterError::Transform(format!(
            "non-finite parameters: scale {scale}, angle {angle}"
        )));
    }
    let (w, h) = (f64::from(sprite.width()), f64::from(sprite.height()));
    let scaled_w = (scale * w).floor();
    let scaled_h = (scale * h).floor();

    let reduced_w = (scaled_w * angle.cos()).floor().max(1.0);
    let reduced_h = (scaled_h * angle.sin()).floor().max(1.0);

    let target_w = dimension((w - reduced_w).max(1.0))?;
    let target_h = dimension((h - reduced_h).max(1.0))?;

    let resized = sprite.resized(target_w, target_h)?;
    Ok(Transformed {
        footprint: (target_w, target_h),
        sprite: resized.rotated(angle),
        scale,
        angle,
    })
}

fn dimension(value: f64) -> Result<u32, ScatterError> {
    if value < 1.0 || value > f64::from(u32::MAX) {
        return Err(ScatterError::Transform(format!(
            "computed dimension {value} out of range"
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandom;

    fn square() -> Sprite {
        Sprite::filled(50, 50, 200).unwrap()
    }

    #[test]
    fn zero_angle_full_scale_collapses_width_to_one() {
        // scaled 50, reduced_w = 50 * cos(0) = 50, reduced_h = max(0, 1) = 1
        let t = transform_with(&square(), 1.0, 0.0).unwrap();
        assert_eq!(t.footprint(), (1, 49));
        assert_eq!((t.sprite().width(), t.sprite().height()), (1, 49));
    }

    #[test]
    fn minimum_scale_near_zero_angle() {
        // scaled 37, reduced_w 37, reduced_h 1
        let t = transform_with(&square(), 0.75, 1e-9).unwrap();
        assert_eq!(t.footprint(), (13, 49));
    }

    #[test]
    fn full_scale_near_right_angle_stays_positive() {
        let t = transform_with(&square(), 1.0, 89.99).unwrap();
        let (w, h) = t.footprint();
        assert!(w >= 1 && h >= 1, "footprint {w}x{h}");
        assert!(t.sprite().width() >= 1 && t.sprite().height() >= 1);
    }

    #[test]
    fn negative_trig_products_clamp_reduction_to_one() {
        // cos(3.0) < 0, sin(3.0) > 0 -> reduced_w clamps to 1
        let t = transform_with(&square(), 1.0, 3.0).unwrap();
        assert_eq!(t.footprint().0, 49);
    }

    #[test]
    fn rotated_buffer_covers_footprint() {
        let t = transform_with(&square(), 0.9, 45.0).unwrap();
        let (w, h) = t.footprint();
        assert!(t.sprite().width() >= w);
        assert!(t.sprite().height() >= h);
    }

    #[test]
    fn one_pixel_sprite_survives() {
        let t = transform_with(&Sprite::filled(1, 1, 9).unwrap(), 0.75, 60.0).unwrap();
        assert_eq!(t.footprint(), (1, 1));
    }

    #[test]
    fn non_finite_scale_is_transform_failure() {
        let result = transform_with(&square(), f64::NAN, 10.0);
        assert!(matches!(result, Err(ScatterError::Transform(_))));
    }

    #[test]
    fn apply_draws_scale_then_angle() {
        // unit draws: 0.0 -> scale 0.75, 0.5 -> angle 45
        let mut rng = ScriptedRandom::new(&[0.0, 0.5], &[]);
        let t = GeometricTransform::default().apply(&square(), &mut rng).unwrap();
        assert!((t.scale() - 0.75).abs() < 1e-12);
        assert!((t.angle() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn rect_at_anchors_footprint() {
        let t = transform_with(&square(), 1.0, 0.0).unwrap();
        assert_eq!(t.rect_at(10, 20), Rect::new(10, 20, 1, 49));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn footprint_is_positive_and_never_grows(
                w in 1u32..80,
                h in 1u32..80,
                scale in 0.75_f64..=1.0,
                angle in 0.0_f64..90.0,
            ) {
                let sprite = Sprite::filled(w, h, 1).unwrap();
                let t = transform_with(&sprite, scale, angle).unwrap();
                let (fw, fh) = t.footprint();
                prop_assert!(fw >= 1 && fh >= 1);
                prop_assert!(fw <= w && fh <= h, "{fw}x{fh} from {w}x{h}");
                prop_assert!(t.sprite().width() >= 1 && t.sprite().height() >= 1);
            }
        }
    }
}
