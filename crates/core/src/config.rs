//! Batch and placement configuration.
//!
//! A [`BatchConfig`] captures everything needed to rerun a batch: canvas
//! size, image count, PRNG seed, and the [`PlacementParams`] that shape
//! each attempt. Both serialize to JSON so a run can be recorded and replayed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ScatterError;
use crate::params::{param_f64, param_u32};

/// Side length every sprite is normalized to before transforming.
pub const DEFAULT_SPRITE_SIZE: u32 = 50;
pub const DEFAULT_SCALE_MIN: f64 = 0.75;
pub const DEFAULT_SCALE_MAX: f64 = 1.0;
/// Upper bound (exclusive) of the drawn rotation, in degrees.
pub const DEFAULT_ANGLE_MAX: f64 = 90.0;

/// Tunables for a single placement attempt.
///
/// [`Default`] reproduces the reference configuration: 50px sprites, scale
/// in [0.75, 1.0), angle in [0, 90) degrees. The attempt budget is always
/// shared between the shapes in [`ShapeKind::ALL`](crate::shape::ShapeKind::ALL).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    pub sprite_size: u32,
    pub scale_min: f64,
    pub scale_max: f64,
    pub angle_max: f64,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            sprite_size: DEFAULT_SPRITE_SIZE,
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
            angle_max: DEFAULT_ANGLE_MAX,
        }
    }
}

impl PlacementParams {
    /// Extracts parameters from a JSON object, falling back to defaults for
    /// missing or mistyped keys.
    pub fn from_json(params: &Value) -> Self {
        Self {
            sprite_size: param_u32(params, "sprite_size", DEFAULT_SPRITE_SIZE),
            scale_min: param_f64(params, "scale_min", DEFAULT_SCALE_MIN),
            scale_max: param_f64(params, "scale_max", DEFAULT_SCALE_MAX),
            angle_max: param_f64(params, "angle_max", DEFAULT_ANGLE_MAX),
        }
    }

    /// Checks that sizes are non-zero and the scale and angle ranges are usable.
    pub fn validate(&self) -> Result<(), ScatterError> {
        if self.sprite_size == 0 {
            return Err(ScatterError::InvalidParam("sprite_size must be > 0".into()));
        }
        if !self.scale_min.is_finite() || !self.scale_max.is_finite() || self.scale_min <= 0.0 {
            return Err(ScatterError::InvalidParam(format!(
                "scale range [{}, {}) must be finite and positive",
                self.scale_min, self.scale_max
            )));
        }
        if self.scale_min > self.scale_max {
            return Err(ScatterError::InvalidParam(format!(
                "scale_min {} exceeds scale_max {}",
                self.scale_min, self.scale_max
            )));
        }
        if !self.angle_max.is_finite() || self.angle_max < 0.0 {
            return Err(ScatterError::InvalidParam(format!(
                "angle_max {} must be finite and non-negative",
                self.angle_max
            )));
        }
        Ok(())
    }
}

/// Reproducible description of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub num_images: usize,
    pub seed: u64,
    #[serde(default)]
    pub placement: PlacementParams,
}

impl BatchConfig {
    /// Square canvas of `side` pixels with default placement parameters.
    pub fn new(side: u32, num_images: usize, seed: u64) -> Self {
        Self {
            canvas_width: side,
            canvas_height: side,
            num_images,
            seed,
            placement: PlacementParams::default(),
        }
    }

    /// Canvas side length. Only meaningful once [`validate`](Self::validate) passed.
    pub fn side(&self) -> u32 {
        self.canvas_width
    }

    /// Validates canvas shape, placement parameters, and that the normalized
    /// sprite fits inside the canvas.
    pub fn validate(&self) -> Result<(), ScatterError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ScatterError::InvalidDimensions);
        }
        if self.canvas_width != self.canvas_height {
            return Err(ScatterError::NonSquareCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        self.placement.validate()?;
        if self.placement.sprite_size > self.canvas_width {
            return Err(ScatterError::SpriteExceedsCanvas {
                sprite: self.placement.sprite_size,
                canvas: self.canvas_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_uses_reference_placement() {
        let c = BatchConfig::new(1024, 3, 42);
        assert_eq!(c.side(), 1024);
        assert_eq!(c.num_images, 3);
        assert_eq!(c.placement.sprite_size, 50);
    }

    #[test]
    fn validate_accepts_reference_config() {
        assert!(BatchConfig::new(1024, 1, 1).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_side() {
        assert!(matches!(
            BatchConfig::new(0, 1, 1).validate(),
            Err(ScatterError::InvalidDimensions)
        ));
    }

    #[test]
    fn validate_rejects_non_square() {
        let mut c = BatchConfig::new(1024, 1, 1);
        c.canvas_height = 512;
        assert!(matches!(
            c.validate(),
            Err(ScatterError::NonSquareCanvas {
                width: 1024,
                height: 512
            })
        ));
    }

    #[test]
    fn validate_rejects_sprite_larger_than_canvas() {
        let c = BatchConfig::new(40, 1, 1);
        assert!(matches!(
            c.validate(),
            Err(ScatterError::SpriteExceedsCanvas {
                sprite: 50,
                canvas: 40
            })
        ));
    }

    #[test]
    fn validate_accepts_sprite_equal_to_canvas() {
        assert!(BatchConfig::new(50, 1, 1).validate().is_ok());
    }

    #[test]
    fn placement_from_json_overrides_and_defaults() {
        let p = PlacementParams::from_json(&json!({
            "sprite_size": 32,
            "angle_max": 45,
            "scale_min": "oops"
        }));
        assert_eq!(p.sprite_size, 32);
        assert!((p.angle_max - 45.0).abs() < f64::EPSILON);
        assert!((p.scale_min - DEFAULT_SCALE_MIN).abs() < f64::EPSILON);
    }

    #[test]
    fn placement_from_json_ignores_unknown_keys() {
        let p = PlacementParams::from_json(&json!({
            "shape_types": 1,
            "reject_overflow": true
        }));
        assert_eq!(p, PlacementParams::default());
    }

    #[test]
    fn placement_validate_rejects_inverted_scale() {
        let p = PlacementParams {
            scale_min: 0.9,
            scale_max: 0.8,
            ..PlacementParams::default()
        };
        assert!(matches!(p.validate(), Err(ScatterError::InvalidParam(_))));
    }

    #[test]
    fn placement_validate_rejects_zero_scale() {
        let p = PlacementParams {
            scale_min: 0.0,
            ..PlacementParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn placement_validate_rejects_nan_angle() {
        let p = PlacementParams {
            angle_max: f64::NAN,
            ..PlacementParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn json_round_trip() {
        let mut c = BatchConfig::new(256, 7, 99);
        c.placement.angle_max = 30.0;
        let json = serde_json::to_string_pretty(&c).unwrap();
        let restored: BatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, restored);
    }

    #[test]
    fn missing_placement_deserializes_to_default() {
        let c: BatchConfig = serde_json::from_value(json!({
            "canvas_width": 128,
            "canvas_height": 128,
            "num_images": 2,
            "seed": 5
        }))
        .unwrap();
        assert_eq!(c.placement, PlacementParams::default());
    }
}
