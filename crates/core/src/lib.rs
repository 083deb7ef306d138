#![deny(unsafe_code)]
//! Core of the shape-scatter sprite placement engine.
//!
//! Provides the `Sprite` buffer, `Rect` bounding boxes, the randomized
//! `GeometricTransform`, the first-fit `OverlapIndex`, the `CompositeCanvas`
//! that owns the output buffer, the per-shape `PlacementScheduler`, and the
//! `BatchDriver` that composes `N` canvases. File I/O lives behind the
//! `SpriteSource` and `CanvasExporter` traits.

pub mod batch;
pub mod composite;
pub mod config;
pub mod error;
pub mod overlap;
pub mod params;
pub mod prng;
pub mod rect;
pub mod scheduler;
pub mod shape;
pub mod source;
pub mod sprite;
pub mod transform;

#[cfg(test)]
mod testing;

pub use batch::{BatchDriver, BatchReport, ImageReport};
pub use composite::{CompositeCanvas, PlacementOutcome};
pub use config::{BatchConfig, PlacementParams};
pub use error::ScatterError;
pub use overlap::{OverlapIndex, PlacementRecord};
pub use prng::{RandomSource, Xorshift64};
pub use rect::Rect;
pub use scheduler::{attempt_budget, PlacementScheduler, ShapeReport};
pub use shape::{CropRect, ShapeKind, SpriteCatalog};
pub use source::{CanvasExporter, MemoryExporter, SpriteSource};
pub use sprite::Sprite;
pub use transform::{transform_with, GeometricTransform, Transformed};
