//! Seams to the collaborators that supply sprites and persist canvases.
//!
//! The core performs no file I/O itself; `shape-scatter-io` implements these
//! traits against the filesystem.

use image::GrayImage;

use crate::error::ScatterError;
use crate::shape::ShapeKind;
use crate::sprite::Sprite;

/// Supplies the pre-cropped sprite for each shape.
pub trait SpriteSource {
    fn load(&self, shape: ShapeKind) -> Result<Sprite, ScatterError>;
}

/// Persists finished canvases.
pub trait CanvasExporter {
    /// Persists `canvas` as output number `index` and returns the
    /// destination identifier (e.g. a file path).
    fn export(&mut self, index: usize, canvas: &GrayImage) -> Result<String, ScatterError>;
}

/// Keeps exported canvases in memory.
#[derive(Debug, Default)]
pub struct MemoryExporter {
    canvases: Vec<GrayImage>,
}

impl MemoryExporter {
    pub fn canvases(&self) -> &[GrayImage] {
        &self.canvases
    }
}

impl CanvasExporter for MemoryExporter {
    fn export(&mut self, index: usize, canvas: &GrayImage) -> Result<String, ScatterError> {
        self.canvases.push(canvas.clone());
        Ok(format!("memory:{index}"))
    }
}
