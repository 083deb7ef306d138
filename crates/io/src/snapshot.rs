//! PNG persistence of finished canvases.

use image::GrayImage;
use shape_scatter_core::{CanvasExporter, ScatterError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes a luma canvas as an 8-bit grayscale PNG.
///
/// Returns `ScatterError::Export` on write failure.
pub fn write_png(canvas: &GrayImage, path: &Path) -> Result<(), ScatterError> {
    canvas.save(path).map_err(|e| ScatterError::Export {
        destination: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Writes canvas `i` to `<dir>/Output_Image_<i>.png`.
#[derive(Debug, Clone)]
pub struct PngExporter {
    dir: PathBuf,
}

impl PngExporter {
    /// Creates the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ScatterError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| ScatterError::Export {
            destination: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path that output number `index` is written to.
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("Output_Image_{index}.png"))
    }
}

impl CanvasExporter for PngExporter {
    fn export(&mut self, index: usize, canvas: &GrayImage) -> Result<String, ScatterError> {
        let path = self.path_for(index);
        write_png(canvas, &path)?;
        debug!(path = %path.display(), "wrote canvas");
        Ok(path.display().to_string())
    }
}
