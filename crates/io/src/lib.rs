#![deny(unsafe_code)]
//! Filesystem collaborators for the shape-scatter core.
//!
//! [`DirectorySource`] reads the four canonical shape images from an input
//! directory, crops them, and converts them to luma. [`snapshot::PngExporter`]
//! writes finished canvases as PNG files. The luma conversion itself lives
//! in [`pixel`] so it can be tested without touching disk.

pub mod pixel;
pub mod snapshot;

use image::imageops;
use shape_scatter_core::{ScatterError, ShapeKind, Sprite, SpriteSource};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use snapshot::{write_png, PngExporter};

use crate::pixel::rgba_to_luma;

/// Loads shape sprites from `<root>/<ShapeKind::file_name()>`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the source image for `shape` is expected.
    pub fn path_for(&self, shape: ShapeKind) -> PathBuf {
        self.root.join(shape.file_name())
    }
}

impl SpriteSource for DirectorySource {
    /// Opens the image, applies the shape's crop box, and converts to luma.
    ///
    /// Returns `ScatterError::SourceLoad` if the file cannot be decoded or
    /// the crop box does not lie inside the image.
    fn load(&self, shape: ShapeKind) -> Result<Sprite, ScatterError> {
        let path = self.path_for(shape);
        let load_err = |reason: String| ScatterError::SourceLoad {
            path: path.display().to_string(),
            reason,
        };

        let rgba = image::open(&path)
            .map_err(|e| load_err(e.to_string()))?
            .to_rgba8();
        let crop = shape.crop();
        if crop.width() == 0
            || crop.height() == 0
            || crop.right > rgba.width()
            || crop.bottom > rgba.height()
        {
            return Err(load_err(format!(
                "crop box ({}, {}, {}, {}) does not fit a {}x{} image",
                crop.left,
                crop.top,
                crop.right,
                crop.bottom,
                rgba.width(),
                rgba.height()
            )));
        }

        let cropped =
            imageops::crop_imm(&rgba, crop.left, crop.top, crop.width(), crop.height()).to_image();
        debug!(shape = shape.name(), w = cropped.width(), h = cropped.height(), "loaded sprite");
        Sprite::from_image(rgba_to_luma(&cropped)).map_err(|e| load_err(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use shape_scatter_core::SpriteCatalog;

    fn write_source(dir: &Path, shape: ShapeKind, width: u32, height: u32) {
        let crop = shape.crop();
        let img = RgbaImage::from_fn(width, height, |x, y| {
            if x == crop.left && y == crop.top {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        img.save(dir.join(shape.file_name())).unwrap();
    }

    fn write_all(dir: &Path) {
        for shape in ShapeKind::ALL {
            let crop = shape.crop();
            write_source(dir, shape, crop.right + 5, crop.bottom + 5);
        }
    }

    #[test]
    fn load_crops_to_shape_region() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path(), ShapeKind::Cube, 240, 200);
        let sprite = DirectorySource::new(dir.path())
            .load(ShapeKind::Cube)
            .unwrap();
        assert_eq!((sprite.width(), sprite.height()), (170, 177));
        // the crop origin marker lands at (0, 0)
        assert_eq!(sprite.get(0, 0), Some(255));
        assert_eq!(sprite.get(1, 0), Some(0));
    }

    #[test]
    fn missing_file_is_source_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = DirectorySource::new(dir.path()).load(ShapeKind::Prism);
        match result {
            Err(ScatterError::SourceLoad { path, .. }) => assert!(path.ends_with("prism.png")),
            other => panic!("expected SourceLoad, got {other:?}"),
        }
    }

    #[test]
    fn image_smaller_than_crop_is_source_load_error() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path(), ShapeKind::Rectangle, 60, 60);
        let result = DirectorySource::new(dir.path()).load(ShapeKind::Rectangle);
        assert!(matches!(result, Err(ScatterError::SourceLoad { .. })));
    }

    #[test]
    fn catalog_loads_all_four_shapes() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        let catalog = SpriteCatalog::load(&DirectorySource::new(dir.path())).unwrap();
        for (shape, sprite) in catalog.iter() {
            let crop = shape.crop();
            assert_eq!((sprite.width(), sprite.height()), (crop.width(), crop.height()));
        }
    }

    #[test]
    fn end_to_end_batch_writes_pngs() {
        use shape_scatter_core::{BatchConfig, BatchDriver, Xorshift64};

        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_all(input.path());

        let mut driver =
            BatchDriver::from_source(BatchConfig::new(256, 2, 4), &DirectorySource::new(input.path()))
                .unwrap();
        let mut exporter = PngExporter::new(output.path()).unwrap();
        let report = driver.run(&mut exporter, &mut Xorshift64::new(4)).unwrap();

        assert_eq!(report.exported(), 2);
        for i in 0..2 {
            let img = image::open(exporter.path_for(i)).unwrap().to_luma8();
            assert_eq!((img.width(), img.height()), (256, 256));
        }
    }
}
