//! Generation of a batch of output canvases.
//!
//! For each output image the driver resets the canvas (buffer and index
//! together), schedules every shape in [`ShapeKind::ALL`] order, and exports
//! the result. A failed export is recorded and the batch moves on.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::composite::CompositeCanvas;
use crate::config::BatchConfig;
use crate::error::ScatterError;
use crate::prng::RandomSource;
use crate::scheduler::{PlacementScheduler, ShapeReport};
use crate::shape::{ShapeKind, SpriteCatalog};
use crate::source::{CanvasExporter, SpriteSource};

/// Result of composing and exporting one canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageReport {
    pub index: usize,
    pub destination: Option<String>,
    pub shapes: Vec<ShapeReport>,
    pub export_error: Option<String>,
}

impl ImageReport {
    /// Placements accepted across all shapes.
    pub fn placed(&self) -> usize {
        self.shapes.iter().map(|s| s.placed).sum()
    }

    pub fn placed_for(&self, shape: ShapeKind) -> usize {
        self.shapes
            .iter()
            .filter(|s| s.shape == shape)
            .map(|s| s.placed)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub seed: u64,
    pub canvas_side: u32,
    pub images: Vec<ImageReport>,
}

impl BatchReport {
    /// Number of images that reached their destination.
    pub fn exported(&self) -> usize {
        self.images.iter().filter(|i| i.export_error.is_none()).count()
    }
}

pub struct BatchDriver {
    config: BatchConfig,
    catalog: SpriteCatalog,
    canvas: CompositeCanvas,
    scheduler: PlacementScheduler,
}

impl BatchDriver {
    /// Validates `config` and prepares an empty canvas.
    pub fn new(config: BatchConfig, catalog: SpriteCatalog) -> Result<Self, ScatterError> {
        config.validate()?;
        let canvas = CompositeCanvas::new(config.side())?;
        let scheduler = PlacementScheduler::new(config.placement);
        Ok(Self {
            config,
            catalog,
            canvas,
            scheduler,
        })
    }

    /// Loads the sprite catalog from `source` before anything else runs, so
    /// an unreadable source fails the batch with no output produced.
    pub fn from_source(
        config: BatchConfig,
        source: &dyn SpriteSource,
    ) -> Result<Self, ScatterError> {
        config.validate()?;
        let catalog = SpriteCatalog::load(source)?;
        Self::new(config, catalog)
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// The canvas of the most recently composed image.
    pub fn canvas(&self) -> &CompositeCanvas {
        &self.canvas
    }

    /// Clears the canvas buffer and its overlap index.
    pub fn reset(&mut self) {
        self.canvas.reset();
    }

    /// Composes and exports all configured images.
    pub fn run(
        &mut self,
        exporter: &mut dyn CanvasExporter,
        rng: &mut dyn RandomSource,
    ) -> Result<BatchReport, ScatterError> {
        info!(
            images = self.config.num_images,
            side = self.config.side(),
            seed = self.config.seed,
            budget = self.scheduler.budget(self.config.side()),
            "starting batch"
        );
        let mut images = Vec::with_capacity(self.config.num_images);
        for index in 0..self.config.num_images {
            images.push(self.run_image(index, &mut *exporter, &mut *rng)?);
        }
        Ok(BatchReport {
            seed: self.config.seed,
            canvas_side: self.config.side(),
            images,
        })
    }

    /// Resets the canvas, schedules every shape in order, and exports.
    ///
    /// Export failures are logged and returned inside the report.
    pub fn run_image(
        &mut self,
        index: usize,
        exporter: &mut dyn CanvasExporter,
        rng: &mut dyn RandomSource,
    ) -> Result<ImageReport, ScatterError> {
        self.canvas.reset();
        let mut shapes = Vec::with_capacity(ShapeKind::ALL.len());
        for (kind, sprite) in self.catalog.iter() {
            shapes.push(
                self.scheduler
                    .schedule(kind, sprite, &mut self.canvas, &mut *rng)?,
            );
        }

        let mut report = ImageReport {
            index,
            destination: None,
            shapes,
            export_error: None,
        };
        match self.canvas.export(index, exporter) {
            Ok(destination) => {
                info!(index, placed = report.placed(), %destination, "image exported");
                report.destination = Some(destination);
            }
            Err(e) => {
                error!(index, error = %e, "export failed, continuing with next image");
                report.export_error = Some(e.to_string());
            }
        }
        Ok(report)
    }
}
