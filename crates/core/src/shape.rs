//! The four canonical shapes and their sprite catalog.

use serde::{Deserialize, Serialize};

use crate::error::ScatterError;
use crate::source::SpriteSource;
use crate::sprite::Sprite;

/// Crop box `(left, top, right, bottom)` with exclusive right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// One of the four canonical shapes.
///
/// [`ShapeKind::ALL`] is also the scheduling order: shapes earlier in the
/// list claim contested canvas regions first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Prism,
    Cube,
    Dodecahedron,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Prism,
        ShapeKind::Cube,
        ShapeKind::Dodecahedron,
        ShapeKind::Rectangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Prism => "prism",
            ShapeKind::Cube => "cube",
            ShapeKind::Dodecahedron => "dodecahedron",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    /// Source image file name inside the input directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ShapeKind::Prism => "prism.png",
            ShapeKind::Cube => "cube_shape.png",
            ShapeKind::Dodecahedron => "Pyramid_augmented_dodecahedron.png",
            ShapeKind::Rectangle => "Extended_Rectangle.png",
        }
    }

    /// Region of the source image holding the shape without padding.
    pub fn crop(self) -> CropRect {
        match self {
            ShapeKind::Prism => CropRect::new(15, 23, 335, 320),
            ShapeKind::Cube => CropRect::new(55, 1, 225, 178),
            ShapeKind::Dodecahedron => CropRect::new(30, 7, 710, 718),
            ShapeKind::Rectangle => CropRect::new(46, 32, 104, 227),
        }
    }
}

/// Exactly one sprite per [`ShapeKind`], in scheduling order.
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    sprites: [(ShapeKind, Sprite); 4],
}

impl SpriteCatalog {
    /// Loads every shape from `source`. The first failure aborts the load.
    pub fn load(source: &dyn SpriteSource) -> Result<Self, ScatterError> {
        let [a, b, c, d] = ShapeKind::ALL;
        Ok(Self {
            sprites: [
                (a, source.load(a)?),
                (b, source.load(b)?),
                (c, source.load(c)?),
                (d, source.load(d)?),
            ],
        })
    }

    /// Builds a catalog that uses the same sprite for every shape.
    pub fn uniform(sprite: Sprite) -> Self {
        Self {
            sprites: ShapeKind::ALL.map(|kind| (kind, sprite.clone())),
        }
    }

    pub fn get(&self, kind: ShapeKind) -> &Sprite {
        // discriminants follow ShapeKind::ALL
        &self.sprites[kind as usize].1
    }

    /// Shapes and sprites in scheduling order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeKind, &Sprite)> + '_ {
        self.sprites.iter().map(|(kind, sprite)| (*kind, sprite))
    }
}
