//! Immutable grayscale sprite buffers.
//!
//! A [`Sprite`] wraps an 8-bit luma image with non-zero width and height.
//! Every operation that changes the geometry (resize, rotate) returns a new
//! sprite; the source is never mutated. A rotated sprite also carries a
//! coverage mask so the padding around the content is not drawn.

use glam::{DMat2, DVec2};
use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::error::ScatterError;

/// Guards the expanded rotation bounds against float noise pushing an
/// exact integer extent up by one pixel.
const EXTENT_EPSILON: f64 = 1e-6;

/// A grayscale pixel buffer with non-zero dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: GrayImage,
    /// Non-zero where `image` holds content. `None` means fully covered.
    coverage: Option<GrayImage>,
}

impl Sprite {
    /// Creates a zero-filled sprite.
    ///
    /// Returns `ScatterError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ScatterError> {
        Self::filled(width, height, 0)
    }

    /// Creates a sprite where every pixel has the given luma value.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, ScatterError> {
        if width == 0 || height == 0 {
            return Err(ScatterError::InvalidDimensions);
        }
        Ok(Self {
            image: GrayImage::from_pixel(width, height, image::Luma([value])),
            coverage: None,
        })
    }

    /// Creates a sprite from row-major luma bytes, validating
    /// `data.len() == width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ScatterError> {
        if width == 0 || height == 0 {
            return Err(ScatterError::InvalidDimensions);
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(ScatterError::InvalidDimensions)?;
        let got = data.len();
        GrayImage::from_raw(width, height, data)
            .filter(|_| got == expected)
            .map(|image| Self {
                image,
                coverage: None,
            })
            .ok_or(ScatterError::DimensionMismatch {
                width,
                height,
                expected,
                got,
            })
    }

    /// Wraps an existing luma image.
    pub fn from_image(image: GrayImage) -> Result<Self, ScatterError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ScatterError::InvalidDimensions);
        }
        Ok(Self {
            image,
            coverage: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Row-major luma bytes.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Luma value at `(x, y)`, or `None` outside the sprite.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.image.get_pixel_checked(x, y).map(|p| p.0[0])
    }

    /// Coverage mask, present only when some pixels are padding.
    pub fn coverage(&self) -> Option<&GrayImage> {
        self.coverage.as_ref()
    }

    /// Whether `(x, y)` holds content rather than padding. False outside
    /// the sprite.
    pub fn is_covered(&self, x: u32, y: u32) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        self.coverage
            .as_ref()
            .map_or(true, |mask| mask.get_pixel(x, y).0[0] != 0)
    }

    /// Resamples to `width × height` with a bicubic (Catmull-Rom) filter.
    ///
    /// Returns `ScatterError::Transform` if either target dimension is zero.
    pub fn resized(&self, width: u32, height: u32) -> Result<Sprite, ScatterError> {
        if width == 0 || height == 0 {
            return Err(ScatterError::Transform(format!(
                "cannot resize {}x{} sprite to {width}x{height}",
                self.width(),
                self.height()
            )));
        }
        if width == self.width() && height == self.height() {
            return Ok(self.clone());
        }
        Ok(Sprite {
            image: imageops::resize(&self.image, width, height, FilterType::CatmullRom),
            coverage: None,
        })
    }

    /// Rotates counter-clockwise by `degrees` around the centre.
    ///
    /// The output grows to the rotated bounding box so no content is
    /// clipped. Uncovered padding is 0 and marked uncovered in the
    /// [`coverage`](Self::coverage) mask. Sampling is nearest-neighbour.
    pub fn rotated(&self, degrees: f64) -> Sprite {
        let (w, h) = (f64::from(self.width()), f64::from(self.height()));
        let (sin, cos) = degrees.to_radians().sin_cos();
        let out_w = expanded_extent(w * cos.abs() + h * sin.abs());
        let out_h = expanded_extent(w * sin.abs() + h * cos.abs());

        // Inverse map: each output pixel centre is rotated back into source space.
        let inverse = DMat2::from_angle(degrees.to_radians());
        let src_centre = DVec2::new(w / 2.0, h / 2.0);
        let dst_centre = DVec2::new(f64::from(out_w) / 2.0, f64::from(out_h) / 2.0);

        let mut rotated = GrayImage::new(out_w, out_h);
        let mut coverage = GrayImage::new(out_w, out_h);
        let mut padded = false;
        for (x, y, pixel) in rotated.enumerate_pixels_mut() {
            let d = DVec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5) - dst_centre;
            let s = inverse * d + src_centre;
            if s.x < 0.0 || s.y < 0.0 || s.x >= w || s.y >= h {
                padded = true;
                continue;
            }
            *pixel = *self.image.get_pixel(s.x as u32, s.y as u32);
            coverage.put_pixel(x, y, image::Luma([u8::MAX]));
        }
        Sprite {
            image: rotated,
            coverage: padded.then_some(coverage),
        }
    }
}

fn expanded_extent(extent: f64) -> u32 {
    ((extent - EXTENT_EPSILON).ceil() as u32).max(1)
}
