//! An RGBA8 pixel buffer implementing the `DrawSurface` seam.
//!
//! The surface is opaque: `clear` restores a solid background color and all
//! drawing composites source-over onto it, so the alpha byte of every pixel
//! stays 255. Circles get a half-pixel soft edge; sub-pixel line widths are
//! realized by scaling the stroke's coverage.

use constellation_core::color::Srgb;
use constellation_core::error::FieldError;
use constellation_core::surface::DrawSurface;
use glam::DVec2;

/// A CPU raster target with row-major RGBA8 storage.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    background: Srgb,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a raster filled with `background`.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32, background: Srgb) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let mut raster = Self {
            width,
            height,
            background,
            data: vec![0; width as usize * height as usize * 4],
        };
        raster.clear();
        Ok(raster)
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only access to the row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGBA bytes of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of range");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Source-over blend of `color` at coverage `alpha` onto one pixel.
    ///
    /// Out-of-range coordinates and non-positive coverage are ignored.
    fn blend(&mut self, x: i64, y: i64, color: Srgb, alpha: f64) {
        if alpha <= 0.0 || x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height)
        {
            return;
        }
        let a = alpha.min(1.0);
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        for (offset, src) in [color.r, color.g, color.b].into_iter().enumerate() {
            let dst = f64::from(self.data[idx + offset]) / 255.0;
            let out = dst + (src.clamp(0.0, 1.0) - dst) * a;
            self.data[idx + offset] = (out * 255.0).round() as u8;
        }
        self.data[idx + 3] = 255;
    }
}

impl DrawSurface for Raster {
    fn clear(&mut self) {
        let r = (self.background.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.background.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.background.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Srgb, alpha: f64) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        let x_min = (center.x - radius - 1.0).floor() as i64;
        let x_max = (center.x + radius + 1.0).ceil() as i64;
        let y_min = (center.y - radius - 1.0).floor() as i64;
        let y_max = (center.y + radius + 1.0).ceil() as i64;
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let d = center.distance(DVec2::new(x as f64, y as f64));
                // Half-pixel soft edge.
                let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, alpha * coverage);
            }
        }
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Srgb, alpha: f64) {
        if width <= 0.0 || alpha <= 0.0 {
            return;
        }
        // Sub-pixel widths thin the stroke by scaling coverage; widths above
        // one pixel are drawn one pixel wide.
        let coverage = alpha * width.min(1.0);
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil() as usize;
        let mut last = None;
        for i in 0..=steps {
            let t = if steps == 0 {
                0.0
            } else {
                i as f64 / steps as f64
            };
            let p = from + delta * t;
            let cell = (p.x.round() as i64, p.y.round() as i64);
            if last != Some(cell) {
                self.blend(cell.0, cell.1, color, coverage);
                last = Some(cell);
            }
        }
    }
}
