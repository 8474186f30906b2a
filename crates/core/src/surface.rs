//! The `DrawSurface` output seam of the particle field.
//!
//! The field emits three primitives per frame — clear, filled circle,
//! stroked line — and makes no assumption about how they reach the screen.
//! The trait is object-safe so the field can hold `&mut dyn DrawSurface`
//! for runtime switching between a real rasterizer and the test recorder.

use crate::color::Srgb;
use glam::DVec2;

/// A write-only 2D raster drawing collaborator.
///
/// Implementations decide what "clear" restores (a background color, full
/// transparency, ...) and how sub-pixel line widths are realized. Alpha is
/// in [0, 1] and composites source-over.
pub trait DrawSurface {
    /// Clears the full surface.
    fn clear(&mut self);

    /// Draws a filled circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Srgb, alpha: f64);

    /// Draws a stroked line from `from` to `to` with the given stroke width.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Srgb, alpha: f64);
}

/// One recorded drawing command, for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: DVec2,
        radius: f64,
        color: Srgb,
        alpha: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Srgb,
        alpha: f64,
    },
}

/// A `DrawSurface` that records every command instead of rasterizing.
///
/// Lets tests assert on the exact command stream a frame produces without
/// a rendering environment.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in issue order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of recorded circle commands.
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    /// Number of recorded line commands.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    /// Discards all recorded commands.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for Recorder {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Srgb, alpha: f64) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Srgb, alpha: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
            alpha,
        });
    }
}
