#![deny(unsafe_code)]
//! CPU-side rendering for the constellation particle field.
//!
//! [`Raster`] implements the `DrawSurface` seam on an RGBA8 pixel buffer,
//! and [`render_scene`] runs a full [`Scene`] — build field, advance
//! frames, draw — into one. The CLI depends on this crate so the
//! scene-running logic lives in exactly one place.

pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use constellation_core::color::Srgb;
use constellation_core::error::FieldError;
use constellation_core::scene::Scene;
use constellation_field::Field;
use glam::DVec2;

pub use raster::Raster;

/// Runs a scene to completion and returns the final frame.
///
/// Builds the field from the scene's seed and params, advances it
/// `scene.frames` times with the scene's fixed cursor, and draws the final
/// state onto a fresh raster. Every frame clears the surface, so only the
/// last draw is observable; intermediate draws are skipped.
///
/// A reduced-motion scene produces an untouched background-only raster.
pub fn render_scene(scene: &Scene, background: Srgb) -> Result<Raster, FieldError> {
    scene.validate()?;
    let mut field = Field::from_json(scene.width, scene.height, scene.seed, &scene.params)?;
    let mut raster = Raster::new(scene.width, scene.height, background)?;
    let cursor = DVec2::new(scene.cursor[0], scene.cursor[1]);
    for _ in 0..scene.frames {
        field.advance(cursor);
    }
    field.draw(&mut raster);
    Ok(raster)
}
