#![deny(unsafe_code)]
//! Core types and seams for the constellation particle-field system.
//!
//! Provides the `DrawSurface` output seam (with a recording implementation
//! for tests), color types (`Srgb`, `Hsl`), the `SplitMix64` PRNG, the
//! serializable `Scene` replay spec, and JSON parameter helpers.

pub mod color;
pub mod error;
pub mod params;
pub mod prng;
pub mod scene;
pub mod surface;

pub use color::{hsl_to_srgb, Hsl, Srgb};
pub use error::FieldError;
pub use prng::SplitMix64;
pub use scene::Scene;
pub use surface::{DrawOp, DrawSurface, Recorder};
