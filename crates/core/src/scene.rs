//! Reproducible specification for a rendered particle field.
//!
//! A [`Scene`] captures everything needed to recreate a frame: canvas
//! dimensions, PRNG seed, frame count, fixed cursor position, and parameter
//! overrides.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a rendered particle field.
///
/// Two identical `Scene` values fed to the same binary produce
/// bit-identical output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub frames: usize,
    /// Cursor position held fixed for every frame.
    pub cursor: [f64; 2],
    /// Field parameter overrides, merged over the defaults.
    pub params: serde_json::Value,
}

impl Scene {
    /// Creates a new Scene with default params (`{}`), zero frames, and the
    /// cursor at the canvas center.
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            frames: 0,
            cursor: [width as f64 / 2.0, height as f64 / 2.0],
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates that the scene has non-zero dimensions.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_centers_cursor_and_defaults_params() {
        let s = Scene::new(800, 600, 42);
        assert_eq!(s.width, 800);
        assert_eq!(s.height, 600);
        assert_eq!(s.seed, 42);
        assert_eq!(s.frames, 0);
        assert_eq!(s.cursor, [400.0, 300.0]);
        assert_eq!(s.params, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let original = Scene::new(1024, 768, 8675309);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn json_round_trip_with_custom_params() {
        let mut s = Scene::new(256, 256, 99);
        s.params = serde_json::json!({
            "count": 80,
            "link_radius": 60.0,
            "reduced_motion": false
        });
        s.frames = 500;
        s.cursor = [10.0, 20.0];

        let json = serde_json::to_string_pretty(&s).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(s, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let s = Scene::new(128, 128, 1);
        let v: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert!(v.get("width").is_some());
        assert!(v.get("height").is_some());
        assert!(v.get("seed").is_some());
        assert!(v.get("frames").is_some());
        assert!(v.get("cursor").is_some());
        assert!(v.get("params").is_some());
    }

    #[test]
    fn validate_succeeds_for_valid_scene() {
        let s = Scene::new(800, 600, 42);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_fails_for_zero_width() {
        let s = Scene::new(0, 600, 42);
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_fails_for_zero_height() {
        let s = Scene::new(800, 0, 42);
        assert!(s.validate().is_err());
    }
}
