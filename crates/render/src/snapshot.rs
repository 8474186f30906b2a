//! PNG snapshot writing for a rendered [`Raster`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! in-memory raster can depend on this crate without pulling in the `image`
//! crate.

use constellation_core::error::FieldError;
use std::path::Path;

use crate::raster::Raster;

/// Writes a raster as a PNG image.
///
/// Returns `FieldError::Io` on buffer-size mismatch or write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), FieldError> {
    let img = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.data().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_core::color::Srgb;
    use constellation_core::surface::DrawSurface;
    use glam::DVec2;

    #[test]
    fn write_png_round_trip() {
        let navy = Srgb {
            r: 0.04,
            g: 0.06,
            b: 0.13,
        };
        let mut raster = Raster::new(24, 16, navy).unwrap();
        raster.fill_circle(
            DVec2::new(12.0, 8.0),
            3.0,
            Srgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            },
            1.0,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&raster, &path).unwrap();

        // Verify the file exists and reads back pixel-identical.
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 16);
        assert_eq!(img.as_raw().as_slice(), raster.data());
    }

    #[test]
    fn write_png_to_invalid_path_reports_io_error() {
        let raster = Raster::new(8, 8, Srgb { r: 0.0, g: 0.0, b: 0.0 }).unwrap();
        let result = write_png(&raster, Path::new("/nonexistent-dir/frame.png"));
        assert!(matches!(result, Err(FieldError::Io(_))));
    }
}
