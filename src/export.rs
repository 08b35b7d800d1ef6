//! Grayscale PNG export of sampled fields
//!
//! Image x follows row index `i` and image y follows column index `j`.
//! Write failures are reported to the caller; `export_pair` only logs them
//! so the numerical verdict is never lost to a bad output path.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::ImageEncoder;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::noise::SampledField;

pub const NORMAL_IMAGE: &str = "normal_noise.png";
pub const FAR_IMAGE: &str = "far_noise.png";

/// Map a noise value from [-1, 1] onto an 8-bit intensity
#[inline]
pub fn intensity(value: f64) -> u8 {
    let unit = (value + 1.0) / 2.0;
    (unit * 255.0).clamp(0.0, 255.0).round() as u8
}

/// Packed RGB8 pixels, three equal channels per cell
pub fn rgb_pixels(field: &SampledField) -> Vec<u8> {
    let n = field.size();
    let mut pixels = vec![0u8; n * n * 3];
    for i in 0..n {
        for j in 0..n {
            let g = intensity(field.get(i, j));
            let idx = (j * n + i) * 3;
            pixels[idx..idx + 3].copy_from_slice(&[g, g, g]);
        }
    }
    pixels
}

fn write_err(path: &Path, reason: impl ToString) -> Error {
    Error::ImageWrite { path: path.to_path_buf(), reason: reason.to_string() }
}

/// Write `field` as an RGB PNG at `path`
pub fn save_field_png(field: &SampledField, path: &Path) -> Result<()> {
    let side = u32::try_from(field.size()).map_err(|_| write_err(path, "field too large"))?;
    if side == 0 {
        return Err(write_err(path, "empty field"));
    }

    let file = File::create(path).map_err(|e| write_err(path, e))?;
    image::codecs::png::PngEncoder::new(BufWriter::new(file))
        .write_image(&rgb_pixels(field), side, side, image::ExtendedColorType::Rgb8)
        .map_err(|e| write_err(path, e))?;

    info!(path = %path.display(), "image saved");
    Ok(())
}

/// Save both windows into `dir`; returns the paths that were written
pub fn export_pair(normal: &SampledField, far: &SampledField, dir: &Path) -> Vec<PathBuf> {
    let mut written = Vec::with_capacity(2);
    for (field, name) in [(normal, NORMAL_IMAGE), (far, FAR_IMAGE)] {
        let path = dir.join(name);
        match save_field_png(field, &path) {
            Ok(()) => written.push(path),
            Err(e) => warn!("{e}"),
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{FieldSampler, NoiseField};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("perlin-precision-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_intensity_mapping() {
        assert_eq!(intensity(-1.0), 0);
        assert_eq!(intensity(1.0), 255);
        assert_eq!(intensity(0.0), 128); // 127.5 rounds up
        assert_eq!(intensity(-3.0), 0);
        assert_eq!(intensity(1.2), 255);
    }

    #[test]
    fn test_pixel_orientation() {
        // Cell (1, 0) is bright, everything else dark
        let field = SampledField::from_values(2, vec![-1.0, -1.0, 1.0, -1.0]).unwrap();
        let px = rgb_pixels(&field);
        // Pixel (x=1, y=0)
        assert_eq!(&px[3..6], &[255, 255, 255]);
        // Pixel (x=0, y=1)
        assert_eq!(&px[6..9], &[0, 0, 0]);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = scratch_dir("save");
        let field = FieldSampler::new(12, 4.0).sample(&NoiseField::from_seed(1), 0.0);
        let path = dir.join("field.png");

        save_field_png(&field, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (12, 12));
        let g = intensity(field.get(7, 2));
        assert_eq!(img.get_pixel(7, 2).0, [g, g, g]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unwritable_path_reported() {
        let field = SampledField::filled(4, 0.0);
        let path = Path::new("/nonexistent-dir/for/sure/field.png");
        assert!(matches!(save_field_png(&field, path), Err(Error::ImageWrite { .. })));
    }

    #[test]
    fn test_export_pair_continues_after_failure() {
        let field = SampledField::filled(4, 0.0);
        let written = export_pair(&field, &field, Path::new("/nonexistent-dir/for/sure"));
        assert!(written.is_empty());

        let dir = scratch_dir("pair");
        let written = export_pair(&field, &field, &dir);
        assert_eq!(written, vec![dir.join(NORMAL_IMAGE), dir.join(FAR_IMAGE)]);
        std::fs::remove_dir_all(&dir).ok();
    }
}
