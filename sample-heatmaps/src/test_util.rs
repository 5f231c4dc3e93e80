//! Fixture images for tests.
//!
//! Fixtures are written on demand into a caller-provided directory, usually a
//! `tempfile::TempDir`.

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write `logo.png`, an RGB gradient whose bottom-right pixel is pure white.
///
/// The white pixel guarantees the normalized grayscale peaks at exactly 1.0.
pub fn write_fixture_logo(dir: &Path, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        if x + 1 == width && y + 1 == height {
            return Rgb([255, 255, 255]);
        }
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        let b = ((x + y) * 127 / (width + height).max(1)) as u8;
        Rgb([r, g, b])
    });

    let path = dir.join("logo.png");
    img.save(&path).expect("Failed to write fixture logo");
    path
}

/// Write `logo_rgba.png`, a half-transparent copy of a two-pixel image.
pub fn write_rgba_fixture(dir: &Path) -> PathBuf {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
    img.put_pixel(1, 0, Rgba([100, 0, 0, 128]));

    let path = dir.join("logo_rgba.png");
    img.save(&path).expect("Failed to write RGBA fixture");
    path
}

/// Write `gray.png`, a single-channel image the logo strategies must reject.
pub fn write_gray_fixture(dir: &Path) -> PathBuf {
    let img = GrayImage::from_pixel(4, 4, Luma([200]));

    let path = dir.join("gray.png");
    img.save(&path).expect("Failed to write gray fixture");
    path
}
