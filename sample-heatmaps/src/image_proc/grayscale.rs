//! Image-derived grayscale samples.
//!
//! The source image's first three channels are combined with a weighted sum,
//! normalized so the brightest pixel is 1.0, rounded, and then enlarged by
//! replicating every pixel into a `k x k` block.
//!
//! The default weighting is `0.299 R + 0.587 G + 0.144 B`. Those weights sum
//! to 1.03 rather than 1; they are kept because the existing sample files were
//! produced with them, and normalization by the maximum hides the scale anyway
//! for most images. Use [`LumaWeights::BT601`] for standard luma.

use crate::error::{Result, SampleError};
use crate::image_proc::rounding::{round_array, SAMPLE_DECIMALS};
use image::RgbImage;
use log::{debug, warn};
use ndarray::Array2;
use std::path::Path;

/// Per-channel weights for collapsing RGB into one intensity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaWeights {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl LumaWeights {
    /// Weighting used for the published logo samples (sums to 1.03)
    pub const SAMPLE_QUIRK: Self = Self {
        red: 0.299,
        green: 0.587,
        blue: 0.144,
    };

    /// ITU-R BT.601 luma
    pub const BT601: Self = Self {
        red: 0.299,
        green: 0.587,
        blue: 0.114,
    };

    /// Weighted intensity of one RGB pixel, in raw 0-255 units
    pub fn apply(&self, rgb: [u8; 3]) -> f64 {
        self.red * rgb[0] as f64 + self.green * rgb[1] as f64 + self.blue * rgb[2] as f64
    }
}

impl Default for LumaWeights {
    fn default() -> Self {
        Self::SAMPLE_QUIRK
    }
}

/// Load an image and keep its first three channels.
///
/// Alpha is dropped. Images with fewer than three channels are rejected.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| SampleError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let channels = img.color().channel_count();
    if channels < 3 {
        return Err(SampleError::UnsupportedImage {
            path: path.to_path_buf(),
            channels,
        });
    }

    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgb8())
}

/// Divide by the array maximum so the brightest cell becomes 1.0.
///
/// An array whose maximum is not positive comes back as all zeros.
pub fn normalize_by_max(arr: Array2<f64>) -> Array2<f64> {
    let max = arr.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        warn!("Source image has no brightness, grayscale is all zeros");
        return Array2::zeros(arr.dim());
    }
    arr / max
}

/// Weighted, max-normalized grayscale of an RGB image with shape `(height, width)`.
///
/// No rounding is applied here.
pub fn grayscale(rgb: &RgbImage, weights: LumaWeights) -> Array2<f64> {
    let (width, height) = rgb.dimensions();
    let intensity = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        weights.apply(rgb.get_pixel(x as u32, y as u32).0)
    });
    normalize_by_max(intensity)
}

/// Replicate each cell into a `factor x factor` block (Kronecker product with ones).
pub fn upscale(arr: &Array2<f64>, factor: usize) -> Result<Array2<f64>> {
    if factor == 0 {
        return Err(SampleError::InvalidParameter(
            "upscale factor must be at least 1".to_string(),
        ));
    }
    let (height, width) = arr.dim();
    Ok(Array2::from_shape_fn(
        (height * factor, width * factor),
        |(row, col)| arr[[row / factor, col / factor]],
    ))
}

/// Grayscale sample of the image at `source`, rounded and enlarged by `upscale_factor`.
///
/// Output shape is `(source_height * k, source_width * k)`.
pub fn logo_grayscale(
    source: &Path,
    upscale_factor: usize,
    weights: LumaWeights,
) -> Result<Array2<f64>> {
    if upscale_factor == 0 {
        return Err(SampleError::InvalidParameter(
            "upscale factor must be at least 1".to_string(),
        ));
    }
    let rgb = load_rgb(source)?;
    let gray = round_array(&grayscale(&rgb, weights), SAMPLE_DECIMALS);
    upscale(&gray, upscale_factor)
}
