use crate::error::{Result, SampleError};
use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array2;
use std::path::Path;

/// Viridis anchors at 0, 1/8, ..., 1, sampled from the matplotlib table
const VIRIDIS_ANCHORS: [[f64; 3]; 9] = [
    [0.267004, 0.004874, 0.329415],
    [0.282623, 0.140926, 0.457517],
    [0.229739, 0.322361, 0.545706],
    [0.172719, 0.448791, 0.557885],
    [0.127568, 0.566949, 0.550556],
    [0.157851, 0.683765, 0.501686],
    [0.369214, 0.788888, 0.382914],
    [0.678489, 0.863742, 0.189503],
    [0.993248, 0.906157, 0.143936],
];

/// Color mapping used for preview images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// 8-bit grayscale, 0 black and 1 white
    #[default]
    Gray,
    /// Perceptually uniform dark-purple to yellow ramp
    Viridis,
}

/// Viridis color of a value in [0, 1], linearly interpolated between anchors
pub fn viridis(value: f64) -> [f64; 3] {
    let scaled = value.clamp(0.0, 1.0) * (VIRIDIS_ANCHORS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(VIRIDIS_ANCHORS.len() - 2);
    let t = scaled - lower as f64;
    let (a, b) = (VIRIDIS_ANCHORS[lower], VIRIDIS_ANCHORS[lower + 1]);
    [
        a[0] + t * (b[0] - a[0]),
        a[1] + t * (b[1] - a[1]),
        a[2] + t * (b[2] - a[2]),
    ]
}

fn to_level(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts a sample array with values in [0, 1] to an 8-bit GrayImage
///
/// Array indices [y, x] map to pixel coordinates (x, y). Each value is scaled
/// by 255 and rounded; anything outside [0, 1] is clamped.
///
/// # Arguments
/// * `arr` - Sample array with shape (height, width)
///
/// # Returns
/// * A new GrayImage with the same dimensions as the array
pub fn array_to_gray_image(arr: &Array2<f64>) -> GrayImage {
    let (height, width) = arr.dim();
    let mut img = GrayImage::new(width as u32, height as u32);

    for ((y, x), &value) in arr.indexed_iter() {
        img.put_pixel(x as u32, y as u32, Luma([to_level(value)]));
    }

    img
}

/// Converts a sample array to an RGB image through the viridis colormap
pub fn array_to_viridis_image(arr: &Array2<f64>) -> RgbImage {
    let (height, width) = arr.dim();
    let mut img = RgbImage::new(width as u32, height as u32);

    for ((y, x), &value) in arr.indexed_iter() {
        let [r, g, b] = viridis(value);
        img.put_pixel(x as u32, y as u32, Rgb([to_level(r), to_level(g), to_level(b)]));
    }

    img
}

/// Write a PNG preview of a sample
pub fn save_preview(arr: &Array2<f64>, path: &Path, colormap: Colormap) -> Result<()> {
    let saved = match colormap {
        Colormap::Gray => array_to_gray_image(arr).save(path),
        Colormap::Viridis => array_to_viridis_image(arr).save(path),
    };
    saved.map_err(|source| SampleError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}
