//! Linear gradient samples.

use crate::error::Result;
use crate::image_proc::rounding::{round_to, SAMPLE_DECIMALS};
use crate::image_size::ImageSize;
use ndarray::Array2;

/// Row-major ramp where cell `i` holds `i / (width * height)`, rounded to two decimals.
///
/// The first cell is always 0 and values never decrease when read row by row.
pub fn increasing_values(size: ImageSize) -> Result<Array2<f64>> {
    size.validate()?;
    let area = size.pixel_count() as f64;
    let width = size.width;

    Ok(Array2::from_shape_fn(size.shape(), |(row, col)| {
        round_to((row * width + col) as f64 / area, SAMPLE_DECIMALS)
    }))
}
