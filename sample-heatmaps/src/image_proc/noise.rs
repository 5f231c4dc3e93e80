//! Uniform noise samples.
//!
//! Each cell is an independent draw from [0, 1), rounded to two decimals, so
//! a rounded cell may read exactly `1.0`. Draws are not reproducible unless a
//! seed is supplied.

use crate::error::Result;
use crate::image_proc::rounding::{round_array, SAMPLE_DECIMALS};
use crate::image_size::ImageSize;
use log::debug;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Raw, unrounded uniform draws for a given seed
fn uniform_field(size: ImageSize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn(size.shape(), |_| rng.random::<f64>())
}

/// Generate a `(height, width)` array of uniform noise rounded to two decimals.
///
/// # Arguments
/// * `size` - Output dimensions, both must be positive
/// * `rng_seed` - Optional seed for reproducibility; entropy from the thread
///   RNG is used when `None`
///
/// # Example
/// ```
/// use sample_heatmaps::image_proc::noise::uniform_noise;
/// use sample_heatmaps::ImageSize;
///
/// let noise = uniform_noise(ImageSize::from_width_height(5, 5), Some(42)).unwrap();
/// assert_eq!(noise.dim(), (5, 5));
/// assert!(noise.iter().all(|&v| (0.0..=1.0).contains(&v)));
/// ```
pub fn uniform_noise(size: ImageSize, rng_seed: Option<u64>) -> Result<Array2<f64>> {
    size.validate()?;
    let seed = rng_seed.unwrap_or_else(|| rand::rng().next_u64());
    debug!("Generating {size} uniform noise with seed {seed}");

    Ok(round_array(&uniform_field(size, seed), SAMPLE_DECIMALS))
}
