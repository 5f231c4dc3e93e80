//! Weighted composites of several samples.
//!
//! The modified logo mixes the logo grayscale with a centred Gaussian and a
//! fresh noise field: `0.5 image + 0.25 gaussian + 0.25 noise` by default.

use crate::error::{Result, SampleError};
use crate::image_proc::gaussian::{radial_gaussian, GaussianParams};
use crate::image_proc::grayscale::{logo_grayscale, LumaWeights};
use crate::image_proc::noise::uniform_noise;
use crate::image_proc::rounding::{round_array, SAMPLE_DECIMALS};
use crate::image_size::ImageSize;
use ndarray::Array2;
use std::path::Path;

/// Contribution of each input to a blend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub image: f64,
    pub gaussian: f64,
    pub noise: f64,
}

impl BlendWeights {
    /// Weights must be non-negative and sum to at most 1 so the result stays in [0, 1]
    pub fn validate(&self) -> Result<()> {
        let weights = [self.image, self.gaussian, self.noise];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SampleError::InvalidParameter(format!(
                "blend weights must be non-negative, got {self:?}"
            )));
        }
        let total: f64 = weights.iter().sum();
        if total > 1.0 + 1e-9 {
            return Err(SampleError::InvalidParameter(format!(
                "blend weights sum to {total}, must not exceed 1"
            )));
        }
        Ok(())
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            image: 0.5,
            gaussian: 0.25,
            noise: 0.25,
        }
    }
}

/// Weighted sum of three same-shaped arrays, rounded to two decimals.
pub fn blend(
    image: &Array2<f64>,
    gaussian: &Array2<f64>,
    noise: &Array2<f64>,
    weights: BlendWeights,
) -> Result<Array2<f64>> {
    weights.validate()?;
    if image.dim() != gaussian.dim() || image.dim() != noise.dim() {
        return Err(SampleError::InvalidParameter(format!(
            "blend inputs differ in shape: image {:?}, gaussian {:?}, noise {:?}",
            image.dim(),
            gaussian.dim(),
            noise.dim()
        )));
    }

    let mixed = image * weights.image + gaussian * weights.gaussian + noise * weights.noise;
    Ok(round_array(&mixed, SAMPLE_DECIMALS))
}

/// Parameters of the modified logo composite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedLogoParams {
    pub upscale_factor: usize,
    pub luma: LumaWeights,
    pub gaussian: GaussianParams,
    pub weights: BlendWeights,
}

impl Default for ModifiedLogoParams {
    fn default() -> Self {
        Self {
            upscale_factor: 5,
            luma: LumaWeights::default(),
            gaussian: GaussianParams::default(),
            weights: BlendWeights::default(),
        }
    }
}

/// Logo grayscale blended with a matching Gaussian and fresh noise.
///
/// The output shape equals the upscaled logo shape. The noise term makes the
/// result non-deterministic unless `rng_seed` is given.
pub fn modified_logo(
    source: &Path,
    params: &ModifiedLogoParams,
    rng_seed: Option<u64>,
) -> Result<Array2<f64>> {
    params.weights.validate()?;
    let image = logo_grayscale(source, params.upscale_factor, params.luma)?;
    let size = ImageSize::of_array(&image);
    let gaussian = radial_gaussian(size, params.gaussian)?;
    let noise = uniform_noise(size, rng_seed)?;

    blend(&image, &gaussian, &noise, params.weights)
}
