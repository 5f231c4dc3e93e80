//! Radial Gaussian samples.
//!
//! Coordinates span [-1, 1] on both axes. Each cell holds
//! `exp(-(d - mu)^2 / (2 sigma^2))` where `d` is the cell's distance from the
//! origin, so `mu = 0` gives a centred spot and `mu > 0` a ring of radius `mu`.

use crate::error::{Result, SampleError};
use crate::image_size::ImageSize;
use ndarray::{Array1, Array2};

/// Spread and ring radius of the radial profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParams {
    /// Standard deviation in normalized grid units
    pub sigma: f64,
    /// Distance from the origin where the profile peaks
    pub mu: f64,
}

impl GaussianParams {
    pub fn new(sigma: f64, mu: f64) -> Self {
        Self { sigma, mu }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(SampleError::InvalidParameter(format!(
                "sigma must be finite and positive, got {}",
                self.sigma
            )));
        }
        if !self.mu.is_finite() {
            return Err(SampleError::InvalidParameter(format!(
                "mu must be finite, got {}",
                self.mu
            )));
        }
        Ok(())
    }
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self { sigma: 1.0, mu: 0.0 }
    }
}

/// Evaluate the radial Gaussian on a `(height, width)` grid.
///
/// Values are left unrounded; they lie in (0, 1] and reach 1.0 only where
/// the distance equals `mu` exactly.
pub fn radial_gaussian(size: ImageSize, params: GaussianParams) -> Result<Array2<f64>> {
    size.validate()?;
    params.validate()?;

    // ndarray's linspace yields [start] for a single sample
    let xs = Array1::<f64>::linspace(-1.0, 1.0, size.width);
    let ys = Array1::<f64>::linspace(-1.0, 1.0, size.height);
    let two_sigma_sq = 2.0 * params.sigma * params.sigma;

    Ok(Array2::from_shape_fn(size.shape(), |(row, col)| {
        let distance = xs[col].hypot(ys[row]);
        (-(distance - params.mu).powi(2) / two_sigma_sq).exp()
    }))
}
