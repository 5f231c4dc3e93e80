//! Array dimensions and size utilities

use crate::error::{Result, SampleError};
use ndarray::Array2;
use std::fmt;

/// Width and height of a generated sample.
///
/// Arrays are row-major, so the ndarray shape is `(height, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
}

impl ImageSize {
    /// Create a new ImageSize
    pub fn from_width_height(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Size of an existing array
    pub fn of_array<T>(arr: &Array2<T>) -> Self {
        let (height, width) = arr.dim();
        Self { width, height }
    }

    /// Reject zero-sized dimensions
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SampleError::InvalidParameter(format!(
                "dimensions must be positive, got {self}"
            )));
        }
        Ok(())
    }

    /// ndarray shape `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Get total number of cells
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl From<(usize, usize)> for ImageSize {
    /// From `(width, height)`
    fn from(dimensions: (usize, usize)) -> Self {
        Self::from_width_height(dimensions.0, dimensions.1)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
