//! Synthetic sample arrays for heatmap viewers.
//!
//! Generates 2D arrays of values in [0, 1] (uniform noise, linear ramps,
//! logo-derived grayscale, radial Gaussians and weighted blends of those) and
//! writes them as nested JSON arrays.
//!
//! ```no_run
//! use sample_heatmaps::{default_catalog, generate_all, RunOptions, SampleStorage};
//!
//! let storage = SampleStorage::default();
//! generate_all(&storage, &default_catalog(), RunOptions::default()).unwrap();
//! ```

pub mod array_io;
pub mod catalog;
pub mod error;
pub mod image_proc;
pub mod image_size;
pub mod sample_storage;
pub mod test_util;

pub use array_io::{load_array, save_array, JsonFormat};
pub use catalog::{
    default_catalog, generate_all, generate_sample, GeneratedSample, RunOptions, SampleJob,
    SampleKind,
};
pub use error::{Result, SampleError};
pub use image_size::ImageSize;
pub use sample_storage::SampleStorage;
