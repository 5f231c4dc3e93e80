//! Array generation strategies for sample heatmaps
//!
//! Every generator is a pure function from parameters to an `Array2<f64>`
//! whose values lie in [0, 1]. Composite strategies build on the simpler ones.

pub mod blend;
pub mod gaussian;
pub mod gradient;
pub mod grayscale;
pub mod image;
pub mod noise;
pub mod rounding;

// Re-export key functionality for easier access
pub use blend::{blend, modified_logo, BlendWeights, ModifiedLogoParams};
pub use gaussian::{radial_gaussian, GaussianParams};
pub use gradient::increasing_values;
pub use self::image::{save_preview, Colormap};
pub use grayscale::{logo_grayscale, upscale, LumaWeights};
pub use noise::uniform_noise;
pub use rounding::{round_array, round_to, SAMPLE_DECIMALS};
