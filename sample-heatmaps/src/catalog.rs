//! The fixed set of sample heatmaps and the runner that writes them.
//!
//! | file | strategy | format |
//! |------|----------|--------|
//! | `noise_5x5.json` | uniform noise, 5x5 | indented |
//! | `noise_1000x1000.json` | uniform noise, 1000x1000 | compact |
//! | `increasing_values_10x10.json` | linear gradient, 10x10 | indented |
//! | `logo.json` | logo grayscale, upscale 5 | compact |
//! | `modified_logo.json` | logo + Gaussian + noise blend, upscale 5 | compact |

use crate::array_io::{save_array, JsonFormat};
use crate::error::{Result, SampleError};
use crate::image_proc::blend::{modified_logo, ModifiedLogoParams};
use crate::image_proc::gradient::increasing_values;
use crate::image_proc::grayscale::{logo_grayscale, LumaWeights};
use crate::image_proc::image::{save_preview, Colormap};
use crate::image_proc::noise::uniform_noise;
use crate::image_size::ImageSize;
use crate::sample_storage::SampleStorage;
use log::{error, info};
use ndarray::Array2;
use std::path::PathBuf;

/// Generation strategy and its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum SampleKind {
    Noise(ImageSize),
    Gradient(ImageSize),
    Logo {
        upscale_factor: usize,
        luma: LumaWeights,
    },
    ModifiedLogo(ModifiedLogoParams),
}

impl SampleKind {
    /// Whether the strategy draws random numbers
    pub fn uses_noise(&self) -> bool {
        matches!(self, Self::Noise(_) | Self::ModifiedLogo(_))
    }

    /// Produce the array for this strategy.
    ///
    /// Logo-based kinds read the storage's source image.
    pub fn generate(&self, storage: &SampleStorage, rng_seed: Option<u64>) -> Result<Array2<f64>> {
        match self {
            Self::Noise(size) => uniform_noise(*size, rng_seed),
            Self::Gradient(size) => increasing_values(*size),
            Self::Logo {
                upscale_factor,
                luma,
            } => logo_grayscale(storage.logo_path(), *upscale_factor, *luma),
            Self::ModifiedLogo(params) => modified_logo(storage.logo_path(), params, rng_seed),
        }
    }
}

/// One named sample file
#[derive(Debug, Clone, PartialEq)]
pub struct SampleJob {
    pub filename: String,
    pub kind: SampleKind,
    pub format: JsonFormat,
    /// Added to the run's base seed, fixed per job so subsets reproduce full runs
    pub seed_offset: u64,
}

impl SampleJob {
    pub fn new(filename: impl Into<String>, kind: SampleKind, format: JsonFormat) -> Self {
        Self {
            filename: filename.into(),
            kind,
            format,
            seed_offset: 0,
        }
    }

    pub fn with_seed_offset(mut self, seed_offset: u64) -> Self {
        self.seed_offset = seed_offset;
        self
    }

    /// Seed for this job given the run's base seed
    pub fn seed(&self, base_seed: Option<u64>) -> Option<u64> {
        base_seed.map(|s| s.wrapping_add(self.seed_offset))
    }

    /// File name of the PNG preview, `<name>.preview.png`
    pub fn preview_filename(&self) -> String {
        format!("{}.preview.png", self.name())
    }

    /// File name without its extension
    pub fn name(&self) -> &str {
        self.filename
            .strip_suffix(".json")
            .unwrap_or(&self.filename)
    }
}

/// The historical sample set, in generation order.
///
/// Each job's seed offset is its position in this list.
pub fn default_catalog() -> Vec<SampleJob> {
    let jobs = vec![
        SampleJob::new(
            "noise_5x5.json",
            SampleKind::Noise(ImageSize::from_width_height(5, 5)),
            JsonFormat::INDENTED,
        ),
        SampleJob::new(
            "noise_1000x1000.json",
            SampleKind::Noise(ImageSize::from_width_height(1000, 1000)),
            JsonFormat::Compact,
        ),
        SampleJob::new(
            "increasing_values_10x10.json",
            SampleKind::Gradient(ImageSize::from_width_height(10, 10)),
            JsonFormat::INDENTED,
        ),
        SampleJob::new(
            "logo.json",
            SampleKind::Logo {
                upscale_factor: 5,
                luma: LumaWeights::default(),
            },
            JsonFormat::Compact,
        ),
        SampleJob::new(
            "modified_logo.json",
            SampleKind::ModifiedLogo(ModifiedLogoParams::default()),
            JsonFormat::Compact,
        ),
    ];

    jobs.into_iter()
        .enumerate()
        .map(|(index, job)| job.with_seed_offset(index as u64))
        .collect()
}

/// Options shared by every job in a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Base seed; each job adds its own offset. `None` draws fresh entropy.
    pub seed: Option<u64>,
    /// Also write `<name>.preview.png` next to each JSON file
    pub preview: Option<Colormap>,
}

/// A sample that was generated and written
#[derive(Debug, Clone)]
pub struct GeneratedSample {
    pub filename: String,
    pub path: PathBuf,
    pub size: ImageSize,
    pub preview: Option<PathBuf>,
}

/// Generate one sample and write it.
///
/// Nothing is written unless generation succeeds.
pub fn generate_sample(
    storage: &SampleStorage,
    job: &SampleJob,
    rng_seed: Option<u64>,
    preview: Option<Colormap>,
) -> Result<GeneratedSample> {
    let arr = job.kind.generate(storage, rng_seed)?;
    let size = ImageSize::of_array(&arr);
    let path = save_array(storage, &job.filename, &arr, job.format)?;
    info!("Wrote {} ({size})", path.display());

    let preview = match preview {
        Some(colormap) => {
            let png = storage.sample_path(&job.preview_filename())?;
            if png == storage.logo_path() {
                return Err(SampleError::InvalidParameter(format!(
                    "preview {} would overwrite the source image",
                    png.display()
                )));
            }
            save_preview(&arr, &png, colormap)?;
            info!("Wrote preview {}", png.display());
            Some(png)
        }
        None => None,
    };

    Ok(GeneratedSample {
        filename: job.filename.clone(),
        path,
        size,
        preview,
    })
}

/// Run jobs in order, halting on the first failure.
///
/// The output directory is created if needed. Samples written before a
/// failure are left in place.
pub fn generate_all(
    storage: &SampleStorage,
    jobs: &[SampleJob],
    options: RunOptions,
) -> Result<Vec<GeneratedSample>> {
    storage.ensure_output_dir()?;

    jobs.iter()
        .map(|job| {
            generate_sample(storage, job, job.seed(options.seed), options.preview)
                .inspect_err(|e| error!("Sample {} failed: {e}", job.filename))
        })
        .collect()
}
