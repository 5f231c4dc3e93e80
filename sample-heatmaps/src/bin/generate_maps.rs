//! Sample heatmap generator
//!
//! Writes the standard set of sample arrays (noise, gradient, logo and
//! modified logo) as JSON files.
//!
//! # Usage
//!
//! ```bash
//! # Regenerate everything into sample-heatmaps/ from sample-heatmaps/logo.png
//! cargo run --release --bin generate_maps
//!
//! # Reproducible run into another directory, with PNG previews
//! cargo run --release --bin generate_maps -- -o /tmp/maps --seed 42 --preview
//!
//! # Previews through the viridis colormap
//! cargo run --release --bin generate_maps -- --preview --colormap viridis
//!
//! # Only the small files
//! cargo run --release --bin generate_maps -- --only noise_5x5 --only increasing_values_10x10
//! ```

use clap::{Parser, ValueEnum};
use sample_heatmaps::image_proc::image::Colormap;
use sample_heatmaps::sample_storage::{DEFAULT_LOGO_FILE, DEFAULT_OUTPUT_DIR};
use sample_heatmaps::{default_catalog, generate_all, RunOptions, SampleJob, SampleStorage};
use std::path::PathBuf;

/// Preview color schemes
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PreviewColormap {
    /// 8-bit grayscale
    Gray,
    /// Viridis, as used by the heatmap viewer
    Viridis,
}

impl From<PreviewColormap> for Colormap {
    fn from(colormap: PreviewColormap) -> Self {
        match colormap {
            PreviewColormap::Gray => Colormap::Gray,
            PreviewColormap::Viridis => Colormap::Viridis,
        }
    }
}

/// Command line arguments for the sample generator
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate sample heatmap arrays as JSON")]
struct Args {
    /// Directory the JSON files are written to (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Source image for the logo samples [default: <OUTPUT_DIR>/logo.png]
    #[arg(short, long)]
    logo: Option<PathBuf>,

    /// Seed for the noise-based samples; omit for fresh randomness
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also write a `<name>.preview.png` image for every sample
    #[arg(short, long)]
    preview: bool,

    /// Color scheme for previews
    #[arg(short, long, value_enum, default_value_t = PreviewColormap::Gray)]
    colormap: PreviewColormap,

    /// Only generate the named samples (file name with or without .json)
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<String>,
}

fn select_jobs(only: &[String]) -> Result<Vec<SampleJob>, String> {
    let catalog = default_catalog();
    if only.is_empty() {
        return Ok(catalog);
    }

    let wanted: Vec<&str> = only
        .iter()
        .map(|name| name.strip_suffix(".json").unwrap_or(name))
        .collect();
    if let Some(unknown) = wanted
        .iter()
        .find(|name| !catalog.iter().any(|job| job.name() == **name))
    {
        let known: Vec<&str> = catalog.iter().map(SampleJob::name).collect();
        return Err(format!(
            "Unknown sample '{unknown}', expected one of: {}",
            known.join(", ")
        ));
    }

    Ok(catalog
        .into_iter()
        .filter(|job| wanted.contains(&job.name()))
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let logo = args
        .logo
        .unwrap_or_else(|| args.output_dir.join(DEFAULT_LOGO_FILE));
    let storage = SampleStorage::new(&args.output_dir, logo);
    let jobs = select_jobs(&args.only)?;

    println!("Sample Heatmap Generator");
    println!("========================");
    println!("Output directory: {}", storage.output_dir().display());
    println!("Source image: {}", storage.logo_path().display());
    if jobs.iter().any(|job| job.kind.uses_noise()) {
        match args.seed {
            Some(seed) => println!("Seed: {seed}"),
            None => println!("Seed: random"),
        }
    }
    if args.preview {
        println!("Previews: {:?}", args.colormap);
    }
    println!();

    let options = RunOptions {
        seed: args.seed,
        preview: args.preview.then(|| args.colormap.into()),
    };
    let written = generate_all(&storage, &jobs, options)?;

    for sample in &written {
        println!("  {:<32} {}", sample.filename, sample.size);
    }
    println!("\nWrote {} sample(s)", written.len());

    Ok(())
}
