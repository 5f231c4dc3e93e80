//! Output location and source image for sample generation.
//!
//! Every call that touches the filesystem takes a `SampleStorage` instead of
//! reading global paths, so tests can point generation at a temporary
//! directory and a fixture image.

use crate::error::{Result, SampleError};
use std::io::{Error, ErrorKind};
use std::path::{Component, Path, PathBuf};

/// Directory the historical sample files live in
pub const DEFAULT_OUTPUT_DIR: &str = "sample-heatmaps";

/// Source image name inside the output directory
pub const DEFAULT_LOGO_FILE: &str = "logo.png";

/// Where samples are written and which image the logo samples read.
#[derive(Debug, Clone)]
pub struct SampleStorage {
    output_dir: PathBuf,
    logo_path: PathBuf,
}

impl SampleStorage {
    /// Storage with an explicit output directory and source image
    pub fn new(output_dir: impl Into<PathBuf>, logo_path: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            logo_path: logo_path.into(),
        }
    }

    /// Storage whose source image is `logo.png` inside the output directory
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        let logo_path = output_dir.join(DEFAULT_LOGO_FILE);
        Self {
            output_dir,
            logo_path,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn logo_path(&self) -> &Path {
        &self.logo_path
    }

    /// Create the output directory if it doesn't exist.
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| SampleError::Write {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Path of a sample file inside the output directory.
    ///
    /// The name must be a single plain file name; anything else is reported
    /// as a write error against the offending path.
    pub fn sample_path(&self, filename: &str) -> Result<PathBuf> {
        let mut components = Path::new(filename).components();
        let valid = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        let path = self.output_dir.join(filename);
        if !valid {
            return Err(SampleError::Write {
                path,
                source: Error::new(
                    ErrorKind::InvalidInput,
                    format!("sample name {filename:?} must be a plain file name"),
                ),
            });
        }
        Ok(path)
    }

    /// List the JSON sample files currently in the output directory, sorted by name.
    pub fn list_samples(&self) -> Result<Vec<String>> {
        if !self.output_dir.exists() {
            return Ok(Vec::new());
        }

        let read_err = |source: Error| SampleError::Read {
            path: self.output_dir.clone(),
            source,
        };

        let mut samples = Vec::new();
        for entry in std::fs::read_dir(&self.output_dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    samples.push(name.to_string());
                }
            }
        }
        samples.sort();

        Ok(samples)
    }
}

impl Default for SampleStorage {
    /// `sample-heatmaps/` output with `sample-heatmaps/logo.png` as source
    fn default() -> Self {
        Self::with_output_dir(DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let storage = SampleStorage::default();
        assert_eq!(storage.output_dir(), Path::new("sample-heatmaps"));
        assert_eq!(storage.logo_path(), Path::new("sample-heatmaps/logo.png"));
    }

    #[test]
    fn test_sample_path_accepts_plain_names() {
        let storage = SampleStorage::new("/tmp/out", "/tmp/logo.png");
        assert_eq!(
            storage.sample_path("noise_5x5.json").unwrap(),
            PathBuf::from("/tmp/out/noise_5x5.json")
        );
    }

    #[test]
    fn test_sample_path_rejects_traversal() {
        let storage = SampleStorage::with_output_dir("/tmp/out");
        for bad in ["", "../escape.json", "nested/file.json", "/abs.json", "."] {
            assert!(
                matches!(storage.sample_path(bad), Err(SampleError::Write { .. })),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_ensure_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SampleStorage::with_output_dir(dir.path().join("nested").join("out"));
        assert!(storage.list_samples().unwrap().is_empty());

        storage.ensure_output_dir().unwrap();
        std::fs::write(storage.output_dir().join("b.json"), "[]").unwrap();
        std::fs::write(storage.output_dir().join("a.json"), "[]").unwrap();
        std::fs::write(storage.output_dir().join("logo.png"), "x").unwrap();

        assert_eq!(storage.list_samples().unwrap(), vec!["a.json", "b.json"]);
    }
}
