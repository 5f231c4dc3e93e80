//! JSON serialization of sample arrays.
//!
//! A sample file is a top-level JSON array of rows, each row an array of
//! numbers. Small samples are written indented for reading by eye, large ones
//! compact. The layout is identical either way.

use crate::error::{Result, SampleError};
use crate::sample_storage::SampleStorage;
use ndarray::Array2;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Text layout of a written sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// One value per line, indented by `indent` spaces per level
    Pretty { indent: usize },
    /// No whitespace
    Compact,
}

impl JsonFormat {
    /// Four-space indentation used for human-inspected samples
    pub const INDENTED: Self = Self::Pretty { indent: 4 };
}

/// Nested row-major rows of an array
pub fn to_nested(arr: &Array2<f64>) -> Vec<Vec<f64>> {
    arr.rows().into_iter().map(|row| row.to_vec()).collect()
}

/// Rebuild an array from nested rows, rejecting empty or ragged input
pub fn from_nested(rows: Vec<Vec<f64>>) -> Result<Array2<f64>> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(SampleError::InvalidParameter(
            "sample array has no rows or no columns".to_string(),
        ));
    }
    if let Some(bad) = rows.iter().position(|row| row.len() != width) {
        return Err(SampleError::InvalidParameter(format!(
            "row {bad} has {} values, expected {width}",
            rows[bad].len()
        )));
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((height, width), flat)
        .map_err(|e| SampleError::InvalidParameter(e.to_string()))
}

/// Serialize an array to any writer
pub fn write_array<W: Write>(
    writer: W,
    arr: &Array2<f64>,
    format: JsonFormat,
) -> serde_json::Result<()> {
    let nested = to_nested(arr);
    match format {
        JsonFormat::Compact => serde_json::to_writer(writer, &nested),
        JsonFormat::Pretty { indent } => {
            let indent = vec![b' '; indent];
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
            nested.serialize(&mut serializer)
        }
    }
}

/// Serialize an array to a JSON string
pub fn to_json_string(arr: &Array2<f64>, format: JsonFormat) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    write_array(&mut buf, arr, format)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `arr` to `filename` inside the storage's output directory.
///
/// Any existing file is overwritten. On failure the file may be absent or
/// truncated. Returns the path written.
pub fn save_array(
    storage: &SampleStorage,
    filename: &str,
    arr: &Array2<f64>,
    format: JsonFormat,
) -> Result<PathBuf> {
    let path = storage.sample_path(filename)?;
    save_array_to_path(&path, arr, format)?;
    Ok(path)
}

/// Write `arr` to an explicit path
pub fn save_array_to_path(path: &Path, arr: &Array2<f64>, format: JsonFormat) -> Result<()> {
    let write_err = |source: std::io::Error| SampleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_array(&mut writer, arr, format).map_err(|e| {
        if e.is_io() {
            write_err(e.into())
        } else {
            SampleError::Json {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    writer.flush().map_err(write_err)
}

/// Read a sample file back into an array
pub fn load_array(path: &Path) -> Result<Array2<f64>> {
    let json = std::fs::read_to_string(path).map_err(|source| SampleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&json).map_err(|source| SampleError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    from_nested(rows)
}
