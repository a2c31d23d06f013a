//! Dataset persistence.
//!
//! The dataset is written as indented JSON:
//!
//! ```text
//! {
//!     "count": 2,
//!     "objects": [
//!         { "name": "Sun", "mass": ..., "radius": ..., "X": ..., ..., "VZ": ... },
//!         ...
//!     ]
//! }
//! ```
//!
//! Writes go to a sibling `.tmp` file that is then renamed over the
//! destination, so the destination is either fully replaced or untouched.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::model::Dataset;

/// Errors that can occur reading or writing a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dataset in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Serialize a dataset exactly as it is written to disk.
///
/// Four-space indentation and a trailing newline. Output depends only on
/// the dataset, so identical datasets render to identical bytes.
pub fn render(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    dataset.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Read a dataset file back, checking that `count` matches its objects.
pub fn load(path: &Path) -> Result<Dataset> {
    let json = fs::read_to_string(path).map_err(io_error(path))?;
    serde_json::from_str(&json).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes finished datasets to one destination path.
pub struct DatasetWriter {
    path: PathBuf,
}

impl DatasetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `dataset`, replacing whatever is at the destination.
    ///
    /// Missing parent directories are created.
    pub fn write(&self, dataset: &Dataset) -> Result<()> {
        let bytes = render(dataset)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let tmp = self.tmp_path();
        if let Err(source) = fs::write(&tmp, bytes) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Io { path: tmp, source });
        }
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Io {
                path: self.path.clone(),
                source,
            });
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}
