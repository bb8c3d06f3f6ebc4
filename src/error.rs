// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Run-level failures. Every variant aborts the run; per-row anomalies never end up here.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("no matching input files in: {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("input file is empty (no header row): {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("could not find X and Z position columns (e.g. pos_x / pos_z)")]
    MissingColumns,

    #[error("could not find an 'elapsed' or 't' time column")]
    MissingTimeBasis,

    #[error("too few valid rows to plot: {valid_rows} (need at least 2)")]
    InsufficientData { valid_rows: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }
}

// src/error.rs
