// crates/geofuzz-core/src/error.rs
use thiserror::Error;

/// Errors raised by loading, configuration and parameter validation.
///
/// A query that matches nothing is *not* an error: it yields an empty
/// result (or a `not_found` batch item).
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Data not found: {0}")]
    NotFound(String),

    #[error(
        "Dataset '{dataset}' not found in '{dir}'. Run: geofuzz download {dataset}"
    )]
    DatasetNotFound { dataset: String, dir: String },

    #[error("Unknown dataset '{0}'. Valid options: ru, cis, world")]
    InvalidDataset(String),

    #[error("threshold must be within 0..=100, got {0}")]
    InvalidThreshold(u8),

    #[error("top_n must be at least 1")]
    InvalidTopN,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "download")]
    #[error("Failed to download {url}: {reason}")]
    Download { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GeoError>;
