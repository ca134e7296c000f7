// crates/geofuzz-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip for `*.gz` paths.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => CompressionMode::Gzip,
            _ => CompressionMode::None,
        }
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension says so.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    open_with(path, CompressionMode::for_path(path))
}

pub fn open_with(path: &Path, compression: CompressionMode) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    match compression {
        CompressionMode::None => Ok(Box::new(reader)),
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => Ok(Box::new(GzDecoder::new(reader))),
        #[cfg(not(feature = "compact"))]
        CompressionMode::Gzip => Err(GeoError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        ))),
    }
}

/// `<dir>/<file name>.<suffix>`
pub fn get_cache_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    let filename = source
        .file_name()
        .ok_or_else(|| GeoError::InvalidData(format!("{} has no file name", source.display())))?
        .to_string_lossy();
    Ok(source.with_file_name(format!("{filename}.{suffix}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_from_extension() {
        assert_eq!(
            CompressionMode::for_path(Path::new("RU.txt.gz")),
            CompressionMode::Gzip
        );
        assert_eq!(
            CompressionMode::for_path(Path::new("cis.csv")),
            CompressionMode::None
        );
    }

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/d/cis.csv"), "catalog.bin").unwrap();
        assert_eq!(p, PathBuf::from("/d/cis.csv.catalog.bin"));
        assert!(get_cache_path(Path::new("/"), "bin").is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/nonexistent/geofuzz.csv")).err().unwrap();
        assert!(matches!(err, GeoError::NotFound(_)));
    }
}
