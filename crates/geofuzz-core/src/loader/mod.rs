// crates/geofuzz-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, the binary cache) and
//! delegates to the GeoNames parsers.

use crate::error::Result;
use crate::model::PlaceRecord;
use std::path::Path;

mod builder;
pub mod common_io;
pub mod geonames;

#[cfg(feature = "download")]
pub mod fetch;

pub use builder::{load_catalog_cached, save_catalog, CACHE_SUFFIX};
pub use common_io::CompressionMode;
pub use geonames::{read_dump, read_prepared_csv, write_prepared_csv, LoadReport};

/// Layout of a catalog source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Raw GeoNames dump (`*.txt`, `*.tsv`), tab separated, no header.
    Dump,
    /// Prepared catalog CSV with a header row.
    PreparedCsv,
}

impl SourceFormat {
    /// Decides by extension, looking through a trailing `.gz`.
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".txt") || name.ends_with(".tsv") {
            SourceFormat::Dump
        } else {
            SourceFormat::PreparedCsv
        }
    }
}

/// Parses a catalog file, bypassing the binary cache.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<PlaceRecord>> {
    let path = path.as_ref();
    let format = SourceFormat::detect(path);
    log::info!("Loading catalog {} ({:?})", path.display(), format);

    let reader = common_io::open_stream(path)?;
    let (records, _report) = match format {
        SourceFormat::Dump => read_dump(reader)?,
        SourceFormat::PreparedCsv => read_prepared_csv(reader)?,
    };
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format() {
        assert_eq!(SourceFormat::detect(Path::new("RU.txt")), SourceFormat::Dump);
        assert_eq!(SourceFormat::detect(Path::new("a/RU.TXT.gz")), SourceFormat::Dump);
        assert_eq!(SourceFormat::detect(Path::new("x.tsv")), SourceFormat::Dump);
        assert_eq!(SourceFormat::detect(Path::new("cis.csv")), SourceFormat::PreparedCsv);
        assert_eq!(SourceFormat::detect(Path::new("cis.csv.gz")), SourceFormat::PreparedCsv);
    }

    #[test]
    fn loads_csv_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.csv");
        let records = vec![PlaceRecord::new(1, "Tver", "RU")
            .with_ascii_name("Tver")
            .with_coordinates(56.86, 35.9)];
        write_prepared_csv(std::fs::File::create(&path).unwrap(), &records).unwrap();

        assert_eq!(load_catalog(&path).unwrap(), records);
    }
}
