// crates/geofuzz-core/src/loader/builder.rs
use super::common_io::{self, CompressionMode};
use crate::error::{GeoError, Result};
use crate::model::PlaceRecord;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "catalog.comp.bin";
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "catalog.bin";

/// Bumped whenever `PlaceRecord` changes shape.
const CACHE_VERSION: u32 = 1;

#[cfg(feature = "compact")]
const CACHE_COMPRESSION: CompressionMode = CompressionMode::Gzip;
#[cfg(not(feature = "compact"))]
const CACHE_COMPRESSION: CompressionMode = CompressionMode::None;

#[derive(Deserialize)]
struct CatalogCache {
    version: u32,
    records: Vec<PlaceRecord>,
}

/// Write side of [`CatalogCache`]; same encoding, borrowed records.
#[derive(Serialize)]
struct CatalogCacheRef<'a> {
    version: u32,
    records: &'a [PlaceRecord],
}

/// **Smart Load:** reads the binary cache next to `path` when it is at least
/// as new as the source, otherwise parses the source and refreshes the cache.
pub fn load_catalog_cached(path: impl AsRef<Path>) -> Result<Vec<PlaceRecord>> {
    let path = path.as_ref();
    let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX)?;

    if is_cache_fresh(path, &cache_path) {
        match read_cache(&cache_path) {
            Ok(records) => {
                log::info!(
                    "Loaded {} places from cache {}",
                    records.len(),
                    cache_path.display()
                );
                return Ok(records);
            }
            Err(e) => log::warn!("Ignoring unreadable cache {}: {e}", cache_path.display()),
        }
    }

    let records = super::load_catalog(path)?;

    if let Err(e) = save_catalog(&cache_path, &records) {
        log::warn!("Could not write cache {}: {e}", cache_path.display());
    }
    Ok(records)
}

/// Writes records as a binary catalog (gzip when `compact` is on).
pub fn save_catalog(path: impl AsRef<Path>, records: &[PlaceRecord]) -> Result<()> {
    write_generic(path.as_ref(), records, CACHE_COMPRESSION)
}

fn read_cache(cache_path: &Path) -> Result<Vec<PlaceRecord>> {
    let reader = common_io::open_with(cache_path, CACHE_COMPRESSION)?;
    let cache: CatalogCache = bincode::deserialize_from(reader)?;
    if cache.version != CACHE_VERSION {
        return Err(GeoError::InvalidData(format!(
            "cache version {} (expected {CACHE_VERSION})",
            cache.version
        )));
    }
    Ok(cache.records)
}

fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(source_path).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

fn write_generic(path: &Path, records: &[PlaceRecord], compression: CompressionMode) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => Box::new(GzEncoder::new(writer, Compression::default())),
        #[cfg(not(feature = "compact"))]
        CompressionMode::Gzip => {
            return Err(GeoError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ))
        }
        CompressionMode::None => Box::new(writer),
    };

    let cache = CatalogCacheRef {
        version: CACHE_VERSION,
        records,
    };
    bincode::serialize_into(&mut encoder, &cache)?;
    encoder.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::write_prepared_csv;

    fn sample() -> Vec<PlaceRecord> {
        vec![
            PlaceRecord::new(1, "Omsk", "RU").with_population(1_100_000),
            PlaceRecord::new(2, "Tomsk", "RU").with_alternate_names(["Томск"]),
        ]
    }

    #[test]
    fn cache_is_written_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("ru.csv");
        write_prepared_csv(File::create(&src).unwrap(), &sample()).unwrap();

        let first = load_catalog_cached(&src).unwrap();
        let cache = common_io::get_cache_path(&src, CACHE_SUFFIX).unwrap();
        assert!(cache.exists());
        assert!(is_cache_fresh(&src, &cache));

        let second = load_catalog_cached(&src).unwrap();
        assert_eq!(first, second);
        assert_eq!(second, sample());
    }

    #[test]
    fn corrupt_cache_falls_back_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("ru.csv");
        write_prepared_csv(File::create(&src).unwrap(), &sample()).unwrap();
        let cache = common_io::get_cache_path(&src, CACHE_SUFFIX).unwrap();
        fs::write(&cache, b"not a cache").unwrap();

        assert_eq!(load_catalog_cached(&src).unwrap(), sample());
    }

    #[test]
    fn borrowed_writer_matches_owned_reader() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plain.bin");
        write_generic(&out, &sample(), CompressionMode::None).unwrap();

        let bytes = fs::read(&out).unwrap();
        let cache: CatalogCache = bincode::deserialize(&bytes).unwrap();
        assert_eq!(cache.version, CACHE_VERSION);
        assert_eq!(cache.records, sample());
    }

    #[test]
    fn save_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("places.bin");
        save_catalog(&out, &sample()).unwrap();
        assert_eq!(read_cache(&out).unwrap(), sample());
    }
}
