// crates/geofuzz-core/src/loader/fetch.rs

//! Dataset acquisition: fetches GeoNames archives and writes the prepared
//! catalog CSV for a [`Dataset`].

use super::geonames::{read_dump, write_prepared_csv};
use crate::dataset::{Dataset, DatasetSource, GEONAMES_BASE_URL};
use crate::error::{GeoError, Result};
use crate::model::PlaceRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Downloads `dataset` into `data_dir` unless its catalog is already there.
///
/// Returns the path of the prepared catalog.
///
/// # Errors
///
/// Returns [`GeoError::Download`] on HTTP failures and an I/O or data error
/// when an archive cannot be unpacked.
pub fn download(dataset: Dataset, data_dir: &Path) -> Result<PathBuf> {
    let out = dataset.catalog_path(data_dir);
    if out.exists() {
        log::info!("Dataset '{dataset}' already present at {}", out.display());
        return Ok(out);
    }

    fs::create_dir_all(data_dir)?;
    let tmp = data_dir.join(format!(".tmp-{}", dataset.name()));
    fs::create_dir_all(&tmp)?;

    log::info!("Downloading dataset '{dataset}' ({})", dataset.description());
    let result = fetch_all(dataset, &tmp).and_then(|records| {
        let part = out.with_extension("csv.part");
        write_prepared_csv(BufWriter::new(File::create(&part)?), &records)?;
        fs::rename(&part, &out)?;
        Ok(records.len())
    });

    if let Err(e) = fs::remove_dir_all(&tmp) {
        log::warn!("Could not remove {}: {e}", tmp.display());
    }

    let count = result?;
    log::info!("Saved {count} places to {}", out.display());
    Ok(out)
}

fn fetch_all(dataset: Dataset, tmp: &Path) -> Result<Vec<PlaceRecord>> {
    match dataset.source() {
        DatasetSource::Countries(codes) => {
            let mut records = Vec::new();
            for code in codes {
                let archive = fetch_archive(&format!("{code}.zip"), tmp)?;
                let mut places = extract_dump(&archive, &format!("{code}.txt"))?;
                log::info!("  {code}: {} places", places.len());
                records.append(&mut places);
            }
            Ok(records)
        }
        DatasetSource::Archive(file) => {
            let archive = fetch_archive(file, tmp)?;
            let inner = file.replace(".zip", ".txt");
            extract_dump(&archive, &inner)
        }
    }
}

fn fetch_archive(file: &str, tmp: &Path) -> Result<PathBuf> {
    let url = format!("{GEONAMES_BASE_URL}{file}");
    let dest = tmp.join(file);
    log::debug!("GET {url}");

    let download_err = |reason: String| GeoError::Download {
        url: url.clone(),
        reason,
    };

    let mut response = reqwest::blocking::get(&url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| download_err(e.to_string()))?;

    let mut out = BufWriter::new(File::create(&dest)?);
    response
        .copy_to(&mut out)
        .map_err(|e| download_err(e.to_string()))?;
    out.flush()?;
    Ok(dest)
}

fn extract_dump(archive_path: &Path, entry: &str) -> Result<Vec<PlaceRecord>> {
    let invalid = |e: zip::result::ZipError| {
        GeoError::InvalidData(format!("{}: {e}", archive_path.display()))
    };

    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(invalid)?;
    let dump = archive.by_name(entry).map_err(invalid)?;
    let (records, _report) = read_dump(dump)?;
    Ok(records)
}
