// crates/geofuzz-core/src/dataset.rs

//! # Datasets
//!
//! Named GeoNames extracts and where their prepared catalogs live on disk.

use crate::error::{GeoError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const GEONAMES_BASE_URL: &str = "https://download.geonames.org/export/dump/";

/// Environment variable overriding [`default_data_dir`].
pub const DATA_DIR_ENV: &str = "GEOFUZZ_DATA_DIR";

const CIS_COUNTRIES: &[&str] = &[
    "RU", "UA", "BY", "KZ", "UZ", "TJ", "KG", "TM", "AZ", "AM", "GE", "MD",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dataset {
    /// Russia only.
    Russia,
    /// CIS and former USSR countries.
    #[default]
    Cis,
    /// Cities worldwide with population above 1000.
    World,
}

/// Where the raw GeoNames data for a dataset comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// One `<CC>.zip` dump per country code.
    Countries(&'static [&'static str]),
    /// A single archive, e.g. `cities1000.zip`.
    Archive(&'static str),
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Russia, Dataset::Cis, Dataset::World];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Russia => "ru",
            Dataset::Cis => "cis",
            Dataset::World => "world",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dataset::Russia => "Russia only",
            Dataset::Cis => "CIS + former USSR countries",
            Dataset::World => "All cities worldwide (population > 1000)",
        }
    }

    pub fn source(self) -> DatasetSource {
        match self {
            Dataset::Russia => DatasetSource::Countries(&["RU"]),
            Dataset::Cis => DatasetSource::Countries(CIS_COUNTRIES),
            Dataset::World => DatasetSource::Archive("cities1000.zip"),
        }
    }

    /// Expected location of the prepared catalog CSV.
    pub fn catalog_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(format!("{}.csv", self.name()))
    }

    pub fn is_downloaded(self, data_dir: &Path) -> bool {
        self.catalog_path(data_dir).exists()
    }
}

impl FromStr for Dataset {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Dataset::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeoError::InvalidDataset(wanted.to_owned()))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(name, description)` for every known dataset.
pub fn available_datasets() -> Vec<(&'static str, &'static str)> {
    Dataset::ALL
        .into_iter()
        .map(|d| (d.name(), d.description()))
        .collect()
}

/// `$GEOFUZZ_DATA_DIR`, else `$HOME/.geofuzz/data`, else `./data`.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".geofuzz").join("data"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// How [`crate::Geocoder::from_dataset`] finds and prepares its catalog.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Defaults to [`default_data_dir`].
    pub data_dir: Option<PathBuf>,
    /// Explicit catalog file; bypasses the dataset lookup entirely.
    pub catalog_path: Option<PathBuf>,
    /// Fetch a missing dataset (needs the `download` feature).
    pub auto_download: bool,
    /// Reuse / refresh the binary catalog cache next to the source file.
    pub use_cache: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_path: None,
            auto_download: true,
            use_cache: true,
        }
    }
}

impl LoadOptions {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_auto_download(mut self, enabled: bool) -> Self {
        self.auto_download = enabled;
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }
}

/// Makes sure the prepared catalog for `dataset` exists in `data_dir`.
pub(crate) fn ensure_available(dataset: Dataset, data_dir: &Path, auto_download: bool) -> Result<PathBuf> {
    let path = dataset.catalog_path(data_dir);
    if path.exists() {
        return Ok(path);
    }
    if auto_download {
        return fetch_dataset(dataset, data_dir);
    }
    Err(not_found(dataset, data_dir))
}

fn not_found(dataset: Dataset, data_dir: &Path) -> GeoError {
    GeoError::DatasetNotFound {
        dataset: dataset.name().to_owned(),
        dir: data_dir.display().to_string(),
    }
}

#[cfg(feature = "download")]
fn fetch_dataset(dataset: Dataset, data_dir: &Path) -> Result<PathBuf> {
    crate::loader::fetch::download(dataset, data_dir)
}

#[cfg(not(feature = "download"))]
fn fetch_dataset(dataset: Dataset, data_dir: &Path) -> Result<PathBuf> {
    log::warn!("cannot fetch '{dataset}': built without the 'download' feature");
    Err(not_found(dataset, data_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_datasets() {
        let names: Vec<&str> = available_datasets().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["ru", "cis", "world"]);
        assert_eq!("CIS".parse::<Dataset>().unwrap(), Dataset::Cis);
        assert_eq!(Dataset::default(), Dataset::Cis);
    }

    #[test]
    fn invalid_dataset() {
        let err = "mars".parse::<Dataset>().unwrap_err();
        assert!(matches!(err, GeoError::InvalidDataset(ref d) if d == "mars"));
        assert!(err.to_string().contains("ru, cis, world"));
    }

    #[test]
    fn dataset_not_found_error_message() {
        let err = GeoError::DatasetNotFound {
            dataset: "cis".into(),
            dir: "/tmp/data".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cis"));
        assert!(msg.contains("geofuzz download"));
    }

    #[test]
    fn missing_dataset_without_download() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_available(Dataset::Russia, dir.path(), false).unwrap_err();
        assert!(matches!(err, GeoError::DatasetNotFound { .. }));
    }

    #[test]
    fn catalog_paths() {
        let dir = Path::new("/data");
        assert_eq!(Dataset::World.catalog_path(dir), PathBuf::from("/data/world.csv"));
        assert_eq!(
            Dataset::Cis.source(),
            DatasetSource::Countries(CIS_COUNTRIES)
        );
    }
}
