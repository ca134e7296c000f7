// crates/geofuzz-core/src/geocoder.rs

//! # Geocoder
//!
//! Owns one catalog and the name index derived from it. Construction is the
//! only write; every query afterwards borrows both read-only, so a
//! `Geocoder` can be shared across threads as is.

use crate::dataset::{ensure_available, Dataset, LoadOptions};
use crate::error::Result;
use crate::index::NameIndex;
use crate::loader;
use crate::model::PlaceRecord;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub struct Geocoder {
    pub(crate) catalog: Vec<PlaceRecord>,
    pub(crate) index: NameIndex,
    dataset: Option<Dataset>,
}

impl Geocoder {
    /// Builds the name index over `records`.
    pub fn new(records: Vec<PlaceRecord>) -> Self {
        let index = NameIndex::build(&records);
        log::info!(
            "Indexed {} places under {} name variants",
            index.indexed_places(),
            index.variant_count()
        );
        Self {
            catalog: records,
            index,
            dataset: None,
        }
    }

    /// Loads a catalog file (dump or prepared CSV, optionally `.gz`),
    /// through the binary cache.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(loader::load_catalog_cached(path)?))
    }

    /// Loads `dataset` as configured by `opts`.
    ///
    /// An explicit `opts.catalog_path` wins over the dataset lookup. A
    /// missing dataset is downloaded when `opts.auto_download` is set and the
    /// `download` feature is enabled.
    ///
    /// # Errors
    ///
    /// [`crate::GeoError::DatasetNotFound`] when the catalog is missing and
    /// cannot be fetched; loader errors otherwise.
    pub fn from_dataset(dataset: Dataset, opts: &LoadOptions) -> Result<Self> {
        let path = match &opts.catalog_path {
            Some(p) => p.clone(),
            None => ensure_available(dataset, &opts.data_dir(), opts.auto_download)?,
        };

        let records = if opts.use_cache {
            loader::load_catalog_cached(&path)?
        } else {
            loader::load_catalog(&path)?
        };

        let mut geo = Self::new(records);
        geo.dataset = Some(dataset);
        Ok(geo)
    }

    pub fn size(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Dataset this geocoder was loaded from, if any.
    pub fn dataset(&self) -> Option<Dataset> {
        self.dataset
    }

    pub fn catalog(&self) -> &[PlaceRecord] {
        &self.catalog
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }
}

impl fmt::Display for Geocoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dataset {
            Some(d) => write!(f, "Geocoder(dataset={d}, places={})", self.size()),
            None => write!(f, "Geocoder(places={})", self.size()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_size() {
        let geo = Geocoder::new(vec![
            PlaceRecord::new(1, "Ufa", "RU"),
            PlaceRecord::new(2, "", "RU"),
        ]);
        assert_eq!(geo.size(), 2);
        assert_eq!(geo.index().skipped(), 1);
        assert_eq!(geo.to_string(), "Geocoder(places=2)");
    }

    #[test]
    fn explicit_catalog_path_overrides_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.csv");
        loader::write_prepared_csv(
            std::fs::File::create(&path).unwrap(),
            &[PlaceRecord::new(7, "Perm", "RU")],
        )
        .unwrap();

        let opts = LoadOptions::default()
            .with_data_dir(dir.path())
            .with_catalog_path(&path)
            .with_auto_download(false)
            .with_cache(false);
        let geo = Geocoder::from_dataset(Dataset::World, &opts).unwrap();
        assert_eq!(geo.size(), 1);
        assert_eq!(geo.dataset(), Some(Dataset::World));
        assert_eq!(geo.to_string(), "Geocoder(dataset=world, places=1)");
    }

    #[test]
    fn failed_load_is_debuggable() {
        let dir = tempfile::tempdir().unwrap();
        let opts = LoadOptions::default()
            .with_data_dir(dir.path())
            .with_auto_download(false);
        let err = Geocoder::from_dataset(Dataset::Russia, &opts).unwrap_err();
        assert!(matches!(err, crate::GeoError::DatasetNotFound { .. }));

        let geo = Geocoder::new(vec![PlaceRecord::new(1, "Ufa", "RU")]);
        assert!(format!("{geo:?}").starts_with("Geocoder {"));
    }

    #[test]
    fn geocoder_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Geocoder>();
    }
}
