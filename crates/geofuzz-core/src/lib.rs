// crates/geofuzz-core/src/lib.rs

//! # geofuzz-core
//!
//! Offline fuzzy geocoding of multilingual place names against an in-memory
//! GeoNames catalog.
//!
//! A query is normalized (transliterated, lowercased, punctuation folded),
//! looked up exactly in the name index and, only when that misses, scored
//! against every indexed name variant. Results are ranked by score, then
//! population.
//!
//! ```rust
//! use geofuzz_core::prelude::*;
//!
//! let geo = Geocoder::new(vec![
//!     PlaceRecord::new(498817, "Saint Petersburg", "RU")
//!         .with_alternate_names(["Sankt-Peterburg", "Санкт-Петербург"])
//!         .with_population(5_351_935),
//! ]);
//!
//! let best = geo.geocode_best("Санкт Петирбург", None, 75).unwrap().unwrap();
//! assert_eq!(best.geonameid, 498817);
//! assert!(best.score >= 75 && best.score < 100);
//! ```

pub mod common;
pub mod dataset;
pub mod error;
pub mod fuzz;
pub mod geocoder;
pub mod index;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod prelude;
pub mod rank;
mod search;
pub mod text;
pub mod traits;
// Raw catalog rows shared by the CSV and dump parsers
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::IndexStats;
pub use crate::dataset::{available_datasets, default_data_dir, Dataset, LoadOptions};
pub use crate::error::{GeoError, Result};
pub use crate::geocoder::Geocoder;
pub use crate::model::{
    BatchItem, BatchOutcome, GeocodeOptions, PlaceRecord, PlaceResult, DEFAULT_THRESHOLD,
    EXACT_SCORE,
};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::PlaceSearch;
pub use crate::text::normalize;
