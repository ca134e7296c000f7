//! geofuzz prelude: bring common types and traits into scope for examples.

#![allow(unused_imports)]

pub use crate::dataset::{available_datasets, Dataset, LoadOptions};
pub use crate::error::{GeoError, Result};
pub use crate::geocoder::Geocoder;
pub use crate::model::{
    BatchItem, BatchOutcome, GeocodeOptions, PlaceRecord, PlaceResult, DEFAULT_THRESHOLD,
};
pub use crate::text::normalize;
pub use crate::traits::{NameVariants, PlaceSearch};
pub use crate::IndexStats;
