// crates/geofuzz-core/src/model.rs
use crate::traits::NameVariants;
use serde::{Deserialize, Serialize};

/// Default minimum similarity score for a fuzzy candidate.
pub const DEFAULT_THRESHOLD: u8 = 75;
/// Score assigned to exact (normalized) name matches.
pub const EXACT_SCORE: u8 = 100;

/// One gazetteer entry.
///
/// Records are immutable once handed to a [`crate::Geocoder`]. Either
/// `name` or `ascii_name` may be empty, and `alternate_names` keeps the
/// order of the source column (it carries no meaning).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub geonameid: u64,
    pub name: String,
    pub ascii_name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// ISO alpha-2, uppercase, empty when unknown.
    pub country_code: String,
    /// 0 when unknown.
    pub population: u64,
    #[serde(default)]
    pub feature_code: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl PlaceRecord {
    /// Minimal constructor; the ASCII name is left empty.
    pub fn new(geonameid: u64, name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            geonameid,
            name: name.into(),
            ascii_name: String::new(),
            alternate_names: Vec::new(),
            latitude: 0.0,
            longitude: 0.0,
            country_code: country_code.into(),
            population: 0,
            feature_code: None,
            timezone: None,
        }
    }

    pub fn with_ascii_name(mut self, ascii_name: impl Into<String>) -> Self {
        self.ascii_name = ascii_name.into();
        self
    }

    pub fn with_alternate_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }
}

impl NameVariants for PlaceRecord {
    fn name_variants(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            [self.name.as_str(), self.ascii_name.as_str()]
                .into_iter()
                .chain(self.alternate_names.iter().map(String::as_str)),
        )
    }
}

/// A resolved place, as returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub geonameid: u64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    pub population: u64,
    /// 0–100; 100 only for exact matches.
    pub score: u8,
    /// Normalized name variant the query matched.
    pub matched_as: String,
}

impl PlaceResult {
    pub(crate) fn from_record(record: &PlaceRecord, score: u8, matched_as: &str) -> Self {
        Self {
            geonameid: record.geonameid,
            name: record.name.clone(),
            lat: record.latitude,
            lon: record.longitude,
            country: record.country_code.clone(),
            population: record.population,
            score,
            matched_as: matched_as.to_owned(),
        }
    }

    pub fn is_exact(&self) -> bool {
        self.score == EXACT_SCORE
    }
}

/// Outcome of one query inside a batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Found(PlaceResult),
    NotFound,
}

/// One entry of a batch result, in the same position as its query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchItem {
    pub query: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

impl BatchItem {
    pub fn new(query: impl Into<String>, best: Option<PlaceResult>) -> Self {
        Self {
            query: query.into(),
            outcome: match best {
                Some(place) => BatchOutcome::Found(place),
                None => BatchOutcome::NotFound,
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Found(_))
    }

    pub fn place(&self) -> Option<&PlaceResult> {
        match &self.outcome {
            BatchOutcome::Found(place) => Some(place),
            BatchOutcome::NotFound => None,
        }
    }
}

/// Query parameters for [`crate::PlaceSearch::geocode`].
///
/// ```rust
/// use geofuzz_core::GeocodeOptions;
///
/// let opts = GeocodeOptions::default().with_country("ru").with_top_n(3);
/// assert_eq!(opts.threshold, 75);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeocodeOptions {
    /// ISO alpha-2 filter; compared case-insensitively, blank means none.
    pub country: Option<String>,
    /// Minimum score, 0–100.
    pub threshold: u8,
    /// Maximum number of results, at least 1.
    pub top_n: usize,
}

impl Default for GeocodeOptions {
    fn default() -> Self {
        Self {
            country: None,
            threshold: DEFAULT_THRESHOLD,
            top_n: 1,
        }
    }
}

impl GeocodeOptions {
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Rejects out-of-range parameters. Values are never clamped.
    pub fn validate(&self) -> crate::Result<()> {
        validate_threshold(self.threshold)?;
        if self.top_n < 1 {
            return Err(crate::GeoError::InvalidTopN);
        }
        Ok(())
    }
}

pub(crate) fn validate_threshold(threshold: u8) -> crate::Result<()> {
    if threshold > 100 {
        return Err(crate::GeoError::InvalidThreshold(threshold));
    }
    Ok(())
}
