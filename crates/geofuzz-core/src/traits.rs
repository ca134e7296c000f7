// crates/geofuzz-core/src/traits.rs
use crate::common::IndexStats;
use crate::model::{BatchItem, GeocodeOptions, PlaceResult};
use crate::text::normalize;
use crate::Result;

/// Types that can be looked up under several names.
///
/// Implementors yield their raw (un-normalized) name forms; the index
/// normalizes each one with [`normalize`] before insertion. Empty strings
/// are allowed and simply contribute nothing.
///
/// # Examples
/// ```rust
/// use geofuzz_core::traits::NameVariants;
///
/// struct Place(&'static str, &'static str);
/// impl NameVariants for Place {
///     fn name_variants(&self) -> Box<dyn Iterator<Item = &str> + '_> {
///         Box::new([self.0, self.1].into_iter())
///     }
/// }
///
/// let p = Place("Łódź", "Lodz");
/// assert_eq!(p.normalized_variants(), vec!["lodz".to_string()]);
/// ```
pub trait NameVariants {
    /// Every raw name form, canonical first.
    fn name_variants(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Distinct non-empty normalized keys, in first-seen order.
    fn normalized_variants(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for raw in self.name_variants() {
            let key = normalize(raw);
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

/// The resolver operations offered by a geocoder.
pub trait PlaceSearch {
    /// Counts describing the loaded catalog and its index.
    fn stats(&self) -> IndexStats;

    /// Resolves one query into at most `opts.top_n` ranked places.
    ///
    /// Returns an empty vector when nothing clears `opts.threshold`, and a
    /// validation error when the options are out of range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geofuzz_core::{GeocodeOptions, Geocoder, PlaceRecord, PlaceSearch};
    ///
    /// let geo = Geocoder::new(vec![
    ///     PlaceRecord::new(1, "Moscow", "RU").with_population(10_381_222),
    ///     PlaceRecord::new(2, "Moscow", "US").with_population(40),
    /// ]);
    ///
    /// let hits = geo.geocode("moscow", &GeocodeOptions::default().with_top_n(2)).unwrap();
    /// assert_eq!(hits.iter().map(|h| h.geonameid).collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    fn geocode(&self, query: &str, opts: &GeocodeOptions) -> Result<Vec<PlaceResult>>;

    /// Best single match, or `None`.
    fn geocode_best(
        &self,
        query: &str,
        country: Option<&str>,
        threshold: u8,
    ) -> Result<Option<PlaceResult>> {
        let opts = GeocodeOptions {
            country: country.map(str::to_owned),
            threshold,
            top_n: 1,
        };
        Ok(self.geocode(query, &opts)?.into_iter().next())
    }

    /// Resolves every query independently with `top_n = 1`.
    ///
    /// The output has one item per input query, in input order; misses are
    /// reported as `not_found` items and never abort the batch.
    fn geocode_batch<S>(
        &self,
        queries: &[S],
        country: Option<&str>,
        threshold: u8,
    ) -> Result<Vec<BatchItem>>
    where
        S: AsRef<str> + Sync;
}
