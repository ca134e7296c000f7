// crates/geofuzz-core/src/search.rs

use crate::common::IndexStats;
use crate::geocoder::Geocoder;
use crate::matcher::{self, CountryFilter};
use crate::model::{validate_threshold, BatchItem, GeocodeOptions, PlaceResult};
use crate::rank::rank;
use crate::text::{country_key, normalize};
use crate::traits::PlaceSearch;
use crate::Result;
use rayon::prelude::*;

impl Geocoder {
    /// Normalize, match, rank, map. Parameters must already be validated.
    fn resolve(&self, query: &str, country: Option<&str>, threshold: u8, top_n: usize) -> Vec<PlaceResult> {
        let key = normalize(query);
        if key.is_empty() {
            log::debug!("query {query:?} normalizes to nothing");
            return Vec::new();
        }

        let country = country.and_then(country_key);
        let filter = CountryFilter::resolve(&self.index, country.as_deref());

        let candidates = matcher::resolve(&self.index, &key, filter, threshold);
        log::debug!("query {key:?}: {} candidates", candidates.len());

        rank(candidates, &self.catalog, top_n)
            .into_iter()
            .map(|c| {
                PlaceResult::from_record(
                    &self.catalog[c.place as usize],
                    c.score,
                    self.index.variant(c.variant),
                )
            })
            .collect()
    }
}

impl PlaceSearch for Geocoder {
    fn stats(&self) -> IndexStats {
        IndexStats {
            places: self.catalog.len(),
            indexed_places: self.index.indexed_places(),
            skipped: self.index.skipped(),
            variants: self.index.variant_count(),
        }
    }

    fn geocode(&self, query: &str, opts: &GeocodeOptions) -> Result<Vec<PlaceResult>> {
        opts.validate()?;
        Ok(self.resolve(query, opts.country.as_deref(), opts.threshold, opts.top_n))
    }

    fn geocode_batch<S>(&self, queries: &[S], country: Option<&str>, threshold: u8) -> Result<Vec<BatchItem>>
    where
        S: AsRef<str> + Sync,
    {
        validate_threshold(threshold)?;

        let items: Vec<BatchItem> = queries
            .par_iter()
            .map(|q| {
                let q = q.as_ref();
                let best = self.resolve(q, country, threshold, 1).into_iter().next();
                BatchItem::new(q, best)
            })
            .collect();

        let found = items.iter().filter(|i| i.is_found()).count();
        log::info!("Batch: {found}/{} queries resolved", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaceRecord;
    use crate::GeoError;

    fn geo() -> Geocoder {
        Geocoder::new(vec![
            PlaceRecord::new(1, "Moscow", "RU")
                .with_alternate_names(["Москва"])
                .with_population(10_381_222),
            PlaceRecord::new(2, "Moscow", "US").with_population(40),
            PlaceRecord::new(3, "Kazan", "RU").with_population(1_243_500),
            PlaceRecord::new(4, "", ""),
        ])
    }

    #[test]
    fn stats_count_everything() {
        let s = geo().stats();
        assert_eq!(
            s,
            IndexStats {
                places: 4,
                indexed_places: 3,
                skipped: 1,
                variants: 3
            }
        );
    }

    #[test]
    fn exact_match_reports_variant() {
        let hits = geo()
            .geocode("МОСКВА", &GeocodeOptions::default())
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].geonameid, 1);
        assert!(hits[0].is_exact());
        assert_eq!(hits[0].matched_as, "moskva");
    }

    #[test]
    fn blank_country_means_no_filter() {
        let geo = geo();
        let opts = GeocodeOptions::default().with_top_n(5).with_country("  ");
        assert_eq!(geo.geocode("moscow", &opts).unwrap().len(), 2);

        let opts = GeocodeOptions::default().with_top_n(5).with_country(" us ");
        let hits = geo.geocode("moscow", &opts).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].country, "US");
    }

    #[test]
    fn punctuation_only_query_is_empty() {
        assert!(geo().geocode(" -- ", &GeocodeOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn batch_validates_once() {
        let err = geo().geocode_batch(&["Kazan"], None, 101).unwrap_err();
        assert!(matches!(err, GeoError::InvalidThreshold(101)));
    }

    #[test]
    fn geocode_best_returns_top_hit() {
        let best = geo().geocode_best("moscow", None, 75).unwrap().unwrap();
        assert_eq!(best.geonameid, 1);
        assert!(geo().geocode_best("moscow", Some("FR"), 75).unwrap().is_none());
    }
}
