// crates/geofuzz-core/src/index.rs

//! # Name Index
//!
//! Maps every normalized name variant (canonical, ASCII, alternates) to the
//! catalog positions of the places known under it. Built once from a
//! catalog; nothing mutates it afterwards.

use crate::model::PlaceRecord;
use crate::traits::NameVariants;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Position of a record in the catalog the index was built from.
pub type PlaceIdx = u32;
/// Position of a distinct normalized variant in [`NameIndex::variants`].
pub type VariantIdx = u32;
/// Interned country code.
pub type CountryId = u32;

#[derive(Debug, Default)]
pub struct NameIndex {
    keys: HashMap<String, VariantIdx>,
    variants: Vec<String>,
    /// Sorted, duplicate-free place positions per variant.
    postings: Vec<Vec<PlaceIdx>>,
    countries: Vec<String>,
    place_country: Vec<CountryId>,
    /// Variants owned by at least one place of each country. Derived on the
    /// first country-filtered query.
    country_pools: OnceCell<Vec<Vec<VariantIdx>>>,
    indexed_places: usize,
    skipped: usize,
}

impl NameIndex {
    /// Builds the index in one pass over `records`.
    ///
    /// Records without a single non-empty normalized variant are skipped
    /// and counted; they stay in the catalog but can never be matched.
    pub fn build(records: &[PlaceRecord]) -> Self {
        let mut index = NameIndex {
            place_country: Vec::with_capacity(records.len()),
            ..NameIndex::default()
        };
        let mut country_ids: HashMap<&str, CountryId> = HashMap::new();

        for (pos, record) in records.iter().enumerate() {
            let place = pos as PlaceIdx;

            let cid = *country_ids
                .entry(record.country_code.as_str())
                .or_insert_with(|| {
                    index.countries.push(record.country_code.clone());
                    (index.countries.len() - 1) as CountryId
                });
            index.place_country.push(cid);

            let keys = record.normalized_variants();
            let usable = !keys.is_empty();
            for key in keys {
                let v = index.intern(key);
                let posting = &mut index.postings[v as usize];
                // Places arrive in order, so a repeat can only be the last entry.
                if posting.last() != Some(&place) {
                    posting.push(place);
                }
            }

            if usable {
                index.indexed_places += 1;
            } else {
                index.skipped += 1;
                log::debug!(
                    "skipping place {} ({:?}): no usable name variant",
                    record.geonameid,
                    record.name
                );
            }
        }

        if index.skipped > 0 {
            log::warn!(
                "name index: skipped {} of {} records without a usable name",
                index.skipped,
                records.len()
            );
        }
        index
    }

    fn intern(&mut self, key: String) -> VariantIdx {
        if let Some(&v) = self.keys.get(&key) {
            return v;
        }
        let v = self.variants.len() as VariantIdx;
        self.variants.push(key.clone());
        self.postings.push(Vec::new());
        self.keys.insert(key, v);
        v
    }

    /// Exact lookup of an already normalized key.
    pub fn lookup(&self, key: &str) -> &[PlaceIdx] {
        self.variant_id(key)
            .map(|v| self.places_of(v))
            .unwrap_or(&[])
    }

    pub fn variant_id(&self, key: &str) -> Option<VariantIdx> {
        self.keys.get(key).copied()
    }

    pub fn variant(&self, v: VariantIdx) -> &str {
        &self.variants[v as usize]
    }

    pub fn places_of(&self, v: VariantIdx) -> &[PlaceIdx] {
        &self.postings[v as usize]
    }

    /// The distinct normalized variants: the unfiltered fuzzy pool.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    pub fn indexed_places(&self) -> usize {
        self.indexed_places
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Resolves an uppercase country code. Linear scan; there are only a
    /// few hundred codes.
    pub fn country_id(&self, code: &str) -> Option<CountryId> {
        self.countries
            .iter()
            .position(|c| c == code)
            .map(|i| i as CountryId)
    }

    pub fn place_in_country(&self, place: PlaceIdx, country: CountryId) -> bool {
        self.place_country[place as usize] == country
    }

    /// Variants belonging to at least one place of `country`, ascending.
    pub fn country_pool(&self, country: CountryId) -> &[VariantIdx] {
        let pools = self.country_pools.get_or_init(|| {
            let mut pools: Vec<Vec<VariantIdx>> = vec![Vec::new(); self.countries.len()];
            for (v, posting) in self.postings.iter().enumerate() {
                let v = v as VariantIdx;
                for &place in posting {
                    let pool = &mut pools[self.place_country[place as usize] as usize];
                    if pool.last() != Some(&v) {
                        pool.push(v);
                    }
                }
            }
            log::debug!("built candidate pools for {} countries", pools.len());
            pools
        });
        &pools[country as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<PlaceRecord> {
        vec![
            PlaceRecord::new(1, "Moscow", "RU")
                .with_ascii_name("Moscow")
                .with_alternate_names(["Москва", "Moskva", "moscow"]),
            PlaceRecord::new(2, "Moscow", "US").with_ascii_name("Moscow"),
            PlaceRecord::new(3, "", "RU").with_alternate_names(["--", " "]),
            PlaceRecord::new(4, "Kazan'", "RU").with_ascii_name("Kazan"),
        ]
    }

    #[test]
    fn shared_variant_maps_to_every_place() {
        let index = NameIndex::build(&catalog());
        assert_eq!(index.lookup("moscow"), &[0, 1]);
        assert_eq!(index.lookup("moskva"), &[0]);
        assert!(index.lookup("paris").is_empty());
    }

    #[test]
    fn duplicate_variants_insert_once() {
        let index = NameIndex::build(&catalog());
        // "Москва" transliterates to "moskva", already present.
        assert_eq!(index.lookup("moskva").len(), 1);
        assert_eq!(index.lookup("kazan"), &[3]);
        assert_eq!(index.variant_count(), 3);
    }

    #[test]
    fn every_normalized_variant_is_indexed() {
        let records = catalog();
        let index = NameIndex::build(&records);
        for (pos, record) in records.iter().enumerate() {
            for key in record.normalized_variants() {
                assert!(index.lookup(&key).contains(&(pos as PlaceIdx)), "{key}");
            }
        }
    }

    #[test]
    fn nameless_records_are_counted() {
        let index = NameIndex::build(&catalog());
        assert_eq!(index.skipped(), 1);
        assert_eq!(index.indexed_places(), 3);
    }

    #[test]
    fn country_pools_only_hold_own_variants() {
        let index = NameIndex::build(&catalog());
        let us = index.country_id("US").unwrap();
        let pool: Vec<&str> = index
            .country_pool(us)
            .iter()
            .map(|&v| index.variant(v))
            .collect();
        assert_eq!(pool, vec!["moscow"]);

        let ru = index.country_id("RU").unwrap();
        assert_eq!(index.country_pool(ru).len(), 3);
        assert!(index.country_id("DE").is_none());
    }

    #[test]
    fn empty_catalog_builds() {
        let index = NameIndex::build(&[]);
        assert_eq!(index.variant_count(), 0);
        assert!(index.lookup("anything").is_empty());
    }
}
