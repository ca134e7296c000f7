// crates/geofuzz-core/src/matcher.rs

//! # Matcher
//!
//! Exact lookup first; fuzzy scoring over the candidate pool only when the
//! normalized query is not an indexed variant at all.

use crate::fuzz::Scorer;
use crate::index::{CountryId, NameIndex, PlaceIdx, VariantIdx};
use crate::model::EXACT_SCORE;
use rayon::prelude::*;
use std::collections::HashMap;

/// A place that survived matching, with the best score it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub place: PlaceIdx,
    pub score: u8,
    /// Variant that produced `score`.
    pub variant: VariantIdx,
}

/// Country restriction resolved against the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryFilter {
    Any,
    Only(CountryId),
    /// The requested code does not occur in the catalog.
    Unknown,
}

impl CountryFilter {
    /// `code` must already be trimmed and uppercased.
    pub fn resolve(index: &NameIndex, code: Option<&str>) -> Self {
        match code {
            None => CountryFilter::Any,
            Some(code) => index
                .country_id(code)
                .map_or(CountryFilter::Unknown, CountryFilter::Only),
        }
    }

    fn admits(self, index: &NameIndex, place: PlaceIdx) -> bool {
        match self {
            CountryFilter::Any => true,
            CountryFilter::Only(cid) => index.place_in_country(place, cid),
            CountryFilter::Unknown => false,
        }
    }
}

/// Resolves a normalized query into unordered candidates.
///
/// - exact phase: if `key` is an indexed variant, its places (restricted to
///   `filter`) are returned with score 100, whatever the threshold;
/// - fuzzy phase: otherwise every variant of the pool is scored and those
///   at or above `threshold` contribute their places, each place keeping
///   its highest score.
///
/// The exact/fuzzy decision depends on the key alone, never on the filter,
/// so a filtered result is always a subset of the unfiltered one.
pub fn resolve(index: &NameIndex, key: &str, filter: CountryFilter, threshold: u8) -> Vec<Candidate> {
    if key.is_empty() {
        return Vec::new();
    }

    if let Some(v) = index.variant_id(key) {
        return index
            .places_of(v)
            .iter()
            .copied()
            .filter(|&place| filter.admits(index, place))
            .map(|place| Candidate {
                place,
                score: EXACT_SCORE,
                variant: v,
            })
            .collect();
    }

    let scorer = Scorer::new(key);
    let hits: Vec<(VariantIdx, u8)> = match filter {
        CountryFilter::Unknown => return Vec::new(),
        CountryFilter::Any => score_pool(
            (0..index.variant_count() as VariantIdx).into_par_iter(),
            index,
            &scorer,
            threshold,
        ),
        CountryFilter::Only(cid) => score_pool(
            index.country_pool(cid).par_iter().copied(),
            index,
            &scorer,
            threshold,
        ),
    };

    let mut best: HashMap<PlaceIdx, Candidate> = HashMap::new();
    for (variant, score) in hits {
        for &place in index.places_of(variant) {
            if !filter.admits(index, place) {
                continue;
            }
            let cand = Candidate {
                place,
                score,
                variant,
            };
            best.entry(place)
                .and_modify(|cur| {
                    if (score, std::cmp::Reverse(variant)) > (cur.score, std::cmp::Reverse(cur.variant)) {
                        *cur = cand;
                    }
                })
                .or_insert(cand);
        }
    }
    best.into_values().collect()
}

fn score_pool<I>(pool: I, index: &NameIndex, scorer: &Scorer, threshold: u8) -> Vec<(VariantIdx, u8)>
where
    I: ParallelIterator<Item = VariantIdx>,
{
    pool.filter_map(|v| {
        let score = scorer.score(index.variant(v));
        (score >= threshold).then_some((v, score))
    })
    .collect()
}
