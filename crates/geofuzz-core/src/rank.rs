// crates/geofuzz-core/src/rank.rs
use crate::matcher::Candidate;
use crate::model::PlaceRecord;
use std::cmp::Ordering;

/// Orders candidates best first and keeps at most `top_n` of them.
///
/// Sort key: score (desc), population (desc), geonameid (asc), catalog
/// position (asc). The last key only matters for catalogs that repeat an
/// id; it makes the order total, so output never depends on input order.
pub fn rank(mut candidates: Vec<Candidate>, catalog: &[PlaceRecord], top_n: usize) -> Vec<Candidate> {
    candidates.sort_unstable_by(|a, b| compare(a, b, catalog));
    candidates.truncate(top_n);
    candidates
}

fn compare(a: &Candidate, b: &Candidate, catalog: &[PlaceRecord]) -> Ordering {
    let pa = &catalog[a.place as usize];
    let pb = &catalog[b.place as usize];
    b.score
        .cmp(&a.score)
        .then_with(|| pb.population.cmp(&pa.population))
        .then_with(|| pa.geonameid.cmp(&pb.geonameid))
        .then_with(|| a.place.cmp(&b.place))
}
