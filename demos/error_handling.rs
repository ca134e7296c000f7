//! Error handling example for geofuzz-rs
//!
//! Shows which situations are errors (bad parameters, missing data) and
//! which are plain empty results (no match).

use geofuzz_rs::prelude::*;

fn main() {
    let geo = Geocoder::new(vec![PlaceRecord::new(1, "Kazan", "RU").with_population(1_243_500)]);

    // 1. No match is not an error
    match geo.geocode("Vladivostok", &GeocodeOptions::default()) {
        Ok(hits) if hits.is_empty() => println!("✓ no match -> empty result"),
        Ok(hits) => println!("unexpected hits: {hits:?}"),
        Err(e) => println!("✗ {e}"),
    }

    // 2. Out-of-range parameters are rejected, never clamped
    let bad = GeocodeOptions::default().with_threshold(120);
    match geo.geocode("Kazan", &bad) {
        Err(GeoError::InvalidThreshold(t)) => println!("✓ threshold {t} rejected"),
        other => println!("unexpected: {other:?}"),
    }
    let bad = GeocodeOptions::default().with_top_n(0);
    if let Err(e) = geo.geocode("Kazan", &bad) {
        println!("✓ {e}");
    }

    // 3. Unknown country: valid filter, empty result
    let opts = GeocodeOptions::default().with_country("ZZ");
    if let Ok(hits) = geo.geocode("Kazan", &opts) {
        println!("✓ unknown country -> {} results", hits.len());
    }

    // 4. Unknown dataset name
    if let Err(e) = "mars".parse::<Dataset>() {
        println!("✓ {e}");
    }

    // 5. Missing dataset with downloads disabled
    let dir = std::env::temp_dir().join("geofuzz-demo-empty");
    let opts = LoadOptions::default()
        .with_data_dir(&dir)
        .with_auto_download(false);
    match Geocoder::from_dataset(Dataset::Russia, &opts) {
        Err(e @ GeoError::DatasetNotFound { .. }) => println!("✓ {e}"),
        Err(e) => println!("other error: {e}"),
        Ok(_) => println!("dataset unexpectedly present in {}", dir.display()),
    }
}
