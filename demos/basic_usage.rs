//! Basic usage example for geofuzz-rs
//!
//! This example demonstrates how to:
//! - Build a geocoder from an in-memory catalog
//! - Resolve exact and misspelled names in different scripts
//! - Restrict results to a country
//! - Load a downloaded dataset (when present)

use geofuzz_rs::prelude::*;

fn catalog() -> Vec<PlaceRecord> {
    vec![
        PlaceRecord::new(524901, "Moscow", "RU")
            .with_alternate_names(["Moskva", "Москва"])
            .with_coordinates(55.75222, 37.61556)
            .with_population(10_381_222),
        PlaceRecord::new(5601538, "Moscow", "US")
            .with_coordinates(46.73239, -117.00017)
            .with_population(25_435),
        PlaceRecord::new(498817, "Saint Petersburg", "RU")
            .with_alternate_names(["Sankt-Peterburg", "Санкт-Петербург"])
            .with_coordinates(59.93863, 30.31413)
            .with_population(5_351_935),
        PlaceRecord::new(1526384, "Almaty", "KZ")
            .with_alternate_names(["Alma-Ata", "Алматы"])
            .with_coordinates(43.25654, 76.92848)
            .with_population(2_000_900),
    ]
}

fn show(label: &str, hits: &[PlaceResult]) {
    println!("{label}");
    if hits.is_empty() {
        println!("  (no match)");
    }
    for h in hits {
        println!(
            "  {} ({}) id={} score={} pop={} via {:?}",
            h.name, h.country, h.geonameid, h.score, h.population, h.matched_as
        );
    }
}

fn main() -> Result<()> {
    println!("=== geofuzz-rs Basic Usage Example ===\n");

    let geo = Geocoder::new(catalog());
    println!("{geo}: {:?}\n", geo.stats());

    // Example 1: exact match, two places share the name
    let opts = GeocodeOptions::default().with_top_n(2);
    show("--- Example 1: \"Moscow\", top 2 ---", &geo.geocode("Moscow", &opts)?);

    // Example 2: Cyrillic with a typo
    show(
        "--- Example 2: \"Санкт Петирбург\" ---",
        &geo.geocode("Санкт Петирбург", &GeocodeOptions::default())?,
    );

    // Example 3: country filter
    let us = GeocodeOptions::default().with_country("us");
    show("--- Example 3: \"Moscow\" in US ---", &geo.geocode("Moscow", &us)?);

    // Example 4: threshold too strict for a misspelling
    let strict = GeocodeOptions::default().with_threshold(95);
    show("--- Example 4: \"Almatty\" @ 95 ---", &geo.geocode("Almatty", &strict)?);

    // Example 5: a real dataset, if one was downloaded with `geofuzz download`
    let load = LoadOptions::default().with_auto_download(false);
    match Geocoder::from_dataset(Dataset::Cis, &load) {
        Ok(big) => show("--- Example 5: CIS dataset ---", &big.geocode("Ташкент", &GeocodeOptions::default())?),
        Err(e) => println!("--- Example 5: skipped ({e}) ---"),
    }

    Ok(())
}
