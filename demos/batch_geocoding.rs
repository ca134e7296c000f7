//! Batch geocoding example for geofuzz-rs
//!
//! Resolves a list of names in one call and prints the result as JSON.

use geofuzz_rs::prelude::*;

fn main() -> Result<()> {
    let geo = Geocoder::new(vec![
        PlaceRecord::new(611717, "Tbilisi", "GE")
            .with_alternate_names(["Tiflis", "თბილისი"])
            .with_coordinates(41.69411, 44.83368)
            .with_population(1_049_498),
        PlaceRecord::new(616052, "Yerevan", "AM")
            .with_alternate_names(["Erevan", "Ереван", "Երևան"])
            .with_coordinates(40.18111, 44.51361)
            .with_population(1_093_485),
        PlaceRecord::new(587084, "Baku", "AZ")
            .with_alternate_names(["Bakı", "Баку"])
            .with_coordinates(40.37767, 49.89201)
            .with_population(1_116_513),
    ]);

    let queries = ["Тбилиси", "Yerevan", "Bakou", "Atlantis"];
    let items = geo.geocode_batch(&queries, None, DEFAULT_THRESHOLD)?;

    let found = items.iter().filter(|i| i.is_found()).count();
    println!("Resolved {found} of {} names\n", items.len());

    match serde_json::to_string_pretty(&items) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("serialization failed: {e}"),
    }
    Ok(())
}
