// crates/geofuzz-core/src/raw.rs
use crate::model::PlaceRecord;
use crate::text::split_alternate_names;
use serde::{Deserialize, Serialize};

/// Raw catalog row as it appears in the prepared CSV (and, column by column,
/// in GeoNames dumps). Every field is kept as text so one bad cell skips the
/// row instead of failing the whole file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceRow {
    pub geonameid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub asciiname: String,
    #[serde(default)]
    pub alternatenames: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub feature_code: Option<String>,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Column order of the prepared CSV.
pub const PREPARED_COLUMNS: [&str; 10] = [
    "geonameid",
    "name",
    "asciiname",
    "alternatenames",
    "latitude",
    "longitude",
    "feature_code",
    "country_code",
    "population",
    "timezone",
];

/// Parses an `Option<String>` into an `Option<f64>`, trimming first.
pub fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

/// Population cells are integers, but float renderings (`"1234.0"`) from
/// spreadsheet round trips are accepted. Anything else counts as unknown.
fn parse_population(s: &Option<String>) -> u64 {
    let Some(v) = s.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };
    v.parse::<u64>()
        .ok()
        .or_else(|| {
            v.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
        .unwrap_or(0)
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

impl PlaceRow {
    /// Converts into a record, or `None` when the id or coordinates are unusable.
    pub fn into_record(self) -> Option<PlaceRecord> {
        let geonameid = self.geonameid.trim().parse::<u64>().ok()?;
        let latitude = parse_opt_f64(&self.latitude).filter(|v| (-90.0..=90.0).contains(v))?;
        let longitude = parse_opt_f64(&self.longitude).filter(|v| (-180.0..=180.0).contains(v))?;
        let population = parse_population(&self.population);

        Some(PlaceRecord {
            geonameid,
            name: self.name.trim().to_owned(),
            ascii_name: self.asciiname.trim().to_owned(),
            alternate_names: split_alternate_names(&self.alternatenames),
            latitude,
            longitude,
            country_code: self.country_code.trim().to_ascii_uppercase(),
            population,
            feature_code: non_blank(self.feature_code),
            timezone: non_blank(self.timezone),
        })
    }
}

impl From<&PlaceRecord> for PlaceRow {
    fn from(r: &PlaceRecord) -> Self {
        Self {
            geonameid: r.geonameid.to_string(),
            name: r.name.clone(),
            asciiname: r.ascii_name.clone(),
            alternatenames: r.alternate_names.join(","),
            latitude: Some(r.latitude.to_string()),
            longitude: Some(r.longitude.to_string()),
            feature_code: r.feature_code.clone(),
            country_code: r.country_code.clone(),
            population: Some(r.population.to_string()),
            timezone: r.timezone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> PlaceRow {
        PlaceRow {
            geonameid: "524901".into(),
            name: "Moscow".into(),
            asciiname: "Moscow".into(),
            alternatenames: "Moskva,Москва".into(),
            latitude: Some("55.75222".into()),
            longitude: Some("37.61556".into()),
            feature_code: Some("PPLC".into()),
            country_code: "ru".into(),
            population: Some("10381222".into()),
            timezone: Some("Europe/Moscow".into()),
        }
    }

    #[test]
    fn converts_well_formed_row() {
        let rec = row().into_record().unwrap();
        assert_eq!(rec.geonameid, 524901);
        assert_eq!(rec.alternate_names, vec!["Moskva", "Москва"]);
        assert_eq!(rec.country_code, "RU");
        assert_eq!(rec.population, 10_381_222);
        assert_eq!(rec.feature_code.as_deref(), Some("PPLC"));
    }

    #[test]
    fn rejects_bad_id_or_coordinates() {
        assert!(PlaceRow { geonameid: "x".into(), ..row() }.into_record().is_none());
        assert!(PlaceRow { latitude: None, ..row() }.into_record().is_none());
        assert!(PlaceRow { longitude: Some("200".into()), ..row() }.into_record().is_none());
    }

    #[test]
    fn lenient_population() {
        let pop = |v: &str| PlaceRow { population: Some(v.into()), ..row() }.into_record().unwrap().population;
        assert_eq!(pop("1234.0"), 1234);
        assert_eq!(pop(""), 0);
        assert_eq!(pop("-5"), 0);
    }
}
