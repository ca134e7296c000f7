// crates/geofuzz-core/src/loader/geonames.rs

//! Parsers for GeoNames dumps and the prepared catalog CSV.

use crate::error::{GeoError, Result};
use crate::model::PlaceRecord;
use crate::raw::PlaceRow;
use std::io::{Read, Write};

// Column positions in a GeoNames dump (`allCountries.txt` layout).
const COL_GEONAMEID: usize = 0;
const COL_NAME: usize = 1;
const COL_ASCIINAME: usize = 2;
const COL_ALTERNATENAMES: usize = 3;
const COL_LATITUDE: usize = 4;
const COL_LONGITUDE: usize = 5;
const COL_FEATURE_CLASS: usize = 6;
const COL_FEATURE_CODE: usize = 7;
const COL_COUNTRY_CODE: usize = 8;
const COL_POPULATION: usize = 14;
const COL_TIMEZONE: usize = 17;

/// Feature class of populated places (cities, towns, villages).
pub const POPULATED_PLACE: &str = "P";

/// Row accounting for one parsed source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    pub kept: usize,
    /// Rows with an unparseable id or coordinates, or too few columns.
    pub malformed: usize,
    /// Dump rows that are not populated places.
    pub filtered: usize,
}

impl LoadReport {
    fn log(&self, source: &str) {
        if self.malformed > 0 {
            log::warn!("{source}: skipped {} malformed rows", self.malformed);
        }
        log::info!(
            "{source}: kept {} of {} rows ({} filtered, {} malformed)",
            self.kept,
            self.rows,
            self.filtered,
            self.malformed
        );
    }
}

/// I/O failures abort the load; anything else only spoils the current row.
fn row_error(e: csv::Error, report: &mut LoadReport) -> Result<()> {
    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
        return Err(GeoError::Csv(e));
    }
    log::debug!("skipping unreadable row: {e}");
    report.malformed += 1;
    Ok(())
}

fn cell(record: &csv::StringRecord, col: usize) -> Option<String> {
    record.get(col).map(str::to_owned)
}

/// Reads a raw GeoNames dump: tab separated, no header, 19 columns.
///
/// Only populated places (feature class `P`) are kept.
pub fn read_dump<R: Read>(reader: R) -> Result<(Vec<PlaceRecord>, LoadReport)> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut report = LoadReport::default();
    let mut out = Vec::new();

    for result in rdr.records() {
        report.rows += 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_error(e, &mut report)?;
                continue;
            }
        };
        if record.len() <= COL_POPULATION {
            report.malformed += 1;
            continue;
        }
        if record.get(COL_FEATURE_CLASS) != Some(POPULATED_PLACE) {
            report.filtered += 1;
            continue;
        }

        let row = PlaceRow {
            geonameid: cell(&record, COL_GEONAMEID).unwrap_or_default(),
            name: cell(&record, COL_NAME).unwrap_or_default(),
            asciiname: cell(&record, COL_ASCIINAME).unwrap_or_default(),
            alternatenames: cell(&record, COL_ALTERNATENAMES).unwrap_or_default(),
            latitude: cell(&record, COL_LATITUDE),
            longitude: cell(&record, COL_LONGITUDE),
            feature_code: cell(&record, COL_FEATURE_CODE),
            country_code: cell(&record, COL_COUNTRY_CODE).unwrap_or_default(),
            population: cell(&record, COL_POPULATION),
            timezone: cell(&record, COL_TIMEZONE),
        };
        match row.into_record() {
            Some(place) => {
                report.kept += 1;
                out.push(place);
            }
            None => report.malformed += 1,
        }
    }

    report.log("geonames dump");
    Ok((out, report))
}

/// Reads the prepared catalog CSV (header row, see [`crate::raw::PREPARED_COLUMNS`]).
pub fn read_prepared_csv<R: Read>(reader: R) -> Result<(Vec<PlaceRecord>, LoadReport)> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut report = LoadReport::default();
    let mut out = Vec::new();

    for result in rdr.deserialize::<PlaceRow>() {
        report.rows += 1;
        match result {
            Ok(row) => match row.into_record() {
                Some(place) => {
                    report.kept += 1;
                    out.push(place);
                }
                None => report.malformed += 1,
            },
            Err(e) => row_error(e, &mut report)?,
        }
    }

    report.log("catalog csv");
    Ok((out, report))
}

/// Writes records in the prepared catalog CSV layout.
pub fn write_prepared_csv<W: Write>(writer: W, records: &[PlaceRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(PlaceRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DUMP: &str = "\
524901\tMoscow\tMoscow\tMoskva,Москва\t55.75222\t37.61556\tP\tPPLC\tRU\t\t48\t\t\t\t10381222\t\t144\tEurope/Moscow\t2022-12-10
5601538\tMoscow\tMoscow\t\t46.73239\t-117.00017\tP\tPPL\tUS\t\tID\t057\t\t\t25435\t786\t790\tAmerica/Los_Angeles\t2017-03-09
2017370\tRussia\tRussia\tRossiya\t60\t100\tA\tPCLI\tRU\t\t00\t\t\t\t140702000\t\t125\tEurope/Moscow\t2022-08-22
bad\tNowhere\tNowhere\t\t0\t0\tP\tPPL\tXX\t\t\t\t\t\t0\t\t0\t\t2020-01-01
1\ttoo\tshort
";

    #[test]
    fn dump_keeps_populated_places() {
        let (records, report) = read_dump(Cursor::new(DUMP)).unwrap();
        assert_eq!(
            report,
            LoadReport {
                rows: 5,
                kept: 2,
                malformed: 2,
                filtered: 1
            }
        );
        assert_eq!(records[0].geonameid, 524901);
        assert_eq!(records[0].alternate_names, vec!["Moskva", "Москва"]);
        assert_eq!(records[0].timezone.as_deref(), Some("Europe/Moscow"));
        assert_eq!(records[1].country_code, "US");
        assert_eq!(records[1].population, 25_435);
    }

    #[test]
    fn prepared_csv_round_trips() {
        let (records, _) = read_dump(Cursor::new(DUMP)).unwrap();
        let mut buf = Vec::new();
        write_prepared_csv(&mut buf, &records).unwrap();

        let header = String::from_utf8(buf.clone()).unwrap();
        assert!(header.starts_with(&crate::raw::PREPARED_COLUMNS.join(",")));

        let (back, report) = read_prepared_csv(Cursor::new(buf)).unwrap();
        assert_eq!(report.kept, 2);
        assert_eq!(back, records);
    }

    #[test]
    fn prepared_csv_skips_broken_rows() {
        let csv = "\
geonameid,name,asciiname,alternatenames,latitude,longitude,feature_code,country_code,population,timezone
1,Kazan,Kazan,\"Kazan',Казань\",55.79,49.12,PPLA,RU,1243500,Europe/Moscow
2,Broken,Broken,,north,49,PPL,RU,1,
3,Vyborg,Vyborg,,60.71,28.75,PPL,RU,,
";
        let (records, report) = read_prepared_csv(Cursor::new(csv)).unwrap();
        assert_eq!(report.malformed, 1);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].alternate_names, vec!["Kazan'", "Казань"]);
        assert_eq!(records[1].population, 0);
        assert_eq!(records[1].timezone, None);
    }
}
