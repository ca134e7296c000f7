//! geofuzz: command-line interface for geofuzz-core
//!
//! Resolves place names against a locally stored GeoNames dataset.
//!
//! Usage examples
//! --------------
//!
//! - Fetch the default (CIS) dataset
//!   $ geofuzz download
//!
//! - Geocode one name, best three candidates
//!   $ geofuzz geocode "Санкт Петирбург" --top-n 3
//!
//! - Restrict to a country and emit JSON
//!   $ geofuzz geocode Moscow --country US --json
//!
//! - Geocode a list, one name per line
//!   $ geofuzz batch places.txt
//!   $ cat places.txt | geofuzz batch --json
//!
//! - Show datasets and where they live
//!   $ geofuzz info
//!
//! Set `RUST_LOG=info` (or `debug`) to see loading and matching details.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geofuzz_core::{
    available_datasets, BatchItem, Dataset, GeocodeOptions, Geocoder, LoadOptions, PlaceResult,
    PlaceSearch,
};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = CliArgs::parse();

    let dataset: Dataset = args.dataset.parse()?;
    let mut opts = LoadOptions::default().with_auto_download(!args.no_download);
    if let Some(dir) = &args.data_dir {
        opts = opts.with_data_dir(dir);
    }
    if let Some(input) = &args.input {
        opts = opts.with_catalog_path(input);
    }

    match args.command {
        Commands::Download { dataset: name } => {
            let target = match name {
                Some(n) => n.parse()?,
                None => dataset,
            };
            download(target, &opts.data_dir())?;
        }

        Commands::Geocode {
            query,
            country,
            threshold,
            top_n,
            json,
        } => {
            let geo = load(dataset, &opts)?;
            let mut q = GeocodeOptions::default()
                .with_threshold(threshold)
                .with_top_n(top_n);
            if let Some(c) = country {
                q = q.with_country(c);
            }
            let hits = geo.geocode(&query, &q)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("No match for: {query}");
            } else {
                for hit in &hits {
                    print_hit(hit);
                }
            }
        }

        Commands::Batch {
            file,
            country,
            threshold,
            json,
        } => {
            let queries = read_queries(file.as_deref())?;
            let geo = load(dataset, &opts)?;
            let items = geo.geocode_batch(&queries, country.as_deref(), threshold)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in &items {
                    print_item(item);
                }
            }
        }

        Commands::Info => {
            let dir = opts.data_dir();
            println!("Data directory: {}", dir.display());
            println!("Datasets:");
            for (name, description) in available_datasets() {
                let d: Dataset = name.parse()?;
                let status = if d.is_downloaded(&dir) {
                    "downloaded"
                } else {
                    "missing"
                };
                println!("  {name:<6} {description:<45} [{status}] {}", d.catalog_path(&dir).display());
            }
        }
    }

    Ok(())
}

fn load(dataset: Dataset, opts: &LoadOptions) -> anyhow::Result<Geocoder> {
    let geo = Geocoder::from_dataset(dataset, opts)?;
    log::info!("{geo}");
    Ok(geo)
}

#[cfg(feature = "download")]
fn download(dataset: Dataset, data_dir: &Path) -> anyhow::Result<()> {
    let path = geofuzz_core::loader::fetch::download(dataset, data_dir)?;
    println!("Dataset '{dataset}' ready at {}", path.display());
    Ok(())
}

#[cfg(not(feature = "download"))]
fn download(dataset: Dataset, _data_dir: &Path) -> anyhow::Result<()> {
    anyhow::bail!("cannot download '{dataset}': geofuzz was built without the 'download' feature")
}

/// Non-blank lines from `file`, or from stdin.
fn read_queries(file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            queries.push(line.to_owned());
        }
    }
    Ok(queries)
}

fn print_hit(hit: &PlaceResult) {
    println!(
        "{} ({}) [{}] {:.5}, {:.5}  pop {}  score {}  via \"{}\"",
        hit.name, hit.country, hit.geonameid, hit.lat, hit.lon, hit.population, hit.score, hit.matched_as
    );
}

fn print_item(item: &BatchItem) {
    match item.place() {
        Some(hit) => println!(
            "{}\t{}\t{}\t{}\t{:.5}\t{:.5}\t{}",
            item.query, hit.name, hit.country, hit.geonameid, hit.lat, hit.lon, hit.score
        ),
        None => println!("{}\tNOT FOUND", item.query),
    }
}
