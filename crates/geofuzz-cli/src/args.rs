use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geofuzz
#[derive(Debug, Parser)]
#[command(
    name = "geofuzz",
    version,
    about = "Offline fuzzy geocoder for multilingual place names (GeoNames)"
)]
pub struct CliArgs {
    /// Dataset to load: ru, cis or world
    #[arg(short = 'd', long = "dataset", global = true, default_value = "cis")]
    pub dataset: String,

    /// Directory holding downloaded datasets (default: $GEOFUZZ_DATA_DIR or ~/.geofuzz/data)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Explicit catalog file (GeoNames .txt dump or prepared .csv, optionally .gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Fail instead of downloading a missing dataset
    #[arg(long = "no-download", global = true)]
    pub no_download: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download and prepare a dataset
    Download {
        /// Dataset name (defaults to --dataset)
        dataset: Option<String>,
    },

    /// Geocode a single place name
    Geocode {
        /// Place name in any script (e.g. "Санкт-Петербург")
        query: String,

        /// ISO2 country filter (e.g. RU)
        #[arg(short = 'c', long = "country")]
        country: Option<String>,

        /// Minimum similarity score, 0-100
        #[arg(short = 't', long = "threshold", default_value_t = geofuzz_core::DEFAULT_THRESHOLD)]
        threshold: u8,

        /// Number of results to show
        #[arg(short = 'n', long = "top-n", default_value_t = 1)]
        top_n: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Geocode one place name per line from a file (or stdin)
    Batch {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// ISO2 country filter (e.g. RU)
        #[arg(short = 'c', long = "country")]
        country: Option<String>,

        /// Minimum similarity score, 0-100
        #[arg(short = 't', long = "threshold", default_value_t = geofuzz_core::DEFAULT_THRESHOLD)]
        threshold: u8,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show available datasets and their download status
    Info,
}
