//! geofuzz-cli
//! ===========
//!
//! Command-line interface for the `geofuzz-core` offline geocoder.
//!
//! This crate primarily provides a binary (`geofuzz`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geofuzz-cli
//! geofuzz download cis
//! geofuzz geocode "Санкт-Петербург"
//! geofuzz geocode Moscow --top-n 3 --json
//! geofuzz batch cities.txt --country RU
//! ```
//!
//! For programmatic access use the [`geofuzz-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
