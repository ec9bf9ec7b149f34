//! A build-time tool that turns relational CSV name tables into per-language JSON dictionaries.
//!
//! For every supported language and every namespace (abilities, items, ...), the origin table
//! `data/<origin>.csv` is joined with its localization table and written to
//! `locales/<lang>/<origin>.json` as a flat `identifier -> name` object.
pub mod generate;
pub mod join;
pub mod output_scripts;
pub mod types;
pub mod utils;
