#![forbid(unsafe_code)]
//! Convert Xcode String Catalogs (`.xcstrings`) to multi-language CSV tables and back.
//!
//! Both directions go through one in-memory model, [`Catalog`]: a source
//! language, a format version and a key-sorted map of entries, each holding
//! its translations per language.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xcstrings_csv::{csv_to_json, json_to_csv};
//!
//! // One column per language, source language first, one row per key.
//! json_to_csv("Localizable.xcstrings", "translations.csv")?;
//!
//! // And back again, after translators filled in the table.
//! let report = csv_to_json("translations.csv", "Localizable.xcstrings")?;
//! println!("languages: {:?}", report.languages);
//! # Ok::<(), xcstrings_csv::Error>(())
//! ```
//!
//! # What survives a round trip
//!
//! Keys and translated values do. Translation states come back as
//! `"translated"`, extraction states come back as `"manual"`, and
//! untranslated cells (empty or whitespace-only) come back as missing
//! translations.

pub mod converter;
pub mod error;
pub mod formats;
pub mod languages;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{ConversionReport, ConvertConfig, Direction, csv_to_json, json_to_csv, run},
    error::{Error, ErrorKind, FormatError},
    formats::FormatType,
    languages::sorted_languages,
    types::{Catalog, Entry, Localization},
};
