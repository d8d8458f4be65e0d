//! The two document formats this crate converts between.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum used to name a format in messages.

pub mod csv;
pub mod xcstrings;

use std::fmt::{Display, Formatter};

// Reexporting the formats for easier access
pub use csv::{Format as CSVFormat, MultiLanguageCSVRecord};
pub use xcstrings::Format as XcstringsFormat;

/// Names one of the supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Xcode String Catalog, a JSON document.
    Xcstrings,
    /// Multi-language CSV table.
    CSV,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// # Example
/// ```rust
/// use xcstrings_csv::formats::FormatType;
/// assert_eq!(FormatType::Xcstrings.to_string(), "xcstrings");
/// assert_eq!(FormatType::CSV.to_string(), "csv");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Xcstrings => write!(f, "xcstrings"),
            FormatType::CSV => write!(f, "csv"),
        }
    }
}

impl FormatType {
    /// Short human label used in progress and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FormatType::Xcstrings => "JSON",
            FormatType::CSV => "CSV",
        }
    }
}
