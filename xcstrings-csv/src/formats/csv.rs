//! Support for multi-language CSV tables.
//!
//! The first row is a header: an empty cell followed by one language code per
//! column. Every other row holds a key in the first column followed by that
//! key's translation in each language column:
//!
//! ```text
//! ,en,de,fr
//! farewell,Goodbye,Auf Wiedersehen,Au revoir
//! greeting,Hello,Hallo,Bonjour
//! ```
//!
//! The first language column is the source language when a table is turned
//! back into a [`Catalog`]. Whatever builds the column order must keep the
//! source language first (see [`crate::languages::sorted_languages`]).
//!
//! Only singular translations are supported, and neither translation states
//! nor extraction states survive the trip through a table.
use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    error::{Error, FormatError},
    traits::Parser,
    types::{Catalog, Entry, Localization},
};

/// One data row: a key and its cells, aligned with [`Format::languages`].
///
/// `values` may be shorter than the language list when a row was read with
/// missing trailing cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLanguageCSVRecord {
    pub key: String,
    pub values: Vec<String>,
}

impl MultiLanguageCSVRecord {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// Gets the cell for the language column at `index`, if the row has one.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

/// A whole CSV table: its language columns and its data rows in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub languages: Vec<String>,
    pub records: Vec<MultiLanguageCSVRecord>,
}

impl Format {
    /// Builds the table for `catalog` with one column per entry of `languages`.
    ///
    /// Rows are ordered by key. For each language column the cell is:
    /// - the key itself, when the column is the source language and the entry
    ///   has no localizations at all;
    /// - otherwise the entry's translation for that language, verbatim;
    /// - otherwise empty.
    pub fn from_catalog(catalog: &Catalog, languages: &[String]) -> Self {
        // `Catalog::entries` is a BTreeMap, so this walk is already in key order.
        let records = catalog
            .entries
            .iter()
            .map(|(key, entry)| {
                let values = languages
                    .iter()
                    .map(|lang| {
                        if *lang == catalog.source_language && entry.localizations.is_empty() {
                            key.clone()
                        } else {
                            entry.value(lang).unwrap_or_default().to_string()
                        }
                    })
                    .collect();
                MultiLanguageCSVRecord::new(key.clone(), values)
            })
            .collect();

        Format {
            languages: languages.to_vec(),
            records,
        }
    }

    /// Turns the table into a catalog, returning the language columns alongside.
    ///
    /// The first language column becomes the source language. Every entry gets
    /// the default extraction state and the catalog gets [`crate::types::FORMAT_VERSION`].
    /// Cells that are empty after trimming whitespace produce no localization;
    /// other cells are kept untrimmed.
    ///
    /// Fails on the first key that appears twice.
    pub fn into_catalog(self) -> Result<(Catalog, Vec<String>), Error> {
        let source_language = match self.languages.first() {
            Some(lang) if !lang.trim().is_empty() => lang.clone(),
            Some(_) => {
                return Err(Error::InvalidResource(
                    "the first language column (source language) has an empty header".into(),
                ));
            }
            None => return Err(FormatError::NoLanguages.into()),
        };

        let mut catalog = Catalog::new(source_language);

        let mut seen = HashSet::with_capacity(self.records.len());
        for record in self.records {
            if !seen.insert(record.key.clone()) {
                return Err(FormatError::DuplicateKey(record.key).into());
            }

            let mut entry = Entry::default();
            for (lang, value) in self.languages.iter().zip(record.values) {
                if !value.trim().is_empty() {
                    entry.add_localization(lang.clone(), Localization::translated(value));
                }
            }
            catalog.add_entry(record.key, entry);
        }

        tracing::debug!(
            entries = catalog.len(),
            languages = self.languages.len(),
            "rebuilt catalog from CSV table"
        );
        Ok((catalog, self.languages))
    }
}

impl Parser for Format {
    /// Reads the header and every data row.
    ///
    /// Rows may have any number of cells: cells past the last language column
    /// are dropped and missing cells are left out. Rows without any cell are
    /// skipped.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let rows = rdr
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::CsvParse)?;

        if rows.len() < 2 {
            return Err(FormatError::InsufficientRows { found: rows.len() }.into());
        }

        let languages: Vec<String> = rows[0].iter().skip(1).map(str::to_string).collect();
        if languages.is_empty() {
            return Err(FormatError::NoLanguages.into());
        }

        let records = rows[1..]
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| {
                let values = row
                    .iter()
                    .skip(1)
                    .take(languages.len())
                    .map(str::to_string)
                    .collect();
                MultiLanguageCSVRecord::new(&row[0], values)
            })
            .collect();

        Ok(Format { languages, records })
    }

    /// Writes the header row followed by one row per record.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new().from_writer(writer);

        let header = std::iter::once("").chain(self.languages.iter().map(String::as_str));
        wtr.write_record(header).map_err(Error::CsvParse)?;

        for record in &self.records {
            let cells = (0..self.languages.len()).map(|i| record.value_at(i).unwrap_or_default());
            wtr.write_record(std::iter::once(record.key.as_str()).chain(cells))
                .map_err(Error::CsvParse)?;
        }

        wtr.flush().map_err(Error::Io)?;
        Ok(())
    }

    /// Reads a file, decoding UTF-16 spreadsheet exports by their BOM.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);
        Self::from_reader(BufReader::new(decoder))
    }
}

impl TryFrom<Format> for Catalog {
    type Error = Error;

    fn try_from(format: Format) -> Result<Self, Self::Error> {
        format.into_catalog().map(|(catalog, _)| catalog)
    }
}
