//! Language discovery for a [`Catalog`].
//!
//! The order produced here becomes the CSV column order, and the CSV reader
//! treats the first language column as the source language. Keep the source
//! language first.

use std::collections::BTreeSet;

use crate::types::Catalog;

/// Returns every language code in `catalog`: the source language first, then
/// every other language found in any entry's localizations in ascending order.
///
/// Codes are deduplicated. An empty source language is not a language; a
/// catalog with no source language and no localizations yields an empty list,
/// which callers must reject.
///
/// # Example
///
/// ```rust
/// use xcstrings_csv::{Catalog, Entry, Localization, languages::sorted_languages};
///
/// let mut catalog = Catalog::new("en");
/// let mut entry = Entry::default();
/// entry.add_localization("fr", Localization::translated("Bonjour"));
/// entry.add_localization("de", Localization::translated("Hallo"));
/// catalog.add_entry("hello", entry);
///
/// assert_eq!(sorted_languages(&catalog), vec!["en", "de", "fr"]);
/// ```
pub fn sorted_languages(catalog: &Catalog) -> Vec<String> {
    let source = catalog.source_language.as_str();

    let others: BTreeSet<&str> = catalog
        .entries
        .values()
        .flat_map(|entry| entry.localizations.keys())
        .map(String::as_str)
        .filter(|lang| *lang != source)
        .collect();

    let mut languages = Vec::with_capacity(others.len() + 1);
    if !source.is_empty() {
        languages.push(source.to_string());
    }
    languages.extend(others.into_iter().map(str::to_string));
    languages
}
