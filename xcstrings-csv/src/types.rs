//! The in-memory catalog model shared by every conversion stage.
//!
//! A [`Catalog`] is built in one go by a reader and handed to a writer; nothing
//! mutates it in between. Entries and localizations are kept in ordered maps,
//! so iterating a catalog always yields keys in ascending order.

use std::collections::BTreeMap;

/// Extraction state given to entries that carry none, and to every entry read from CSV.
pub const DEFAULT_EXTRACTION_STATE: &str = "manual";

/// Translation state given to every localization read from CSV.
pub const TRANSLATED_STATE: &str = "translated";

/// Format version written into catalogs rebuilt from CSV.
pub const FORMAT_VERSION: &str = "1.0";

/// Root of the model: every key, language and translation of one string catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    /// The catalog's original language, e.g. `"en"`.
    pub source_language: String,
    /// Format version string, e.g. `"1.0"`.
    pub version: String,
    /// Entries keyed by their string key.
    pub entries: BTreeMap<String, Entry>,
}

impl Catalog {
    /// Creates an empty catalog for `source_language` at [`FORMAT_VERSION`].
    pub fn new(source_language: impl Into<String>) -> Self {
        Catalog {
            source_language: source_language.into(),
            version: FORMAT_VERSION.to_string(),
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an entry, returning the one previously stored under `key`.
    pub fn add_entry(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), entry)
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every language in the catalog, source language first.
    ///
    /// See [`crate::languages::sorted_languages`].
    pub fn languages(&self) -> Vec<String> {
        crate::languages::sorted_languages(self)
    }
}

/// One translatable key and its translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// How the string was discovered (`"manual"`, `"stale"`, ...). Not a translation status.
    pub extraction_state: String,
    /// Translations keyed by language code. May be empty.
    pub localizations: BTreeMap<String, Localization>,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            extraction_state: DEFAULT_EXTRACTION_STATE.to_string(),
            localizations: BTreeMap::new(),
        }
    }
}

impl Entry {
    /// Creates an entry with the given extraction state and no translations.
    pub fn with_extraction_state(extraction_state: impl Into<String>) -> Self {
        Entry {
            extraction_state: extraction_state.into(),
            localizations: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the translation for `language`.
    pub fn add_localization(&mut self, language: impl Into<String>, localization: Localization) {
        self.localizations.insert(language.into(), localization);
    }

    /// Returns the translated value for `language`, if any.
    pub fn value(&self, language: &str) -> Option<&str> {
        self.localizations
            .get(language)
            .map(|localization| localization.value.as_str())
    }
}

/// One language's translation of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localization {
    /// Translation state, e.g. `"translated"`.
    pub state: String,
    pub value: String,
}

impl Localization {
    pub fn new(state: impl Into<String>, value: impl Into<String>) -> Self {
        Localization {
            state: state.into(),
            value: value.into(),
        }
    }

    /// A localization in the [`TRANSLATED_STATE`].
    pub fn translated(value: impl Into<String>) -> Self {
        Self::new(TRANSLATED_STATE, value)
    }
}
