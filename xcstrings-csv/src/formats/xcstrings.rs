//! Support for Xcode String Catalog (`.xcstrings`) documents.
//!
//! Only singular `stringUnit` translations are understood. A localization that
//! carries plural or device variations instead still counts as a language of
//! its entry, but with an empty value. Unknown fields are ignored, and a
//! `null` field reads the same as a missing one.
use serde::{Deserialize, Deserializer, Serialize};
use std::{
    collections::BTreeMap,
    io::{BufRead, Write},
};

use crate::{
    error::Error,
    traits::Parser,
    types::{self, Catalog, DEFAULT_EXTRACTION_STATE, Entry},
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strings: BTreeMap<String, Item>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
}

impl Format {
    /// Renders the document exactly as [`Parser::to_writer`] writes it.
    pub fn to_pretty_string(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::Serialization)
    }
}

impl Parser for Format {
    /// Parses the xcstrings format from a reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let format: Format = serde_json::from_reader(reader).map_err(Error::Parse)?;
        if format.source_language.trim().is_empty() {
            return Err(Error::InvalidResource(
                "No source language found: `sourceLanguage` is missing or empty".into(),
            ));
        }
        Ok(format)
    }

    /// Serializes the xcstrings format to a writer.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let document = self.to_pretty_string()?;
        writer.write_all(document.as_bytes()).map_err(Error::Io)
    }
}

impl From<Format> for Catalog {
    fn from(format: Format) -> Self {
        let entries = format
            .strings
            .into_iter()
            .map(|(key, item)| {
                let localizations = item
                    .localizations
                    .into_iter()
                    .map(|(lang, localization)| {
                        let unit = localization.string_unit.unwrap_or_else(|| {
                            tracing::warn!(
                                key = %key,
                                language = %lang,
                                "localization has no stringUnit, reading it as empty"
                            );
                            StringUnit::default()
                        });
                        (lang, types::Localization::new(unit.state, unit.value))
                    })
                    .collect();
                let entry = Entry {
                    extraction_state: item.extraction_state,
                    localizations,
                };
                (key, entry)
            })
            .collect();

        Catalog {
            source_language: format.source_language,
            version: format.version,
            entries,
        }
    }
}

impl From<&Catalog> for Format {
    fn from(catalog: &Catalog) -> Self {
        let strings = catalog
            .entries
            .iter()
            .map(|(key, entry)| {
                let localizations = entry
                    .localizations
                    .iter()
                    .map(|(lang, localization)| {
                        (
                            lang.clone(),
                            Localization::from(StringUnit {
                                state: localization.state.clone(),
                                value: localization.value.clone(),
                            }),
                        )
                    })
                    .collect();
                let item = Item {
                    extraction_state: entry.extraction_state.clone(),
                    localizations,
                };
                (key.clone(), item)
            })
            .collect();

        Format {
            source_language: catalog.source_language.clone(),
            strings,
            version: catalog.version.clone(),
        }
    }
}

fn default_extraction_state() -> String {
    DEFAULT_EXTRACTION_STATE.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_extraction_state<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_extraction_state))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(
        default = "default_extraction_state",
        deserialize_with = "null_as_default_extraction_state"
    )]
    pub extraction_state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub localizations: BTreeMap<String, Localization>,
}

impl Default for Item {
    fn default() -> Self {
        Item {
            extraction_state: default_extraction_state(),
            localizations: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_unit: Option<StringUnit>,
}

impl From<StringUnit> for Localization {
    fn from(string_unit: StringUnit) -> Self {
        Localization {
            string_unit: Some(string_unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct StringUnit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {r#"
        {
          "sourceLanguage" : "en",
          "strings" : {
            "farewell" : {
              "extractionState" : "manual"
            },
            "greeting" : {
              "comment" : "Shown on launch",
              "extractionState" : "extracted_with_value",
              "localizations" : {
                "en" : {
                  "stringUnit" : {
                    "state" : "translated",
                    "value" : "Hello"
                  }
                },
                "fr" : {
                  "stringUnit" : {
                    "state" : "needs_review",
                    "value" : "Bonjour"
                  }
                }
              }
            }
          },
          "version" : "1.0"
        }
    "#};

    #[test]
    fn test_parse_sample() {
        let catalog = Catalog::from(Format::from_str(SAMPLE).unwrap());
        assert_eq!(catalog.source_language, "en");
        assert_eq!(catalog.version, "1.0");
        assert_eq!(catalog.len(), 2);

        let farewell = catalog.get("farewell").unwrap();
        assert_eq!(farewell.extraction_state, "manual");
        assert!(farewell.localizations.is_empty());

        let greeting = catalog.get("greeting").unwrap();
        assert_eq!(greeting.extraction_state, "extracted_with_value");
        assert_eq!(greeting.value("en"), Some("Hello"));
        assert_eq!(greeting.localizations["fr"].state, "needs_review");
        assert_eq!(greeting.value("fr"), Some("Bonjour"));
    }

    #[test]
    fn test_missing_extraction_state_defaults_to_manual() {
        let json = r#"{"sourceLanguage":"en","strings":{"k":{}},"version":"1.0"}"#;
        let catalog = Catalog::from(Format::from_str(json).unwrap());
        assert_eq!(catalog.get("k").unwrap().extraction_state, "manual");
    }

    #[test]
    fn test_missing_strings_is_empty_catalog() {
        let catalog = Catalog::from(Format::from_str(r#"{"sourceLanguage":"de"}"#).unwrap());
        assert!(catalog.is_empty());
        assert_eq!(catalog.languages(), vec!["de"]);
    }

    #[test]
    fn test_variations_keep_their_language_with_empty_value() {
        let json = indoc! {r#"
            {
              "sourceLanguage": "en",
              "strings": {
                "files": {
                  "localizations": {
                    "en": { "variations": { "plural": { "one": { "stringUnit": { "state": "translated", "value": "%lld file" } } } } },
                    "fr": { "stringUnit": { "state": "translated", "value": "fichiers" } }
                  }
                }
              },
              "version": "1.0"
            }
        "#};
        let catalog = Catalog::from(Format::from_str(json).unwrap());
        let files = catalog.get("files").unwrap();
        assert_eq!(files.localizations.len(), 2);
        assert_eq!(files.value("en"), Some(""));
        assert_eq!(files.localizations["en"].state, "");
        assert_eq!(files.value("fr"), Some("fichiers"));
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let json = indoc! {r#"
            {
              "sourceLanguage": "en",
              "strings": {
                "a": { "extractionState": null, "localizations": null },
                "b": { "localizations": { "fr": { "stringUnit": { "state": null, "value": "Salut" } } } }
              },
              "version": null
            }
        "#};
        let catalog = Catalog::from(Format::from_str(json).unwrap());
        assert_eq!(catalog.version, "");
        let a = catalog.get("a").unwrap();
        assert_eq!(a.extraction_state, "manual");
        assert!(a.localizations.is_empty());
        let b = catalog.get("b").unwrap();
        assert_eq!(b.localizations["fr"].state, "");
        assert_eq!(b.value("fr"), Some("Salut"));

        let catalog = Catalog::from(Format::from_str(r#"{"sourceLanguage":"de","strings":null}"#).unwrap());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_null_source_language_rejected() {
        let err = Format::from_str(r#"{"sourceLanguage":null,"strings":{}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidResource(_)));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Format::from_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_non_object_root_is_parse_error() {
        let err = Format::from_str(r#"["sourceLanguage", "en"]"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let err = Format::from_str(r#"{"sourceLanguage":"en","strings":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_missing_source_language_rejected() {
        let err = Format::from_str(r#"{"strings":{},"version":"1.0"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidResource(_)));

        let err = Format::from_str(r#"{"sourceLanguage":"  ","strings":{}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidResource(_)));
    }

    #[test]
    fn test_writer_output_shape() {
        let mut catalog = Catalog::new("en");
        catalog.add_entry("b", Entry::default());
        let mut entry = Entry::default();
        entry.add_localization("fr", types::Localization::translated("Salut"));
        catalog.add_entry("a", entry);

        let mut out = Vec::new();
        Format::from(&catalog).to_writer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = indoc! {r#"
            {
              "sourceLanguage": "en",
              "strings": {
                "a": {
                  "extractionState": "manual",
                  "localizations": {
                    "fr": {
                      "stringUnit": {
                        "state": "translated",
                        "value": "Salut"
                      }
                    }
                  }
                },
                "b": {
                  "extractionState": "manual"
                }
              },
              "version": "1.0"
            }"#};
        assert_eq!(text, expected);
    }

    #[test]
    fn test_catalog_format_catalog_is_lossless() {
        let catalog = Catalog::from(Format::from_str(SAMPLE).unwrap());
        let text = Format::from(&catalog).to_pretty_string().unwrap();
        let again = Catalog::from(Format::from_str(&text).unwrap());
        assert_eq!(catalog, again);
    }
}
