//! Conversion pipelines between string catalogs and CSV tables.
//!
//! Each pipeline reads one whole document into a [`Catalog`], then writes one
//! whole document from it:
//!
//! - [`json_to_csv`]: catalog reader, language enumerator, table writer.
//! - [`csv_to_json`]: table reader, catalog writer.
//!
//! Every failure is wrapped in [`Error::Conversion`] naming the step and the
//! file involved. Nothing is shared between runs.

use std::{
    fmt::{Display, Formatter},
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    formats::{CSVFormat, FormatType, XcstringsFormat},
    traits::Parser,
    types::Catalog,
};

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// String catalog in, CSV table out.
    JsonToCsv,
    /// CSV table in, string catalog out.
    CsvToJson,
}

impl Direction {
    /// Format of the document read by this direction.
    pub fn input_format(&self) -> FormatType {
        match self {
            Direction::JsonToCsv => FormatType::Xcstrings,
            Direction::CsvToJson => FormatType::CSV,
        }
    }

    /// Format of the document written by this direction.
    pub fn output_format(&self) -> FormatType {
        match self {
            Direction::JsonToCsv => FormatType::CSV,
            Direction::CsvToJson => FormatType::Xcstrings,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::JsonToCsv => write!(f, "json2csv"),
            Direction::CsvToJson => write!(f, "csv2json"),
        }
    }
}

/// Everything one conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub direction: Direction,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConvertConfig {
    pub fn new(
        direction: Direction,
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            direction,
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Checks that both paths were given.
    pub fn validate(&self) -> Result<(), Error> {
        if self.input_path.as_os_str().is_empty() || self.output_path.as_os_str().is_empty() {
            return Err(Error::validation_error(
                "input and output paths are required",
            ));
        }
        Ok(())
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub direction: Direction,
    pub output_path: PathBuf,
    /// Language columns, in column order.
    pub languages: Vec<String>,
    /// Number of keys converted.
    pub entries: usize,
    /// The generated string catalog text, for [`Direction::CsvToJson`] runs.
    pub document: Option<String>,
}

/// Runs the conversion described by `config`.
pub fn run(config: &ConvertConfig) -> Result<ConversionReport, Error> {
    config.validate()?;
    tracing::debug!(
        direction = %config.direction,
        from = %config.direction.input_format(),
        to = %config.direction.output_format(),
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "starting conversion"
    );
    match config.direction {
        Direction::JsonToCsv => json_to_csv(&config.input_path, &config.output_path),
        Direction::CsvToJson => csv_to_json(&config.input_path, &config.output_path),
    }
}

/// Converts the string catalog at `input` into a CSV table at `output`.
///
/// # Example
///
/// ```rust,no_run
/// let report = xcstrings_csv::json_to_csv("Localizable.xcstrings", "translations.csv")?;
/// println!("{} keys in {:?}", report.entries, report.languages);
/// # Ok::<(), xcstrings_csv::Error>(())
/// ```
pub fn json_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ConversionReport, Error> {
    let output = output.as_ref();
    let catalog = read_catalog(input.as_ref())?;

    let languages = catalog.languages();
    if languages.is_empty() {
        return Err(Error::validation_error(format!(
            "no languages found in the JSON file `{}`",
            input.as_ref().display()
        )));
    }
    tracing::debug!(languages = ?languages, "enumerated catalog languages");

    write_table(&catalog, &languages, output)?;

    Ok(ConversionReport {
        direction: Direction::JsonToCsv,
        output_path: output.to_path_buf(),
        entries: catalog.len(),
        languages,
        document: None,
    })
}

/// Converts the CSV table at `input` into a string catalog at `output`.
///
/// The report carries the generated document text.
pub fn csv_to_json<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ConversionReport, Error> {
    let output = output.as_ref();
    let (catalog, languages) = read_table(input.as_ref())?;
    let document = write_catalog(&catalog, output)?;

    Ok(ConversionReport {
        direction: Direction::CsvToJson,
        output_path: output.to_path_buf(),
        entries: catalog.len(),
        languages,
        document: Some(document),
    })
}

/// Reads and parses a string catalog file.
pub fn read_catalog(path: &Path) -> Result<Catalog, Error> {
    let format = XcstringsFormat::read_from(path).map_err(|e| {
        Error::conversion_error(
            format!("error reading JSON file `{}`", path.display()),
            e,
        )
    })?;
    let catalog = Catalog::from(format);
    tracing::debug!(
        path = %path.display(),
        entries = catalog.len(),
        source_language = %catalog.source_language,
        "read string catalog"
    );
    Ok(catalog)
}

/// Writes `catalog` as a CSV table with the given language columns.
///
/// The file may be left partially written if a write fails midway.
pub fn write_table(catalog: &Catalog, languages: &[String], path: &Path) -> Result<(), Error> {
    let table = CSVFormat::from_catalog(catalog, languages);
    table.write_to(path).map_err(|e| {
        Error::conversion_error(
            format!("error writing CSV file `{}`", path.display()),
            e,
        )
    })?;
    tracing::debug!(path = %path.display(), rows = table.records.len(), "wrote CSV table");
    Ok(())
}

/// Reads a CSV table file into a catalog plus its language columns.
pub fn read_table(path: &Path) -> Result<(Catalog, Vec<String>), Error> {
    let wrap = |e: Error| {
        Error::conversion_error(format!("error reading CSV file `{}`", path.display()), e)
    };
    let (catalog, languages) = CSVFormat::read_from(path)
        .and_then(CSVFormat::into_catalog)
        .map_err(wrap)?;
    tracing::debug!(
        path = %path.display(),
        entries = catalog.len(),
        languages = ?languages,
        "read CSV table"
    );
    Ok((catalog, languages))
}

/// Writes `catalog` as a string catalog file and returns the text written.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<String, Error> {
    let document = XcstringsFormat::from(catalog)
        .to_pretty_string()
        .map_err(|e| Error::conversion_error("error encoding JSON", e))?;

    let write = || -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(document.as_bytes())?;
        writer.flush()?;
        Ok(())
    };
    write().map_err(|e| {
        Error::conversion_error(
            format!("error writing JSON file `{}`", path.display()),
            e,
        )
    })?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "wrote string catalog");
    Ok(document)
}
