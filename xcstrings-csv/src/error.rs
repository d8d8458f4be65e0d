//! All error types for the xcstrings-csv crate.
//!
//! These are returned from all fallible operations (parsing, serialization, conversion, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("{message}: {source}")]
    Conversion {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

/// Structural problems in a CSV table that make it unusable as a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("insufficient rows: expected a header and at least one data row, found {found} row(s)")]
    InsufficientRows { found: usize },

    #[error("no languages: the header row names no language columns")]
    NoLanguages,

    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}

/// Broad failure category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Opening, reading or writing a file failed.
    Io,
    /// The input document is syntactically invalid or does not match its schema.
    Parse,
    /// The CSV table is well-formed but structurally unusable.
    Format,
    /// The catalog could not be rendered to JSON.
    Serialization,
    /// The input was readable but cannot drive a conversion.
    Usage,
}

impl Error {
    /// Wraps an error with the operation and file it concerned.
    pub fn conversion_error(message: impl Into<String>, source: impl Into<Error>) -> Self {
        Error::Conversion {
            message: message.into(),
            source: Box::new(source.into()),
        }
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Returns the category of this error, looking through [`Error::Conversion`] wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            // csv::Error folds I/O failures into its own type.
            Error::CsvParse(e) if e.is_io_error() => ErrorKind::Io,
            Error::Parse(e) if e.is_io() => ErrorKind::Io,
            Error::Parse(_) | Error::CsvParse(_) | Error::InvalidResource(_) => ErrorKind::Parse,
            Error::Format(_) => ErrorKind::Format,
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::Validation(_) => ErrorKind::Usage,
            Error::Conversion { source, .. } => source.kind(),
        }
    }

    /// Returns the innermost error, skipping [`Error::Conversion`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Conversion { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// A reader whose every read fails, as a vanished or unreadable file would.
    struct BrokenReader;

    impl io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied"))
        }
    }

    #[test]
    fn test_json_syntax_error_is_parse_kind() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().starts_with("parse error: "));
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_json_read_failure_is_io_kind() {
        let json_error = serde_json::from_reader::<_, serde_json::Value>(BrokenReader).unwrap_err();
        assert!(json_error.is_io());
        assert_eq!(Error::Parse(json_error).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_csv_read_failure_is_io_kind() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(BrokenReader);
        let csv_error = rdr.records().next().unwrap().unwrap_err();
        assert!(csv_error.is_io_error());
        assert_eq!(Error::CsvParse(csv_error).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_csv_malformed_record_is_parse_kind() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc\n".as_bytes());
        let csv_error = rdr
            .records()
            .find_map(Result::err)
            .unwrap();
        assert!(!csv_error.is_io_error());
        assert_eq!(Error::from(csv_error).kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_wrapped_io_error_keeps_kind() {
        let error = Error::conversion_error(
            "error writing CSV file `out.csv`",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(matches!(error.root(), Error::Io(_)));
        assert_eq!(Error::InvalidResource("blank".into()).kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_format_error_messages() {
        assert!(
            Error::from(FormatError::InsufficientRows { found: 1 })
                .to_string()
                .contains("insufficient rows")
        );
        assert!(
            Error::from(FormatError::NoLanguages)
                .to_string()
                .contains("no languages")
        );
        assert_eq!(
            Error::from(FormatError::DuplicateKey("greeting".into())).to_string(),
            "format error: duplicate key: greeting"
        );
    }

    #[test]
    fn test_conversion_error_keeps_kind_and_root() {
        let error = Error::conversion_error(
            "error reading CSV file `in.csv`",
            FormatError::DuplicateKey("a".into()),
        );
        assert_eq!(error.kind(), ErrorKind::Format);
        assert!(matches!(
            error.root(),
            Error::Format(FormatError::DuplicateKey(key)) if key == "a"
        ));
        assert!(error.to_string().starts_with("error reading CSV file `in.csv`: "));
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("Validation failed");
        assert_eq!(error.to_string(), "validation error: Validation failed");
        assert_eq!(error.kind(), ErrorKind::Usage);
    }
}
