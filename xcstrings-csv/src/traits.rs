//! The read/write seam shared by the string catalog and CSV table formats.
//!
//! A format only says how it decodes itself from a byte stream and encodes
//! itself onto one; opening and closing files is done here, once, for both.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// A document format that is read whole and written whole.
///
/// [`XcstringsFormat`](crate::formats::XcstringsFormat) and
/// [`CSVFormat`](crate::formats::CSVFormat) implement the two required
/// methods. The file helpers hold their handle only for the duration of one
/// call, and the handle is released on every return path.
///
/// ```rust,no_run
/// use xcstrings_csv::{formats::CSVFormat, traits::Parser};
///
/// let table = CSVFormat::read_from("translations.csv")?;
/// println!("columns: {:?}", table.languages);
/// table.write_to("translations_copy.csv")?;
/// # Ok::<(), xcstrings_csv::Error>(())
/// ```
pub trait Parser: Sized {
    /// Decodes one whole document from `reader`.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>;

    /// Encodes the document onto `writer`.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Opens `path` and decodes it.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Creates or truncates `path` and encodes the document into it.
    /// Flushes before returning.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Decodes a document held in memory.
    fn from_str(text: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(text))
    }
}
