use xcstrings_csv::Direction;

/// Conversion modes accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Read an `.xcstrings` string catalog and write a CSV table.
    ///
    /// ```text
    /// ,en,de,fr
    /// greeting,Hello,Hallo,Bonjour
    /// ```
    #[value(name = "json2csv")]
    JsonToCsv,

    /// Read a CSV table and write an `.xcstrings` string catalog.
    ///
    /// The first language column becomes the catalog's source language.
    #[value(name = "csv2json")]
    CsvToJson,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::JsonToCsv => Direction::JsonToCsv,
            Mode::CsvToJson => Direction::CsvToJson,
        }
    }
}
