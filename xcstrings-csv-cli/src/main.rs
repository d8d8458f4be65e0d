use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, builder::NonEmptyStringValueParser};
use xcstrings_csv::ConvertConfig;
use xcstrings_csv_cli::{Mode, OutputOptions, logging, run_convert_command};

const EXAMPLES: &str = "\
Examples:
  xcstrings-csv --mode json2csv --input Localizable.xcstrings --output translations.csv
  xcstrings-csv --mode csv2json --input translations.csv --output Localizable.xcstrings";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
struct Args {
    /// Conversion direction
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// The input file to read
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    input: String,

    /// The output file to write the results to
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    output: String,

    /// Do not echo the generated string catalog
    #[arg(short, long)]
    quiet: bool,

    /// Log every conversion step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = ConvertConfig::new(
        args.mode.into(),
        PathBuf::from(args.input),
        PathBuf::from(args.output),
    );
    let options = OutputOptions { quiet: args.quiet };

    match run_convert_command(&config, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
