use xcstrings_csv::{ConversionReport, ConvertConfig, Direction, Error};

/// Options that only affect what the command prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Do not echo the generated string catalog.
    pub quiet: bool,
}

/// Runs one conversion and prints its outcome to stdout.
///
/// Errors are returned untouched so the caller decides the exit status.
pub fn run_convert_command(config: &ConvertConfig, options: OutputOptions) -> Result<(), Error> {
    tracing::info!(
        "converting {} `{}` to {} `{}`",
        config.direction.input_format().label(),
        config.input_path.display(),
        config.direction.output_format().label(),
        config.output_path.display()
    );
    let report = xcstrings_csv::run(config)?;
    print!("{}", render_report(&report, options));
    Ok(())
}

/// Renders the success message for a finished conversion.
pub fn render_report(report: &ConversionReport, options: OutputOptions) -> String {
    let mut out = String::new();
    match report.direction {
        Direction::JsonToCsv => {
            out.push_str(&format!(
                "CSV file '{}' created successfully.\n",
                report.output_path.display()
            ));
        }
        Direction::CsvToJson => {
            out.push_str(&format!(
                "Languages found: [{}]\n",
                report.languages.join(" ")
            ));
            match report.document.as_deref() {
                Some(document) if !options.quiet => {
                    out.push_str("Generated JSON structure:\n");
                    out.push_str(document);
                    out.push('\n');
                }
                _ => {}
            }
            out.push_str(&format!(
                "JSON file '{}' created successfully.\n",
                report.output_path.display()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(direction: Direction, document: Option<&str>) -> ConversionReport {
        ConversionReport {
            direction,
            output_path: PathBuf::from("out.file"),
            languages: vec!["en".to_string(), "fr".to_string()],
            entries: 1,
            document: document.map(str::to_string),
        }
    }

    #[test]
    fn test_render_json_to_csv() {
        let text = render_report(&report(Direction::JsonToCsv, None), OutputOptions::default());
        assert_eq!(text, "CSV file 'out.file' created successfully.\n");
    }

    #[test]
    fn test_render_csv_to_json_echoes_document() {
        let text = render_report(
            &report(Direction::CsvToJson, Some("{}")),
            OutputOptions::default(),
        );
        assert_eq!(
            text,
            "Languages found: [en fr]\nGenerated JSON structure:\n{}\nJSON file 'out.file' created successfully.\n"
        );
    }

    #[test]
    fn test_render_csv_to_json_quiet() {
        let text = render_report(
            &report(Direction::CsvToJson, Some("{}")),
            OutputOptions { quiet: true },
        );
        assert!(!text.contains("Generated JSON structure"));
        assert!(text.ends_with("JSON file 'out.file' created successfully.\n"));
    }
}
