//! CLI command implementations.

pub mod convert;
pub mod guide;
pub mod preview;

use std::path::{Path, PathBuf};

use colored::Colorize;
use quizbank::{ConversionWarning, Converter, ConverterConfig, ReaderConfig};

use crate::cli::DelimiterChoice;

/// Build a converter for the selected input delimiter.
pub(crate) fn converter_for(delimiter: DelimiterChoice) -> Converter {
    Converter::with_config(ConverterConfig {
        reader: ReaderConfig {
            delimiter: delimiter.as_byte(),
            ..ReaderConfig::default()
        },
    })
}

/// Fail early with a readable message when the input is missing.
pub(crate) fn ensure_exists(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(())
}

/// `<dir>/<stem>_converted.csv` next to the input.
pub(crate) fn default_output_path(file: &Path) -> PathBuf {
    let mut p = file.to_path_buf();
    let stem = p.file_stem().unwrap_or_default().to_string_lossy().into_owned();
    p.set_file_name(format!("{}_converted.csv", stem));
    p
}

pub(crate) fn print_warnings(warnings: &[ConversionWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    print!("{}", render_warnings(warnings));
}

/// The warnings block shown after a run, one line per warning.
pub(crate) fn render_warnings(warnings: &[ConversionWarning]) -> String {
    let mut out = format!(
        "{} ({})\n",
        "Warnings:".yellow().bold(),
        warnings.len().to_string().yellow()
    );
    for warning in warnings {
        match warning.line() {
            Some(line) => out.push_str(&format!(
                "  {} {}\n",
                format!("line {}:", line).dimmed(),
                warning
            )),
            None => out.push_str(&format!("  {}\n", warning)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/bank.csv")),
            PathBuf::from("/data/bank_converted.csv")
        );
        assert_eq!(
            default_output_path(Path::new("export.txt")),
            PathBuf::from("export_converted.csv")
        );
    }

    #[test]
    fn test_render_warnings_one_line_each() {
        let warnings = vec![
            ConversionWarning::AnswerBeforeQuestion { line: 2 },
            ConversionWarning::UnrecognizedRowKind {
                value: "X".to_string(),
                line: 4,
            },
        ];
        let rendered = render_warnings(&warnings);

        assert_eq!(rendered.lines().count(), 3);
        assert_eq!(rendered.matches("Encountered answer row").count(), 1);
        assert_eq!(rendered.matches("Unrecognized TNpe value 'X'").count(), 1);
    }

    #[test]
    fn test_ensure_exists() {
        assert!(ensure_exists(Path::new("/definitely/not/here.csv")).is_err());
    }
}
