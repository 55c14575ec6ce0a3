//! Encoding-tolerant question bank reader with delimiter detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use super::encoding::decode_with_fallback;
use super::source::{RawRow, SourceMetadata};
use crate::error::{QuizBankError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: Some(b','),
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Reads question bank exports into [`RawRow`]s.
///
/// The whole input is decoded before any row is parsed, so a decode failure
/// never leaves half-read rows behind.
#[derive(Debug, Clone, Default)]
pub struct QuestionBankReader {
    config: ReaderConfig,
}

impl QuestionBankReader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read a file from disk.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<(Vec<RawRow>, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| QuizBankError::io(path, e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| QuizBankError::io(path, e))?;

        self.read_bytes_from(&contents, Some(path))
    }

    /// Read everything from a stream.
    pub fn read_from(&self, mut input: impl Read) -> Result<(Vec<RawRow>, SourceMetadata)> {
        let mut contents = Vec::new();
        input.read_to_end(&mut contents)?;
        self.read_bytes_from(&contents, None)
    }

    /// Read an in-memory buffer.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<(Vec<RawRow>, SourceMetadata)> {
        self.read_bytes_from(bytes, None)
    }

    fn read_bytes_from(
        &self,
        bytes: &[u8],
        origin: Option<&Path>,
    ) -> Result<(Vec<RawRow>, SourceMetadata)> {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let decoded = decode_with_fallback(bytes)?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter_with_quote(&decoded.text, self.config.quote),
        };
        self.check_delimiter(delimiter)?;

        let (columns, rows) = self.parse_text(&decoded.text, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        tracing::info!(
            encoding = decoded.encoding.label(),
            format = %format,
            rows = rows.len(),
            columns = columns.len(),
            "read question bank"
        );

        let metadata = SourceMetadata::new(
            origin.map(Path::to_path_buf),
            hash,
            bytes.len() as u64,
            format,
            decoded.encoding,
            rows.len(),
            columns,
        );

        Ok((rows, metadata))
    }

    fn check_delimiter(&self, delimiter: u8) -> Result<()> {
        if !delimiter.is_ascii()
            || delimiter == self.config.quote
            || delimiter == b'\n'
            || delimiter == b'\r'
        {
            return Err(QuizBankError::InvalidDelimiter(format!(
                "{:?}",
                delimiter as char
            )));
        }
        Ok(())
    }

    /// Parse decoded text into header columns and rows.
    ///
    /// Short rows are padded with empty values and surplus cells beyond the
    /// header are dropped.
    fn parse_text(&self, text: &str, delimiter: u8) -> Result<(Vec<String>, Vec<RawRow>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let mut fields = IndexMap::with_capacity(headers.len());
            for (idx, header) in headers.iter().enumerate() {
                let value = record.get(idx).unwrap_or_default();
                fields.insert(header.clone(), value.to_string());
            }

            rows.push(RawRow::new(line, fields));
        }

        Ok((headers, rows))
    }
}

/// Detect the delimiter by analyzing the first few lines.
///
/// Falls back to a comma when nothing scores.
pub fn detect_delimiter(text: &str) -> u8 {
    detect_delimiter_with_quote(text, b'"')
}

/// Like [`detect_delimiter`], ignoring delimiters inside `quote`d fields.
pub fn detect_delimiter_with_quote(text: &str, quote: u8) -> u8 {
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim, quote))
            .collect();

        let Some(&first_count) = counts.first() else {
            continue;
        };
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Tab gets a small bonus since it rarely shows up inside question text.
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8, quote: u8) -> usize {
    let delim_char = delimiter as char;
    let quote_char = quote as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            c if c == quote_char => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SourceEncoding;

    #[test]
    fn test_detect_delimiter_csv() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3\n4,5,6"), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3\n4\t5\t6"), b'\t');
    }

    #[test]
    fn test_detect_delimiter_semicolon_with_quoted_commas() {
        let text = "TNpe;Description\nQ;\"Paris, France\"\nA;\"Lyon, France\"";
        assert_eq!(detect_delimiter(text), b';');
    }

    #[test]
    fn test_detect_delimiter_respects_custom_quote() {
        let text = "TNpe,'Question; text; more'\nQ,'a; b; c'\nA,'d; e; f'";
        assert_eq!(detect_delimiter_with_quote(text, b'\''), b',');
        // with double quotes the semicolons inside the fields look like delimiters
        assert_eq!(detect_delimiter(text), b';');
        assert_eq!(count_delimiter_in_line("a;'b;c'", b';', b'\''), 1);
        assert_eq!(count_delimiter_in_line("a;'b;c'", b';', b'"'), 2);
    }

    #[test]
    fn test_auto_detect_uses_configured_quote() {
        let reader = QuestionBankReader::with_config(ReaderConfig {
            delimiter: None,
            quote: b'\'',
            max_rows: None,
        });
        let text = "TNpe,'Question; text; more'\nQ,'a; b; c'\nA,'d; e; f'\n";
        let (rows, meta) = reader.read_bytes(text.as_bytes()).unwrap();

        assert_eq!(meta.format, "csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Question; text; more"), Some("a; b; c"));
    }

    #[test]
    fn test_detect_delimiter_empty_defaults_to_comma() {
        assert_eq!(detect_delimiter(""), b',');
    }

    #[test]
    fn test_read_bytes_keeps_header_names() {
        let reader = QuestionBankReader::new();
        let (rows, meta) = reader
            .read_bytes(b"TNpe,Question Type,Description\nQ,R,What?\nA,,Yes\n")
            .unwrap();

        assert_eq!(meta.columns, vec!["TNpe", "Question Type", "Description"]);
        assert_eq!(meta.row_count, 2);
        assert_eq!(meta.format, "csv");
        assert_eq!(meta.encoding, SourceEncoding::Utf8Sig);
        assert_eq!(rows[0].get("Question Type"), Some("R"));
        assert_eq!(rows[1].get("Description"), Some("Yes"));
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let reader = QuestionBankReader::new();
        let (rows, _) = reader.read_bytes(b"TNpe,Description,Marks\nQ,What?\n").unwrap();
        assert_eq!(rows[0].get("Marks"), Some(""));
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let reader = QuestionBankReader::new();
        let (rows, _) = reader.read_bytes(b"TNpe,Description\nQ,What?,extra\n").unwrap();
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        let reader = QuestionBankReader::new();
        let (rows, meta) = reader.read_bytes(b"").unwrap();
        assert!(rows.is_empty());
        assert!(meta.columns.is_empty());
    }

    #[test]
    fn test_auto_detect_delimiter() {
        let reader = QuestionBankReader::with_config(ReaderConfig {
            delimiter: None,
            ..Default::default()
        });
        let (rows, meta) = reader.read_bytes(b"TNpe\tDescription\nQ\tWhat?\n").unwrap();
        assert_eq!(meta.format, "tsv");
        assert_eq!(rows[0].get("Description"), Some("What?"));
    }

    #[test]
    fn test_max_rows() {
        let reader = QuestionBankReader::with_config(ReaderConfig {
            max_rows: Some(1),
            ..Default::default()
        });
        let (rows, _) = reader.read_bytes(b"TNpe\nQ\nA\nA\n").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_delimiter_equal_to_quote_is_rejected() {
        let reader = QuestionBankReader::with_config(ReaderConfig {
            delimiter: Some(b'"'),
            ..Default::default()
        });
        let err = reader.read_bytes(b"a\"b\n").unwrap_err();
        assert!(matches!(err, QuizBankError::InvalidDelimiter(_)));
    }

    #[test]
    fn test_hash_is_stable() {
        let reader = QuestionBankReader::new();
        let (_, a) = reader.read_bytes(b"TNpe\nQ\n").unwrap();
        let (_, b) = reader.read_bytes(b"TNpe\nQ\n").unwrap();
        assert_eq!(a.hash, b.hash);
        assert!(a.hash.starts_with("sha256:"));
    }
}
