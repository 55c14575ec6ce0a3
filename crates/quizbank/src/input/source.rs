//! Raw rows and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::encoding::SourceEncoding;

/// One data row of the source file, keyed by the header exactly as written.
///
/// Column order follows the header. Alias matching happens at lookup time,
/// so column names are never normalized in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based line in the source where the row starts.
    pub line: u64,
    /// Column name to cell value.
    pub fields: IndexMap<String, String>,
}

impl RawRow {
    /// Create a row from an existing column map.
    pub fn new(line: u64, fields: IndexMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Build a row from column/value pairs.
    ///
    /// A repeated column keeps its first position and takes the last value.
    pub fn from_pairs<K, V>(line: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { line, fields }
    }

    /// Get a value by its literal column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Metadata about the source question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path, or `<stream>` for in-memory input.
    pub file: String,
    /// Full path to the file, when read from disk.
    pub path: Option<PathBuf>,
    /// SHA-256 hash of the raw bytes.
    pub hash: String,
    /// Input size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Encoding that decoded the input.
    pub encoding: SourceEncoding,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Header columns as written.
    pub columns: Vec<String>,
    /// When the input was read.
    pub read_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for an input that has been read.
    pub fn new(
        path: Option<PathBuf>,
        hash: String,
        size_bytes: u64,
        format: String,
        encoding: SourceEncoding,
        row_count: usize,
        columns: Vec<String>,
    ) -> Self {
        let file = path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<stream>".to_string());

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding,
            row_count,
            columns,
            read_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_first_position_last_value() {
        let row = RawRow::from_pairs(2, [("TNpe", "Q"), ("Marks", "1"), ("TNpe", "A")]);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["TNpe", "Marks"]);
        assert_eq!(row.get("TNpe"), Some("A"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_metadata_file_name() {
        let meta = SourceMetadata::new(
            Some(PathBuf::from("/tmp/bank.csv")),
            "sha256:00".to_string(),
            10,
            "csv".to_string(),
            SourceEncoding::Utf8Sig,
            0,
            Vec::new(),
        );
        assert_eq!(meta.file, "bank.csv");

        let stream = SourceMetadata::new(
            None,
            "sha256:00".to_string(),
            0,
            "csv".to_string(),
            SourceEncoding::Utf8,
            0,
            Vec::new(),
        );
        assert_eq!(stream.file, "<stream>");
    }
}
