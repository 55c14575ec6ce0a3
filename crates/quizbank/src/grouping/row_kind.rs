//! Row classification.

use serde::{Deserialize, Serialize};

use crate::input::RawRow;
use crate::schema::{ROW_KIND_ALIASES, resolve_field};

/// What a source row represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Starts a new question ("Q").
    Question,
    /// An answer option for the open question ("A").
    Answer,
    /// Any other non-empty code, uppercased.
    Unknown(String),
}

impl RowKind {
    /// Classify a code after trimming and uppercasing.
    ///
    /// Returns `None` for an empty code; such rows are blank separators.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "" => None,
            "Q" => Some(RowKind::Question),
            "A" => Some(RowKind::Answer),
            _ => Some(RowKind::Unknown(code)),
        }
    }

    /// Classify a row by its row kind column.
    pub fn classify(row: &RawRow) -> Option<Self> {
        Self::from_code(&resolve_field(row, ROW_KIND_ALIASES))
    }
}
