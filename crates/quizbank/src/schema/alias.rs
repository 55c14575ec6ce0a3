//! Alias-based field lookup.
//!
//! Question bank exports spell the same column many ways ("Question Type",
//! "questiontype", "Question_Type"). Lookups compare a normalized form of the
//! header against a priority-ordered list of candidate names.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::input::RawRow;

/// Column that marks a row as question or answer.
pub const ROW_KIND_ALIASES: &[&str] = &["TNpe", "Type"];
/// Question text on a question row.
pub const QUESTION_TEXT_ALIASES: &[&str] = &["Description", "Question"];
pub const MARKS_ALIASES: &[&str] = &["Marks"];
pub const DIFFICULTY_ALIASES: &[&str] = &["LEVEL", "Difficulty", "EASY"];
/// Header variants seen in real exports, including the "TNpe" misspelling.
pub const QUESTION_TYPE_ALIASES: &[&str] = &[
    "QuestionTNpe",
    "QuestionType",
    "QuestionTNpe(R=Radio,C=Checkbox,L=Onelinner)",
];
/// Option text on an answer row.
pub const ANSWER_TEXT_ALIASES: &[&str] = &["Description", "Answer"];
pub const CORRECT_FLAG_ALIASES: &[&str] = &["IsRightAnswer"];

/// A row that can be searched by column name.
pub trait FieldLookup {
    /// Column name and value pairs, in any order.
    fn entries(&self) -> impl Iterator<Item = (&str, &str)>;
}

impl FieldLookup for RawRow {
    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FieldLookup for IndexMap<String, String> {
    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FieldLookup for HashMap<String, String> {
    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FieldLookup for BTreeMap<String, String> {
    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Lowercase and drop everything that is not alphanumeric.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the first column matching an alias and return its trimmed value.
///
/// Aliases are tried in order, so an earlier alias wins even when a later
/// one's column comes first in the row. Returns an empty string when nothing
/// matches.
pub fn resolve_field<R>(row: &R, aliases: &[&str]) -> String
where
    R: FieldLookup + ?Sized,
{
    for alias in aliases {
        let alias_key = normalize_key(alias);
        if let Some((_, value)) = row
            .entries()
            .find(|(column, _)| normalize_key(column) == alias_key)
        {
            return value.trim().to_string();
        }
    }
    String::new()
}

/// Trait form of [`resolve_field`].
pub trait ResolveField: FieldLookup {
    fn field(&self, aliases: &[&str]) -> String {
        resolve_field(self, aliases)
    }
}

impl<T: FieldLookup + ?Sized> ResolveField for T {}
