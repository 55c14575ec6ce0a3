//! The fixed quiz-import output schema.

use serde::{Deserialize, Serialize};

use crate::normalize::{Difficulty, QuestionType};

/// Output columns, in file order.
pub const OUTPUT_FIELDS: [&str; 10] = [
    "question_text",
    "question_type",
    "option_a",
    "option_b",
    "option_c",
    "option_d",
    "correct_answer",
    "marks",
    "difficulty_level",
    "explanation",
];

/// Number of option slots in the output.
pub const MAX_OPTIONS: usize = 4;

/// Letters used for option slots in `correct_answer`.
pub const OPTION_LETTERS: [&str; MAX_OPTIONS] = ["a", "b", "c", "d"];

/// One converted question.
///
/// Field order matches [`OUTPUT_FIELDS`].
/// Absent values are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub question_text: String,
    pub question_type: QuestionType,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// Comma-joined option letters, or free text for short-answer items.
    pub correct_answer: String,
    /// Passed through as text; "1" when the source has none.
    pub marks: String,
    pub difficulty_level: Difficulty,
    /// Reserved; always empty.
    pub explanation: String,
}

impl OutputRecord {
    /// Option texts in slot order.
    pub fn options(&self) -> [&str; MAX_OPTIONS] {
        [
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
        ]
    }

    /// Values in [`OUTPUT_FIELDS`] order.
    pub fn values(&self) -> [&str; 10] {
        [
            &self.question_text,
            self.question_type.as_str(),
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
            &self.correct_answer,
            &self.marks,
            self.difficulty_level.as_str(),
            &self.explanation,
        ]
    }

    /// Look up a value by output column name.
    pub fn get(&self, field: &str) -> Option<&str> {
        OUTPUT_FIELDS
            .iter()
            .position(|f| *f == field)
            .map(|idx| self.values()[idx])
    }
}
