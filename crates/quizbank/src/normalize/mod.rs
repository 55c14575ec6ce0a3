//! Canonical values for difficulty levels and question types.
//!
//! The mapping tables are fixed; every input maps to exactly one canonical
//! value, with a default for anything unrecognized.

mod difficulty;
mod question_type;

pub use difficulty::{Difficulty, normalize_difficulty};
pub use question_type::{QuestionType, normalize_question_type};
