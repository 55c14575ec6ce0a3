//! Source field aliases and the output schema.

mod alias;
mod record;

pub use alias::{
    ANSWER_TEXT_ALIASES, CORRECT_FLAG_ALIASES, DIFFICULTY_ALIASES, FieldLookup, MARKS_ALIASES,
    QUESTION_TEXT_ALIASES, QUESTION_TYPE_ALIASES, ROW_KIND_ALIASES, ResolveField, normalize_key,
    resolve_field,
};
pub use record::{MAX_OPTIONS, OPTION_LETTERS, OUTPUT_FIELDS, OutputRecord};
