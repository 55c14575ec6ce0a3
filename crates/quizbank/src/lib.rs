//! quizbank: converts loosely structured question bank exports into a
//! normalized quiz-import CSV.
//!
//! Source files list a question row (`TNpe = Q`) followed by its answer rows
//! (`TNpe = A`). Column names vary between exports, the text encoding is
//! unknown, and codes for question type and difficulty are inconsistent.
//! quizbank reads such files, groups answers under their questions and emits
//! one row per question in a fixed ten-column schema.
//!
//! # Core Principles
//!
//! - **Best effort**: malformed input is normalized with defaults, never rejected
//! - **Diagnostics**: every dropped or adjusted row is reported as a warning
//! - **All or nothing**: output is written only after the whole input converted
//!
//! # Example
//!
//! ```no_run
//! use quizbank::{Converter, write_output_csv};
//!
//! let conversion = Converter::new().convert("question_bank.csv").unwrap();
//! for warning in &conversion.warnings {
//!     eprintln!("Warning: {warning}");
//! }
//! write_output_csv("question_bank_converted.csv", &conversion.records).unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod grouping;
pub mod input;
pub mod normalize;
pub mod output;
pub mod schema;
pub mod warning;

mod converter;

pub use crate::converter::{
    AnswerSummary, Conversion, Converter, ConverterConfig, Preview, PreviewItem, convert, preview,
};
pub use builder::build_output_record;
pub use error::{QuizBankError, Result};
pub use grouping::{QuestionRecord, RecordGrouper, RowKind, group_rows};
pub use input::{QuestionBankReader, RawRow, ReaderConfig, SourceEncoding, SourceMetadata};
pub use normalize::{Difficulty, QuestionType};
pub use output::{write_output, write_output_csv};
pub use schema::{OUTPUT_FIELDS, OutputRecord, resolve_field};
pub use warning::ConversionWarning;
