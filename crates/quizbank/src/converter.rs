//! Main `Converter` struct and public API.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::{build_output_record, is_marked_correct};
use crate::error::Result;
use crate::grouping::{QuestionRecord, group_rows};
use crate::input::{QuestionBankReader, RawRow, ReaderConfig, SourceMetadata};
use crate::output::write_output_csv;
use crate::schema::{
    ANSWER_TEXT_ALIASES, CORRECT_FLAG_ALIASES, OutputRecord, QUESTION_TEXT_ALIASES,
    QUESTION_TYPE_ALIASES, ResolveField,
};
use crate::warning::ConversionWarning;

/// Configuration for conversion.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// Reader configuration.
    pub reader: ReaderConfig,
}

/// Result of converting a question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// Metadata about the source input.
    pub source: SourceMetadata,
    /// Converted rows, one per question, in source order.
    pub records: Vec<OutputRecord>,
    /// Anomalies in detection order.
    pub warnings: Vec<ConversionWarning>,
}

impl Conversion {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the converted rows to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        write_output_csv(path, &self.records)
    }
}

/// A source question next to the row it converts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewItem {
    pub question: QuestionRecord,
    pub output: OutputRecord,
}

/// One source answer as shown in previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSummary {
    pub description: String,
    pub correct: bool,
}

impl PreviewItem {
    /// Raw question type code, uppercased; "R" when the source has none.
    pub fn source_type_code(&self) -> String {
        let code = self
            .question
            .metadata
            .field(QUESTION_TYPE_ALIASES)
            .to_uppercase();
        if code.is_empty() { "R".to_string() } else { code }
    }

    /// Every source answer, including any beyond the four kept options.
    ///
    /// Answer text is resolved with the same aliases as the options, so an
    /// export that uses an `Answer` column shows the same text here.
    pub fn answer_summaries(&self) -> Vec<AnswerSummary> {
        self.question
            .answers
            .iter()
            .map(|answer| AnswerSummary {
                description: answer.field(ANSWER_TEXT_ALIASES),
                correct: is_marked_correct(&answer.field(CORRECT_FLAG_ALIASES)),
            })
            .collect()
    }

    /// `correct_answer` formatted for display.
    pub fn display_correct_answer(&self) -> String {
        if self.output.correct_answer.is_empty() {
            "—".to_string()
        } else {
            self.output.correct_answer.replace(',', ", ")
        }
    }

    /// Text block describing the source question and its conversion.
    pub fn render_details(&self) -> String {
        let out = &self.output;

        let answer_lines: Vec<String> = self
            .answer_summaries()
            .iter()
            .enumerate()
            .map(|(idx, answer)| {
                let marker = if answer.correct { "[Correct]" } else { "[ ]" };
                format!("  {}. {} {}", idx + 1, marker, answer.description)
            })
            .collect();
        let answers = if answer_lines.is_empty() {
            "  (none)".to_string()
        } else {
            answer_lines.join("\n")
        };

        let correct = if out.correct_answer.is_empty() {
            "—"
        } else {
            out.correct_answer.as_str()
        };

        let converted = [
            format!("Question Text  : {}", out.question_text),
            format!(
                "Question Type  : {} (source code: {})",
                out.question_type,
                self.source_type_code()
            ),
            format!("Marks          : {}", out.marks),
            format!("Difficulty     : {}", out.difficulty_level),
            format!("Correct Answer : {correct}"),
            "Options        :".to_string(),
            format!("  A. {}", out.option_a),
            format!("  B. {}", out.option_b),
            format!("  C. {}", out.option_c),
            format!("  D. {}", out.option_d),
        ];

        format!(
            "Input Question Row:\n{}\n\nAnswer Options:\n{}\n\nConverted Output:\n{}",
            self.question.metadata.field(QUESTION_TEXT_ALIASES),
            answers,
            converted.join("\n")
        )
    }
}

/// Result of previewing a conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    pub source: SourceMetadata,
    pub items: Vec<PreviewItem>,
    pub warnings: Vec<ConversionWarning>,
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop the source records, keeping only the conversion.
    pub fn into_conversion(self) -> Conversion {
        Conversion {
            source: self.source,
            records: self.items.into_iter().map(|item| item.output).collect(),
            warnings: self.warnings,
        }
    }
}

/// The question bank converter.
///
/// Each call reads its own input and keeps no state afterwards, so one
/// converter can be reused for any number of files.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    reader: QuestionBankReader,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            reader: QuestionBankReader::with_config(config.reader),
        }
    }

    /// Convert a question bank file.
    pub fn convert(&self, path: impl AsRef<Path>) -> Result<Conversion> {
        let (rows, source) = self.reader.read_file(path)?;
        Ok(self.convert_rows(rows, source))
    }

    /// Convert a question bank read from a stream.
    pub fn convert_reader(&self, input: impl Read) -> Result<Conversion> {
        let (rows, source) = self.reader.read_from(input)?;
        Ok(self.convert_rows(rows, source))
    }

    /// Convert an in-memory question bank.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<Conversion> {
        let (rows, source) = self.reader.read_bytes(bytes)?;
        Ok(self.convert_rows(rows, source))
    }

    /// Preview the conversion of a question bank file.
    pub fn preview(&self, path: impl AsRef<Path>) -> Result<Preview> {
        let (rows, source) = self.reader.read_file(path)?;
        Ok(self.preview_rows(rows, source))
    }

    /// Preview the conversion of a stream.
    pub fn preview_reader(&self, input: impl Read) -> Result<Preview> {
        let (rows, source) = self.reader.read_from(input)?;
        Ok(self.preview_rows(rows, source))
    }

    /// Preview the conversion of an in-memory question bank.
    pub fn preview_bytes(&self, bytes: &[u8]) -> Result<Preview> {
        let (rows, source) = self.reader.read_bytes(bytes)?;
        Ok(self.preview_rows(rows, source))
    }

    fn convert_rows(&self, rows: Vec<RawRow>, source: SourceMetadata) -> Conversion {
        let (questions, mut warnings) = group_rows(rows);

        let records: Vec<OutputRecord> = questions
            .iter()
            .map(|question| build_output_record(question, &mut warnings))
            .collect();

        tracing::info!(
            questions = records.len(),
            warnings = warnings.len(),
            "converted question bank"
        );

        Conversion {
            source,
            records,
            warnings,
        }
    }

    fn preview_rows(&self, rows: Vec<RawRow>, source: SourceMetadata) -> Preview {
        let (questions, mut warnings) = group_rows(rows);

        let items: Vec<PreviewItem> = questions
            .into_iter()
            .map(|question| {
                let output = build_output_record(&question, &mut warnings);
                PreviewItem { question, output }
            })
            .collect();

        tracing::info!(
            questions = items.len(),
            warnings = warnings.len(),
            "previewed question bank"
        );

        Preview {
            source,
            items,
            warnings,
        }
    }
}

/// Convert a question bank file with default settings.
pub fn convert(path: impl AsRef<Path>) -> Result<Conversion> {
    Converter::new().convert(path)
}

/// Preview a question bank file with default settings.
pub fn preview(path: impl AsRef<Path>) -> Result<Preview> {
    Converter::new().preview(path)
}
