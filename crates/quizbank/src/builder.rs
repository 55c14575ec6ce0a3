//! Conversion of grouped records into output rows.

use crate::grouping::QuestionRecord;
use crate::normalize::{Difficulty, QuestionType};
use crate::schema::{
    ANSWER_TEXT_ALIASES, CORRECT_FLAG_ALIASES, DIFFICULTY_ALIASES, MARKS_ALIASES, MAX_OPTIONS,
    OPTION_LETTERS, OutputRecord, QUESTION_TEXT_ALIASES, QUESTION_TYPE_ALIASES, ResolveField,
};
use crate::warning::ConversionWarning;

/// Marks used when the source leaves them blank.
pub const DEFAULT_MARKS: &str = "1";

/// Build the output row for one question.
///
/// Missing fields become empty strings or schema defaults. Anomalies are
/// appended to `warnings`; nothing here fails.
pub fn build_output_record(
    record: &QuestionRecord,
    warnings: &mut Vec<ConversionWarning>,
) -> OutputRecord {
    let question = &record.metadata;

    let question_text = question.field(QUESTION_TEXT_ALIASES);
    let mut marks = question.field(MARKS_ALIASES);
    if marks.is_empty() {
        marks = DEFAULT_MARKS.to_string();
    }
    let difficulty_level = Difficulty::from_raw(&question.field(DIFFICULTY_ALIASES));
    let question_type = QuestionType::from_code(&question.field(QUESTION_TYPE_ALIASES));

    if record.answers.len() > MAX_OPTIONS {
        let warning = ConversionWarning::too_many_answers(&question_text, record.answers.len());
        tracing::debug!(line = question.line, "{warning}");
        warnings.push(warning);
    }

    let mut options: [String; MAX_OPTIONS] = Default::default();
    let mut correct_letters = Vec::new();

    for (idx, answer) in record.answers.iter().take(MAX_OPTIONS).enumerate() {
        options[idx] = answer.field(ANSWER_TEXT_ALIASES);
        if is_marked_correct(&answer.field(CORRECT_FLAG_ALIASES)) {
            correct_letters.push(OPTION_LETTERS[idx]);
        }
    }

    let mut correct_answer = correct_letters.join(",");

    // Free-text items rarely flag a right answer; the first answer is taken as
    // the expected one.
    if question_type.is_short_answer() && correct_answer.is_empty() && !record.answers.is_empty()
    {
        correct_answer = options[0].clone();
    }

    let [option_a, option_b, option_c, option_d] = options;

    OutputRecord {
        question_text,
        question_type,
        option_a,
        option_b,
        option_c,
        option_d,
        correct_answer,
        marks,
        difficulty_level,
        explanation: String::new(),
    }
}

pub(crate) fn is_marked_correct(flag: &str) -> bool {
    flag.trim().to_uppercase() == "Y"
}
