//! Non-fatal conversion diagnostics.

use serde::{Deserialize, Serialize};

/// Characters of question text quoted in warnings.
pub const QUESTION_PREFIX_CHARS: usize = 30;

/// An input anomaly that was handled by dropping or defaulting.
///
/// Warnings never stop a conversion. They are kept in the order they were
/// detected; `Display` gives the message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionWarning {
    /// An answer row appeared before any question row.
    AnswerBeforeQuestion { line: u64 },
    /// The row kind column held something other than Q or A.
    UnrecognizedRowKind { value: String, line: u64 },
    /// A question had more answers than there are option slots.
    TooManyAnswers {
        question_prefix: String,
        answer_count: usize,
    },
}

impl ConversionWarning {
    /// Build a [`ConversionWarning::TooManyAnswers`] quoting the start of the question.
    pub fn too_many_answers(question_text: &str, answer_count: usize) -> Self {
        ConversionWarning::TooManyAnswers {
            question_prefix: question_text.chars().take(QUESTION_PREFIX_CHARS).collect(),
            answer_count,
        }
    }

    /// Source line the anomaly was found on, when it concerns a single row.
    pub fn line(&self) -> Option<u64> {
        match self {
            ConversionWarning::AnswerBeforeQuestion { line }
            | ConversionWarning::UnrecognizedRowKind { line, .. } => Some(*line),
            ConversionWarning::TooManyAnswers { .. } => None,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionWarning::AnswerBeforeQuestion { .. } => write!(
                f,
                "Encountered answer row before any question row; skipping answer."
            ),
            ConversionWarning::UnrecognizedRowKind { value, .. } => {
                write!(f, "Unrecognized TNpe value '{value}' encountered; row skipped.")
            }
            ConversionWarning::TooManyAnswers {
                question_prefix, ..
            } => write!(
                f,
                "Question '{question_prefix}...' has more than 4 answer options; only the first four were retained."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConversionWarning::AnswerBeforeQuestion { line: 2 }.to_string(),
            "Encountered answer row before any question row; skipping answer."
        );
        assert_eq!(
            ConversionWarning::UnrecognizedRowKind {
                value: "X".to_string(),
                line: 5
            }
            .message(),
            "Unrecognized TNpe value 'X' encountered; row skipped."
        );
    }

    #[test]
    fn test_too_many_answers_truncates_by_characters() {
        let text = "é".repeat(40);
        let warning = ConversionWarning::too_many_answers(&text, 6);
        match &warning {
            ConversionWarning::TooManyAnswers {
                question_prefix,
                answer_count,
            } => {
                assert_eq!(question_prefix.chars().count(), QUESTION_PREFIX_CHARS);
                assert_eq!(*answer_count, 6);
            }
            other => panic!("unexpected warning: {other:?}"),
        }
        assert!(warning.to_string().ends_with("only the first four were retained."));
        assert_eq!(warning.line(), None);
    }

    #[test]
    fn test_short_question_is_not_padded() {
        let warning = ConversionWarning::too_many_answers("Pick one", 5);
        assert_eq!(
            warning.to_string(),
            "Question 'Pick one...' has more than 4 answer options; only the first four were retained."
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(ConversionWarning::AnswerBeforeQuestion { line: 3 }).unwrap();
        assert_eq!(json["kind"], "answer_before_question");
        assert_eq!(json["line"], 3);
    }
}
