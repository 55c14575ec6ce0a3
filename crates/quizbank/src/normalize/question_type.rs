//! Question type normalization.

use serde::{Deserialize, Serialize};

/// Canonical question type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    ShortAnswer,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::ShortAnswer => "short_answer",
        }
    }

    /// Map a source type code.
    ///
    /// `R` (radio) and `C` (checkbox) are multiple choice, `L` (one-liner) is
    /// short answer. Any other code, including empty, is multiple choice.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "L" => QuestionType::ShortAnswer,
            "R" | "C" => QuestionType::MultipleChoice,
            _ => QuestionType::MultipleChoice,
        }
    }

    pub fn is_short_answer(self) -> bool {
        self == QuestionType::ShortAnswer
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`QuestionType::from_code`].
pub fn normalize_question_type(code: &str) -> QuestionType {
    QuestionType::from_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(QuestionType::from_code("R"), QuestionType::MultipleChoice);
        assert_eq!(QuestionType::from_code("c"), QuestionType::MultipleChoice);
        assert_eq!(QuestionType::from_code(" l "), QuestionType::ShortAnswer);
    }

    #[test]
    fn test_unknown_codes_default_to_multiple_choice() {
        assert_eq!(QuestionType::from_code(""), QuestionType::MultipleChoice);
        assert_eq!(QuestionType::from_code("X"), QuestionType::MultipleChoice);
        assert_eq!(QuestionType::from_code("Long"), QuestionType::MultipleChoice);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(QuestionType::ShortAnswer.as_str(), "short_answer");
        assert!(QuestionType::ShortAnswer.is_short_answer());
        assert!(!QuestionType::MultipleChoice.is_short_answer());
    }
}
