//! Difficulty level normalization.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::schema::normalize_key;

/// Canonical difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    VeryHard,
}

/// Numeric level codes.
static LEVEL_NUMERIC: Lazy<HashMap<&'static str, Difficulty>> = Lazy::new(|| {
    HashMap::from([
        ("1", Difficulty::Easy),
        ("2", Difficulty::Medium),
        ("3", Difficulty::Hard),
        ("4", Difficulty::VeryHard),
    ])
});

/// Text synonyms, keyed by normalized form.
static LEVEL_TEXT: Lazy<HashMap<&'static str, Difficulty>> = Lazy::new(|| {
    HashMap::from([
        ("easy", Difficulty::Easy),
        ("simple", Difficulty::Easy),
        ("basic", Difficulty::Easy),
        ("medium", Difficulty::Medium),
        ("moderate", Difficulty::Medium),
        // misspelling found in real exports
        ("modreate", Difficulty::Medium),
        ("intermediate", Difficulty::Medium),
        ("hard", Difficulty::Hard),
        ("difficult", Difficulty::Hard),
        ("challenging", Difficulty::Hard),
        ("veryhard", Difficulty::VeryHard),
        ("extreme", Difficulty::VeryHard),
    ])
});

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very_hard",
        }
    }

    /// Map a raw level to a canonical difficulty.
    ///
    /// If the value holds any digits, only the digits count ("Level 2" is
    /// "2"). Otherwise the normalized text is matched against known synonyms.
    /// Anything unrecognized, including empty input, is [`Difficulty::Easy`].
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Difficulty::Easy;
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if !digits.is_empty() {
            return LEVEL_NUMERIC
                .get(digits.as_str())
                .copied()
                .unwrap_or_default();
        }

        LEVEL_TEXT
            .get(normalize_key(raw).as_str())
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`Difficulty::from_raw`].
pub fn normalize_difficulty(raw: &str) -> Difficulty {
    Difficulty::from_raw(raw)
}
