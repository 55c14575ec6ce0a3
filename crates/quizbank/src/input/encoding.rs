//! Candidate text encodings for question bank exports.
//!
//! Exports come out of spreadsheet tools on different platforms, so the same
//! file may arrive as UTF-8 with or without a byte-order mark, or in a
//! single-byte Western code page. Each candidate is a separate decode attempt;
//! the first one that decodes the whole input wins.

use std::borrow::Cow;

use encoding_rs::{UTF_8, WINDOWS_1252};
use serde::{Deserialize, Serialize};

use crate::error::{QuizBankError, Result};

const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// A text encoding the reader knows how to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceEncoding {
    /// UTF-8, stripping a leading byte-order mark if present.
    Utf8Sig,
    /// Plain UTF-8.
    Utf8,
    /// ISO-8859-1. Every byte maps to a code point, so this never fails.
    Latin1,
    /// Windows code page 1252.
    Windows1252,
}

/// Encodings in the order they are attempted.
pub const CANDIDATE_ENCODINGS: &[SourceEncoding] = &[
    SourceEncoding::Utf8Sig,
    SourceEncoding::Utf8,
    SourceEncoding::Latin1,
    SourceEncoding::Windows1252,
];

impl SourceEncoding {
    /// Conventional label for this encoding.
    pub fn label(self) -> &'static str {
        match self {
            SourceEncoding::Utf8Sig => "utf-8-sig",
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::Latin1 => "latin-1",
            SourceEncoding::Windows1252 => "cp1252",
        }
    }

    /// Decode the whole input, returning `None` on the first malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            SourceEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8.decode_without_bom_handling_and_without_replacement(body)
            }
            SourceEncoding::Utf8 => UTF_8.decode_without_bom_handling_and_without_replacement(bytes),
            SourceEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
            SourceEncoding::Windows1252 => {
                WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Text produced by a successful decode attempt.
#[derive(Debug, Clone)]
pub struct DecodedText<'a> {
    pub text: Cow<'a, str>,
    pub encoding: SourceEncoding,
}

/// Decode using [`CANDIDATE_ENCODINGS`].
pub fn decode_with_fallback(bytes: &[u8]) -> Result<DecodedText<'_>> {
    decode_with_candidates(bytes, CANDIDATE_ENCODINGS)
}

/// Try each candidate in order and stop at the first clean decode.
pub fn decode_with_candidates<'a>(
    bytes: &'a [u8],
    candidates: &[SourceEncoding],
) -> Result<DecodedText<'a>> {
    let mut attempted = Vec::with_capacity(candidates.len());

    for &encoding in candidates {
        attempted.push(encoding.label());
        match encoding.decode(bytes) {
            Some(text) => {
                tracing::debug!(encoding = encoding.label(), "decoded input");
                return Ok(DecodedText { text, encoding });
            }
            None => {
                tracing::debug!(encoding = encoding.label(), "decode attempt failed");
            }
        }
    }

    Err(QuizBankError::Decode { attempted })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8_uses_first_candidate() {
        let decoded = decode_with_fallback("TNpe,Description\nQ,Café\n".as_bytes()).unwrap();
        assert_eq!(decoded.encoding, SourceEncoding::Utf8Sig);
        assert!(decoded.text.contains("Café"));
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"TNpe,Description\n");
        let decoded = decode_with_fallback(&bytes).unwrap();
        assert_eq!(decoded.encoding, SourceEncoding::Utf8Sig);
        assert!(decoded.text.starts_with("TNpe"));
    }

    #[test]
    fn test_plain_utf8_keeps_bom_character() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"A");
        let text = SourceEncoding::Utf8.decode(&bytes).unwrap();
        assert_eq!(text, "\u{feff}A");
    }

    #[test]
    fn test_latin1_fallback() {
        // 0xE9 is 'é' in Latin-1 and an invalid lone byte in UTF-8.
        let bytes = b"Description\nCaf\xE9\n";
        let decoded = decode_with_fallback(bytes).unwrap();
        assert_eq!(decoded.encoding, SourceEncoding::Latin1);
        assert!(decoded.text.contains("Café"));
    }

    #[test]
    fn test_windows_1252_maps_smart_quotes() {
        let text = SourceEncoding::Windows1252.decode(b"\x93quoted\x94").unwrap();
        assert_eq!(text, "\u{201c}quoted\u{201d}");
    }

    #[test]
    fn test_all_candidates_fail() {
        let err = decode_with_candidates(b"\xFF\xFE\xFD", &[SourceEncoding::Utf8Sig, SourceEncoding::Utf8])
            .unwrap_err();
        match err {
            QuizBankError::Decode { attempted } => {
                assert_eq!(attempted, vec!["utf-8-sig", "utf-8"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input_decodes() {
        let decoded = decode_with_fallback(b"").unwrap();
        assert!(decoded.text.is_empty());
    }
}
