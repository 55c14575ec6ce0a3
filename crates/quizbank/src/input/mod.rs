//! Input decoding, parsing and raw row handling.

mod encoding;
mod reader;
mod source;

pub use encoding::{
    CANDIDATE_ENCODINGS, DecodedText, SourceEncoding, decode_with_candidates, decode_with_fallback,
};
pub use reader::{QuestionBankReader, ReaderConfig, detect_delimiter, detect_delimiter_with_quote};
pub use source::{RawRow, SourceMetadata};
