//! Fuzz target for value normalizers.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quizbank::normalize::{normalize_difficulty, normalize_question_type};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = normalize_difficulty(s);
        let _ = normalize_question_type(s);
    }
});
