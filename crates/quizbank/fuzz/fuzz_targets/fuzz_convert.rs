//! Fuzz target for the full conversion pipeline.
//!
//! Conversion must never panic on malformed input, and can never produce
//! more records than the source has rows.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quizbank::{Converter, ConverterConfig, ReaderConfig};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    for delimiter in [Some(b','), None] {
        let converter = Converter::with_config(ConverterConfig {
            reader: ReaderConfig {
                delimiter,
                ..ReaderConfig::default()
            },
        });

        if let Ok(conversion) = converter.convert_bytes(data) {
            assert!(conversion.records.len() <= conversion.source.row_count);
            let mut sink = Vec::new();
            let _ = quizbank::write_output(&mut sink, &conversion.records);
        }
    }
});
