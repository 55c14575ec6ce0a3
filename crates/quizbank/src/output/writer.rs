//! CSV serialization of converted records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{QuizBankError, Result};
use crate::schema::{OUTPUT_FIELDS, OutputRecord};

/// Write the header and every record to `writer`.
///
/// Lines end in CRLF and values are quoted only when they contain the
/// delimiter, a quote or a line break.
pub fn write_output<'a, W: Write>(
    writer: W,
    records: impl IntoIterator<Item = &'a OutputRecord>,
) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(OUTPUT_FIELDS)?;

    let mut written = 0;
    for record in records {
        wtr.write_record(record.values())?;
        written += 1;
    }
    wtr.flush()?;

    Ok(written)
}

/// Write records to a CSV file.
///
/// Rows go to a temporary file beside `path`, which is renamed over the target
/// only once everything was written. A failed write leaves any existing file
/// untouched.
pub fn write_output_csv<'a>(
    path: impl AsRef<Path>,
    records: impl IntoIterator<Item = &'a OutputRecord>,
) -> Result<usize> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    let result = write_to_temp(&temp_path, records);
    let written = match result {
        Ok(written) => written,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        QuizBankError::io(path, e)
    })?;

    tracing::info!(path = %path.display(), records = written, "wrote converted CSV");
    Ok(written)
}

fn write_to_temp<'a>(
    temp_path: &Path,
    records: impl IntoIterator<Item = &'a OutputRecord>,
) -> Result<usize> {
    let file = File::create(temp_path).map_err(|e| QuizBankError::io(temp_path, e))?;
    let mut buffered = BufWriter::new(file);
    let written =
        write_output(&mut buffered, records).map_err(|e| with_path(temp_path, e))?;

    let file = buffered
        .into_inner()
        .map_err(|e| QuizBankError::io(temp_path, e.into_error()))?;
    file.sync_all().map_err(|e| QuizBankError::io(temp_path, e))?;

    Ok(written)
}

/// Attach `path` to stream and CSV errors that lack one.
fn with_path(path: &Path, err: QuizBankError) -> QuizBankError {
    match err {
        QuizBankError::Stream(e) => QuizBankError::io(path, e),
        QuizBankError::Csv(e) => QuizBankError::io(path, e.into()),
        other => other,
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
