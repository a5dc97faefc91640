//! Delimited-table readers and atomic writers.
//!
//! Readers validate the header row before deserializing and reject
//! empty tables. Writers go through a temporary file in the destination
//! directory that is renamed into place on success, so a failed run
//! leaves either no output or the previous run's output untouched.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::errors::DatasetError;
use crate::utils::strip_bom;

/// Read a tab-separated table with a header row.
pub fn read_tsv<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>, DatasetError> {
    read_rows(path, b'\t', required)
}

/// Read a comma-separated table with a header row.
pub fn read_csv<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>, DatasetError> {
    read_rows(path, b',', required)
}

fn read_rows<T: DeserializeOwned>(
    path: &Path,
    delimiter: u8,
    required: &[&str],
) -> Result<Vec<T>, DatasetError> {
    let raw = fs::read(path)
        .map_err(|err| DatasetError::malformed(path, format!("cannot read file: {err}")))?;
    let text = String::from_utf8(raw)
        .map_err(|err| DatasetError::malformed(path, format!("not valid UTF-8: {err}")))?;
    let text = strip_bom(&text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|err| DatasetError::malformed(path, format!("unreadable header row: {err}")))?
        .clone();
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(DatasetError::malformed(
                path,
                format!("missing required column '{column}'"),
            ));
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let row: T = result.map_err(|err| {
            DatasetError::malformed(path, format!("undecodable row {}: {err}", idx + 1))
        })?;
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(DatasetError::malformed(path, "table has no data rows"));
    }
    Ok(rows)
}

/// Serialize rows as a delimited table, header included, renamed into
/// place on success.
pub fn write_delimited<T: Serialize>(
    path: &Path,
    delimiter: u8,
    rows: &[T],
) -> Result<(), DatasetError> {
    let temp = stage_output(path)?;
    {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(temp.as_file());
        for row in rows {
            writer
                .serialize(row)
                .map_err(|err| DatasetError::output_path(path, err))?;
        }
        writer
            .flush()
            .map_err(|err| DatasetError::output_path(path, err))?;
    }
    commit_output(temp, path)
}

/// Serialize rows as newline-delimited JSON, renamed into place on
/// success. Non-ASCII text is written as-is (UTF-8).
pub fn write_jsonl<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), DatasetError> {
    let temp = stage_output(path)?;
    {
        let mut out = BufWriter::new(temp.as_file());
        for row in rows {
            let line = serde_json::to_string(row)
                .map_err(|err| DatasetError::output_path(path, err))?;
            out.write_all(line.as_bytes())
                .and_then(|()| out.write_all(b"\n"))
                .map_err(|err| DatasetError::output_path(path, err))?;
        }
        out.flush()
            .map_err(|err| DatasetError::output_path(path, err))?;
    }
    commit_output(temp, path)
}

/// Create the destination directory and a staging temp file inside it.
/// The temp file must live in the same directory for the final rename
/// to stay atomic.
fn stage_output(path: &Path) -> Result<NamedTempFile, DatasetError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|err| DatasetError::output_path(path, err))?;
    NamedTempFile::new_in(parent).map_err(|err| DatasetError::output_path(path, err))
}

fn commit_output(temp: NamedTempFile, path: &Path) -> Result<(), DatasetError> {
    temp.persist(path)
        .map_err(|err| DatasetError::output_path(path, err.error))?;
    Ok(())
}
