// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::ResultSet;
use crate::infrastructure::storage::StorageError;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// How to open the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write the header row before the records.
    Create,
    /// Append records only; the header is assumed to exist already.
    Append,
}

/// Write a result set as a delimited file. The header row is the result
/// set's column schema; absent values become empty cells.
pub fn write_table(results: &ResultSet, path: &Path, mode: WriteMode) -> Result<(), StorageError> {
    let file = match mode {
        WriteMode::Create => File::create(path)?,
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
    };

    let mut writer = csv::Writer::from_writer(file);
    if mode == WriteMode::Create {
        writer.write_record(results.columns())?;
    }
    for record in results.records() {
        writer.write_record(results.row(record))?;
    }
    writer.flush()?;
    Ok(())
}
