//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, parse_csv_line};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped when the header is normalized)
    Ok(())
}

/// Reads the header row. An empty file yields empty headers.
pub fn read_csv_header(path: &Path) -> Result<CsvHeaders> {
    let reader = BufReader::new(open(path)?);
    let Some(line) = reader.lines().next() else {
        return Ok(CsvHeaders::default());
    };
    let line = line.map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let columns: Vec<String> = parse_csv_line(&line)
        .into_iter()
        .filter(|column| !column.is_empty())
        .collect();
    Ok(CsvHeaders::new(columns))
}

/// Reads a CSV table after checking its header for the `required` columns.
///
/// All columns are loaded as strings; typed extraction happens in
/// [`crate::records`]. A header-only file yields a zero-row DataFrame.
pub fn read_csv_table(
    path: &Path,
    table: &'static str,
    required: &[&str],
) -> Result<(DataFrame, CsvHeaders)> {
    validate_encoding(path)?;
    let headers = read_csv_header(path)?;
    let missing = headers.missing(required);
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            table,
            path: path.to_path_buf(),
            columns: missing.into_iter().map(str::to_string).collect(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        table,
        rows = df.height(),
        columns = df.width(),
        "loaded CSV table"
    );

    Ok((df, headers))
}
