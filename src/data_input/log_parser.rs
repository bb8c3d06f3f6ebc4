// src/data_input/log_parser.rs

use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::MIN_VALID_ROWS;
use crate::data_input::column_mapping::{resolve_columns, ColumnIndex, Role};
use crate::data_input::log_data::NormalizedSeries;
use crate::error::LogError;
use crate::types::{RawRow, Sample};

/// Parses one numeric cell. Accepts decimal comma or decimal point ("3,14" and "3.14").
/// Empty, unparseable and non-finite cells give `None`.
pub fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        // Non-finite coordinates cannot be plotted, so they count as missing.
        .filter(|v| v.is_finite())
}

/// Picks the field delimiter from the header line: `;` first, then tab, otherwise `,`.
pub fn detect_delimiter(header_line: &str) -> u8 {
    if header_line.contains(';') {
        b';'
    } else if header_line.contains('\t') {
        b'\t'
    } else {
        b','
    }
}

/// Splits CSV text into raw rows, header row first. A leading UTF-8 BOM is ignored.
/// Blank lines are skipped and rows may have any number of cells.
pub fn read_raw_rows(content: &str, source: &Path) -> Result<Vec<RawRow>, LogError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim().is_empty() {
        return Err(LogError::EmptyInput(source.to_path_buf()));
    }

    let header_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default();
    let delimiter = detect_delimiter(header_line);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| LogError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(LogError::EmptyInput(source.to_path_buf()));
    }
    Ok(rows)
}

/// Builds the normalized series from a header row and the data rows that follow it.
///
/// Rows are kept only if elapsed, X and Z are all valid; Y may be missing per row.
/// Without an elapsed column, elapsed is derived as `t - t0` where `t0` is the
/// first valid timestamp; rows before it (or without a valid timestamp) are dropped.
///
/// # Errors
/// * `MissingColumns` / `MissingTimeBasis` from column discovery.
/// * `InsufficientData` if fewer than two rows survive.
pub fn normalize_rows(header: &[String], data: &[RawRow]) -> Result<NormalizedSeries, LogError> {
    let columns = resolve_columns(header)?;
    log_column_mapping(header, &columns);

    let cell = |row: &RawRow, idx: Option<usize>| -> Sample {
        idx.and_then(|i| row.get(i)).and_then(|s| parse_number(s))
    };

    let mut time: Vec<Sample> = Vec::new();
    let mut elapsed: Vec<f64> = Vec::new();
    let mut x: Vec<f64> = Vec::new();
    let mut y: Vec<Sample> = Vec::new();
    let mut z: Vec<f64> = Vec::new();
    let mut time_origin: Option<f64> = None;
    let mut dropped = 0usize;

    for row in data {
        let t = cell(row, columns.time);

        let el = match columns.elapsed {
            Some(i) => cell(row, Some(i)),
            None => match t {
                Some(t) => {
                    let origin = *time_origin.get_or_insert(t);
                    Some(t - origin)
                }
                None => {
                    dropped += 1;
                    continue;
                }
            },
        };

        let (Some(el), Some(px), Some(pz)) =
            (el, cell(row, Some(columns.x)), cell(row, Some(columns.z)))
        else {
            dropped += 1;
            continue;
        };

        time.push(t);
        elapsed.push(el);
        x.push(px);
        y.push(cell(row, columns.y));
        z.push(pz);
    }

    info!(
        "Retained {} of {} data rows ({} dropped).",
        elapsed.len(),
        data.len(),
        dropped
    );

    if elapsed.len() < MIN_VALID_ROWS {
        return Err(LogError::InsufficientData {
            valid_rows: elapsed.len(),
        });
    }

    let y = if y.iter().all(Option::is_none) {
        debug!("No valid elevation samples, elevation marked absent.");
        None
    } else {
        Some(y)
    };

    Ok(NormalizedSeries {
        time: columns.time.map(|_| time),
        elapsed,
        x,
        y,
        z,
    })
}

/// Reads a positional log file and normalizes it.
pub fn parse_log_file(input_file_path: &Path) -> Result<NormalizedSeries, LogError> {
    let content =
        fs::read_to_string(input_file_path).map_err(|e| LogError::io(input_file_path, e))?;
    let rows = read_raw_rows(&content, input_file_path)?;
    let (header, data) = rows
        .split_first()
        .ok_or_else(|| LogError::EmptyInput(input_file_path.to_path_buf()))?;
    debug!("Headers found in CSV: {:?}", header);
    normalize_rows(header, data)
}

fn log_column_mapping(header: &[String], columns: &ColumnIndex) {
    debug!("Header mapping status:");
    for role in Role::ALL {
        match columns.get(role) {
            Some(i) => debug!("  '{}': column {} ('{}')", role, i, header[i].trim()),
            None => debug!("  '{}': Not Found", role),
        }
    }
}


// src/data_input/log_parser.rs
