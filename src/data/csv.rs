//! CSV loading for training samples.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled correctly
//! - Every column but the last is a feature; the last column is the expected
//!   output. All values are unsigned integers.

use std::path::Path;

use crate::error::{PerceptronError, Result};
use crate::network::Sample;

/// Reads and parses a CSV file into samples.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let data = std::fs::read(path)?;
    parse_samples(&data)
}

/// Parses CSV bytes into samples.
///
/// Rows are numbered from 1 after the header; row 0 refers to the input as a
/// whole.
pub fn parse_samples(data: &[u8]) -> Result<Vec<Sample>> {
    let text = std::str::from_utf8(data).map_err(|_| dataset_error(0, "CSV file is not valid UTF-8"))?;

    let mut lines = text.lines().peekable();

    // Auto-detect header: skip first line if any cell is non-numeric.
    if let Some(first) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut samples: Vec<Sample> = Vec::new();

    for (row_idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = row_idx + 1;

        let cells = parse_csv_row(line);
        let Some((label_cell, feature_cells)) = cells.split_last() else {
            continue;
        };
        if feature_cells.is_empty() {
            return Err(dataset_error(
                row,
                format!("expected at least 2 columns (features + expected output), got {}", cells.len()),
            ));
        }

        let features = feature_cells
            .iter()
            .map(|cell| parse_unsigned(cell, row))
            .collect::<Result<Vec<u32>>>()?;
        let expected = parse_unsigned(label_cell, row)?;

        if let Some(first) = samples.first() {
            if features.len() != first.feature_count() {
                return Err(dataset_error(
                    row,
                    format!(
                        "feature count {} does not match first row's {}",
                        features.len(),
                        first.feature_count()
                    ),
                ));
            }
        }

        samples.push(Sample::new(features, expected));
    }

    if samples.is_empty() {
        return Err(dataset_error(0, "CSV contains no data rows after parsing"));
    }

    Ok(samples)
}

fn dataset_error(row: usize, message: impl Into<String>) -> PerceptronError {
    PerceptronError::Dataset { row, message: message.into() }
}

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    let cells = parse_csv_row(line);
    cells.iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_unsigned(cell: &str, row: usize) -> Result<u32> {
    cell.trim()
        .parse::<u32>()
        .map_err(|_| dataset_error(row, format!("'{}' is not an unsigned integer", cell)))
}
