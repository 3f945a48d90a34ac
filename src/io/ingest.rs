//! Parsing time/concentration data.
//!
//! Only the shape of the input is checked here: the right columns exist and
//! every field is a number. Whether the numbers can be fitted is decided by
//! the validation gate.

use std::fs;
use std::path::Path;

use csv::StringRecord;

use crate::error::{KineticsError, Result};

/// Parsed time and concentration sequences, in input order.
pub type Columns = (Vec<f64>, Vec<f64>);

const TIME_COLUMN: &str = "time";
const CONCENTRATION_COLUMN: &str = "concentration";

/// Parse a CSV table with `time` and `concentration` columns.
///
/// Column names are case-sensitive; other columns are ignored.
///
/// ```
/// use kinfit_rs::io::parse_csv;
///
/// let (time, conc) = parse_csv("time,concentration\n0,10\n5,8.5\n").unwrap();
/// assert_eq!(time, vec![0.0, 5.0]);
/// assert_eq!(conc, vec![10.0, 8.5]);
/// ```
pub fn parse_csv(content: &str) -> Result<Columns> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let time_idx = column_index(&headers, TIME_COLUMN);
    let conc_idx = column_index(&headers, CONCENTRATION_COLUMN);
    let (time_idx, conc_idx) = match (time_idx, conc_idx) {
        (Some(t), Some(c)) => (t, c),
        _ => {
            return Err(KineticsError::InvalidInput(
                "CSV must contain 'time' and 'concentration' columns".to_string(),
            ))
        }
    };

    let mut time = Vec::new();
    let mut concentration = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // header is line 1
        let line = row + 2;
        time.push(parse_field(&record, time_idx, TIME_COLUMN, line)?);
        concentration.push(parse_field(&record, conc_idx, CONCENTRATION_COLUMN, line)?);
    }

    Ok((time, concentration))
}

/// Read a file and [`parse_csv`] it.
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<Columns> {
    let content = fs::read_to_string(path)?;
    parse_csv(&content)
}

/// Parse two whitespace-separated lists of numbers, one per sequence.
///
/// The lists are not required to have the same length here.
pub fn parse_columns(time_text: &str, concentration_text: &str) -> Result<Columns> {
    Ok((
        parse_numbers(time_text, TIME_COLUMN)?,
        parse_numbers(concentration_text, CONCENTRATION_COLUMN)?,
    ))
}

/// Parse `time,concentration` pairs, one per line. Blank lines are skipped.
pub fn parse_pairs(text: &str) -> Result<Columns> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut time = Vec::new();
    let mut concentration = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map_or(row + 1, |p| p.line() as usize);
        time.push(parse_field(&record, 0, TIME_COLUMN, line)?);
        concentration.push(parse_field(&record, 1, CONCENTRATION_COLUMN, line)?);
    }

    Ok((time, concentration))
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn parse_field(record: &StringRecord, idx: usize, column: &str, line: usize) -> Result<f64> {
    let field = record.get(idx).ok_or_else(|| {
        KineticsError::InvalidInput(format!("Line {}: missing {} value", line, column))
    })?;

    field.parse::<f64>().map_err(|_| {
        KineticsError::InvalidInput(format!(
            "Line {}: {} value '{}' is not a number",
            line, column, field
        ))
    })
}

fn parse_numbers(text: &str, what: &str) -> Result<Vec<f64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                KineticsError::InvalidInput(format!("{} value '{}' is not a number", what, token))
            })
        })
        .collect()
}
