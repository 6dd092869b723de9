use std::fs::File;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::errors::{CsvSnafu, OpenFileSnafu, ParseScoreSnafu, Result};

/// read every data line of a csv file with a header row.
/// columns are matched by header name, extra columns and trailing extra fields are ignored.
/// a line with fewer fields than the columns `T` needs is a csv error.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).context(OpenFileSnafu { path })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let rows = reader
        .deserialize()
        .map(|row| row.context(CsvSnafu { path }))
        .collect::<Result<Vec<T>>>()?;

    debug!(target: "models/general:read_csv", "read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// convert the text of a score column to a number.
/// `row` is the 1-based data row, used for the error message only.
pub fn parse_score(path: &Path, row: usize, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => ParseScoreSnafu { path, row, value }.fail(),
    }
}
