//! Export observed and predicted concentrations to CSV.

use std::fs;
use std::path::Path;

use ndarray::Array1;

use crate::error::{KineticsError, Result};
use crate::fit::FitResult;

const HEADER: [&str; 3] = ["time", "experimental_concentration", "predicted_concentration"];

/// CSV text with one row per observation time.
pub fn export_columns(
    times: &Array1<f64>,
    observed: &Array1<f64>,
    predicted: &Array1<f64>,
) -> Result<String> {
    if times.len() != observed.len() || times.len() != predicted.len() {
        return Err(KineticsError::DimensionMismatch(format!(
            "Cannot export {} times with {} observed and {} predicted values",
            times.len(),
            observed.len(),
            predicted.len()
        )));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for ((t, c), p) in times.iter().zip(observed).zip(predicted) {
        writer.write_record([t.to_string(), c.to_string(), p.to_string()])?;
    }

    let bytes = writer.into_inner().map_err(|e| KineticsError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| KineticsError::InvalidInput(e.to_string()))
}

/// CSV text for a fit: observation times, observed and predicted values.
pub fn export_csv(result: &FitResult) -> Result<String> {
    export_columns(&result.times, &result.observed, &result.predicted)
}

/// Write [`export_csv`] output to `path`.
pub fn write_csv<P: AsRef<Path>>(path: P, result: &FitResult) -> Result<()> {
    fs::write(path, export_csv(result)?)?;
    Ok(())
}
