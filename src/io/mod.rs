//! Thin input and output helpers around the fitting core.
//!
//! - [`ingest`]: turn CSV or pasted text into time/concentration sequences
//! - [`export`]: write observed and predicted concentrations as CSV
//! - [`report`]: plain-text summary of a fit

pub mod export;
pub mod ingest;
pub mod report;

pub use export::{export_columns, export_csv, write_csv};
pub use ingest::{parse_columns, parse_csv, parse_pairs, read_csv_file};
pub use report::generate_report;
