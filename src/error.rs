use std::path::PathBuf;
use thiserror::Error;

/// Failure to read one of the two source tables. Always fatal.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Data file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Missing column '{column}' in {table} table")]
    MissingColumn { table: &'static str, column: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Failed to load dataset: {0}")]
    Load(#[from] DataLoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
