//! Error types for the daily report library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the daily report library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report folder name is not a D-M-Y date
    #[error("Unparseable report date '{0}': expected day-month-year, e.g. 9-9-2030")]
    UnparseableDate(String),

    /// Date override expression could not be understood
    #[error("Invalid date expression: {0}")]
    InvalidDateExpression(String),

    /// A numbered image needed by a grid slot does not exist
    #[error("Missing image {index} in category '{category}'")]
    MissingImage { category: String, index: usize },

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// General error
    #[error("{0}")]
    General(String),
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Self {
        Error::InvalidGlob(e.to_string())
    }
}
