use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Catalog loading errors
// ---------------------------------------------------------------------------

/// Failure while reading the car catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file does not exist. The caller shows a notice and carries on
    /// with an empty catalog.
    #[error("Cars data file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A row had the right number of fields but one of the numeric ones did
    /// not parse. This aborts the whole load.
    #[error("line {line}: {field} value '{value}' is not a valid number")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("reading catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing catalog: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

// ---------------------------------------------------------------------------
// Form input errors
// ---------------------------------------------------------------------------

/// A buyer form field could not be converted to a number.
///
/// The message is deliberately generic: it names every numeric field and does
/// not say which one was wrong. `field` is kept for logging only.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Please enter valid numbers for budget, fuel efficiency, and safety rating.")]
pub struct InputError {
    pub field: &'static str,
    pub value: String,
}
