use crate::types::CellError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type DrtResult<T> = Result<T, DrtError>;

#[derive(Error, Debug)]
pub enum DrtError {
    #[error("Excel file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("ERROR reading Excel file {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Cell(#[from] CellError),

    #[error("could not read required values: {}", join_failures(.0))]
    Extraction(Vec<FieldError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One field that failed during the extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

fn join_failures(failures: &[FieldError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DrtError {
    /// Field-level failures, when this is an extraction error.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            DrtError::Extraction(failures) => failures,
            _ => &[],
        }
    }
}
