//! Error types for the plate analysis pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for homogenization, solver and reference-data operations
#[derive(Error, Debug)]
pub enum PlateError {
    #[error("Unknown composite topology '{0}' (expected 'fiber' or 'polydisperse')")]
    UnknownTopology(String),

    #[error("Unsupported loading '{0}' (expected 'uniform' or 'focused')")]
    UnsupportedLoading(String),

    #[error("Degenerate stiffness: {0}")]
    DegenerateStiffness(String),

    #[error("Singular stiffness: {0}")]
    SingularStiffness(String),

    #[error("Reference data not found at {}", .0.display())]
    MissingReferenceData(PathBuf),

    #[error("Malformed reference row at {}:{line}: '{content}'", path.display())]
    MalformedReferenceRow {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for plate operations
pub type PlateResult<T> = Result<T, PlateError>;
